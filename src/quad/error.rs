use std::io;

/// Errors reported by the checked and incremental quad entry points.
///
/// The unchecked tier never returns these; it panics on undersized slices.
#[derive(Debug, thiserror::Error)]
pub enum QuadError {
    /// The buffer is shorter than the quad requires. Nothing was written
    /// or consumed; retry with a larger buffer or more input.
    #[error("insufficient buffer ({available} bytes, need {needed})")]
    Insufficient { needed: usize, available: usize },

    /// The byte source failed mid-quad. No partial quad is produced.
    #[error("byte source error: {0}")]
    Io(#[from] io::Error),
}

impl QuadError {
    /// True for the recoverable "give me more bytes" condition.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Insufficient { .. })
    }
}

impl From<QuadError> for io::Error {
    fn from(e: QuadError) -> io::Error {
        match e {
            QuadError::Io(e) => e,
            e @ QuadError::Insufficient { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, e),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuadError>;
