// Inline and split layouts over runs of quads.
//
// Both layouts are plain concatenations of the per-quad encoding; there is
// no header, count or padding.  Split layout keeps control bytes in one
// stream and data bytes in another so the decoder can size the data stream
// from the control bytes alone before touching it.

use std::io::{self, Read};

use super::decoder::{decode_from, decode_inline, decode_unchecked};
use super::encoder::encode_unchecked;
use super::error::{QuadError, Result};
use super::lookup::{self, MAX_DATA_LEN, QUAD_LEN};

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append `quads` in split layout: one control byte per quad to `controls`,
/// the data sections to `data`.
pub fn encode_split(
    quads: &[[u32; QUAD_LEN]],
    diff: bool,
    controls: &mut Vec<u8>,
    data: &mut Vec<u8>,
) {
    controls.reserve(quads.len());
    data.reserve(quads.len() * MAX_DATA_LEN);

    let mut scratch = [0u8; MAX_DATA_LEN];
    for &quad in quads {
        let (control, n) = encode_unchecked(quad, diff, &mut scratch);
        controls.push(control);
        data.extend_from_slice(&scratch[..n]);
    }
    log::trace!(
        "encode_split: {} quads -> {} data bytes",
        quads.len(),
        data.len()
    );
}

/// Append `quads` in inline layout: each control byte directly precedes
/// its data section.
pub fn encode_inline_all(quads: &[[u32; QUAD_LEN]], diff: bool, out: &mut Vec<u8>) {
    out.reserve(quads.len() * (1 + MAX_DATA_LEN));

    let mut scratch = [0u8; MAX_DATA_LEN];
    for &quad in quads {
        let (control, n) = encode_unchecked(quad, diff, &mut scratch);
        out.push(control);
        out.extend_from_slice(&scratch[..n]);
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Total data bytes described by a run of control bytes.
pub fn split_data_len(controls: &[u8]) -> usize {
    controls.iter().map(|&c| lookup::data_len(c)).sum()
}

fn check_split(controls: &[u8], data: &[u8]) -> Result<usize> {
    let needed = split_data_len(controls);
    if data.len() < needed {
        log::trace!(
            "decode_split: {} controls need {needed} data bytes, have {}",
            controls.len(),
            data.len()
        );
        return Err(QuadError::Insufficient {
            needed,
            available: data.len(),
        });
    }
    Ok(needed)
}

/// Decode a split-layout run, appending one quad per control byte to `out`.
///
/// The data stream is validated against the control bytes before anything
/// is decoded; on [`QuadError::Insufficient`] `out` is unchanged. Returns the
/// number of data bytes consumed.
pub fn decode_split(
    controls: &[u8],
    data: &[u8],
    diff: bool,
    out: &mut Vec<[u32; QUAD_LEN]>,
) -> Result<usize> {
    let needed = check_split(controls, data)?;
    out.reserve(controls.len());

    let mut pos = 0usize;
    for &control in controls {
        let (quad, n) = decode_unchecked(control, &data[pos..], diff);
        out.push(quad);
        pos += n;
    }
    debug_assert_eq!(pos, needed);
    Ok(pos)
}

/// Decode consecutive inline quads until `bytes` is exhausted.
///
/// Quads are appended to `out` as they decode; a truncated final quad
/// reports [`QuadError::Insufficient`] after the complete ones were kept.
/// Returns the number of bytes consumed.
pub fn decode_inline_all(bytes: &[u8], diff: bool, out: &mut Vec<[u32; QUAD_LEN]>) -> Result<usize> {
    let mut pos = 0usize;
    while pos < bytes.len() {
        let (quad, n) = decode_inline(&bytes[pos..], diff)?;
        out.push(quad);
        pos += n;
    }
    Ok(pos)
}

/// Decode a split-layout run on the rayon pool.
///
/// Produces exactly what [`decode_split`] produces. Chunk boundaries in the
/// data stream are found from the control bytes up front, so every chunk
/// decodes independently.
#[cfg(feature = "parallel")]
pub fn decode_split_par(
    controls: &[u8],
    data: &[u8],
    diff: bool,
    out: &mut Vec<[u32; QUAD_LEN]>,
) -> Result<usize> {
    use rayon::prelude::*;

    const CHUNK_QUADS: usize = 4096;

    let needed = check_split(controls, data)?;

    let mut offsets = Vec::with_capacity(controls.len().div_ceil(CHUNK_QUADS));
    let mut offset = 0usize;
    for chunk in controls.chunks(CHUNK_QUADS) {
        offsets.push(offset);
        offset += split_data_len(chunk);
    }
    log::debug!(
        "decode_split_par: {} quads in {} chunks",
        controls.len(),
        offsets.len()
    );

    let start = out.len();
    out.resize(start + controls.len(), [0; QUAD_LEN]);
    out[start..]
        .par_chunks_mut(CHUNK_QUADS)
        .zip(controls.par_chunks(CHUNK_QUADS))
        .zip(offsets.par_iter())
        .for_each(|((dst, ctrl), &base)| {
            let mut pos = base;
            for (slot, &control) in dst.iter_mut().zip(ctrl) {
                let (quad, n) = decode_unchecked(control, &data[pos..], diff);
                *slot = quad;
                pos += n;
            }
        });

    Ok(needed)
}

// ---------------------------------------------------------------------------
// InlineReader
// ---------------------------------------------------------------------------

/// Iterator over inline quads pulled from a reader.
///
/// End of input at a control-byte boundary ends the iteration. End of input
/// inside a quad yields one `UnexpectedEof` error, after which the iterator
/// is exhausted.
pub struct InlineReader<R: Read> {
    reader: R,
    diff: bool,
    quads_read: u64,
    done: bool,
}

impl<R: Read> InlineReader<R> {
    pub fn new(reader: R, diff: bool) -> Self {
        Self {
            reader,
            diff,
            quads_read: 0,
            done: false,
        }
    }

    /// Number of quads successfully decoded so far.
    pub fn quads_read(&self) -> u64 {
        self.quads_read
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_control(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Iterator for InlineReader<R> {
    type Item = Result<[u32; QUAD_LEN]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = match self.read_control() {
            Ok(None) => {
                self.done = true;
                return None;
            }
            Ok(Some(control)) => decode_from(control, &mut self.reader, self.diff),
            Err(e) => Err(e.into()),
        };
        match result {
            Ok(_) => self.quads_read += 1,
            Err(_) => self.done = true,
        }
        Some(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
