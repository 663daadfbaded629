// Quad decoder.
//
// All entry points share one reconstruction rule: look up the four field
// lengths for the control byte, fold each field's bytes big-endian into a
// `u32`, then undo delta coding when requested.
//
// Entry points:
//   - `decode`           checked buffer decode (short input is reported)
//   - `decode_unchecked` caller already validated the length (panics if not)
//   - `decode_from`      one byte at a time from a `ByteSource`
//   - `decode_inline`    checked decode of a control byte followed by data

use std::io::{self, Read};

use super::delta::delta_decode;
use super::error::{QuadError, Result};
use super::lookup::{self, QUAD_LEN};

// ---------------------------------------------------------------------------
// Byte source
// ---------------------------------------------------------------------------

/// A source that yields the next byte of input or fails.
///
/// Every `std::io::Read` is a byte source; the cursor position lives in the
/// reader, not in the codec.
pub trait ByteSource {
    fn next_byte(&mut self) -> io::Result<u8>;
}

impl<R: Read + ?Sized> ByteSource for R {
    #[inline]
    fn next_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

// ---------------------------------------------------------------------------
// Buffer decoding
// ---------------------------------------------------------------------------

#[inline]
fn finish(values: [u32; QUAD_LEN], diff: bool) -> [u32; QUAD_LEN] {
    if diff { delta_decode(values) } else { values }
}

/// Decode one quad from `data`, trusting that it holds the whole data
/// section for `control`.
///
/// Returns the quad and the number of bytes consumed.
///
/// # Panics
///
/// Panics if `data` is shorter than the length `control` describes.
pub fn decode_unchecked(control: u8, data: &[u8], diff: bool) -> ([u32; QUAD_LEN], usize) {
    let (lens, _) = lookup::lengths(control);
    let mut values = [0u32; QUAD_LEN];
    let mut pos = 0usize;

    for (value, &len) in values.iter_mut().zip(&lens) {
        let end = pos + len as usize;
        *value = data[pos..end]
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        pos = end;
    }

    (finish(values, diff), pos)
}

/// Decode one quad from `data`, validating its length first.
///
/// A short buffer yields [`QuadError::Insufficient`] and nothing is read;
/// the caller can fetch more input and retry.
pub fn decode(control: u8, data: &[u8], diff: bool) -> Result<([u32; QUAD_LEN], usize)> {
    let needed = lookup::data_len(control);
    if data.len() < needed {
        log::trace!(
            "decode: control {control:#04x} needs {needed} bytes, have {}",
            data.len()
        );
        return Err(QuadError::Insufficient {
            needed,
            available: data.len(),
        });
    }
    Ok(decode_unchecked(control, data, diff))
}

/// Decode one inline quad: the control byte at `bytes[0]`, data after.
///
/// The consumed count includes the control byte.
pub fn decode_inline(bytes: &[u8], diff: bool) -> Result<([u32; QUAD_LEN], usize)> {
    let Some((&control, data)) = bytes.split_first() else {
        return Err(QuadError::Insufficient {
            needed: 1,
            available: 0,
        });
    };
    match decode(control, data, diff) {
        Ok((quad, n)) => Ok((quad, n + 1)),
        Err(QuadError::Insufficient { needed, available }) => Err(QuadError::Insufficient {
            needed: needed + 1,
            available: available + 1,
        }),
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Incremental decoding
// ---------------------------------------------------------------------------

/// Decode one quad by pulling bytes from `source`.
///
/// Any read failure is returned immediately and the partially accumulated
/// values are dropped.
pub fn decode_from<S: ByteSource + ?Sized>(
    control: u8,
    source: &mut S,
    diff: bool,
) -> Result<[u32; QUAD_LEN]> {
    let (lens, _) = lookup::lengths(control);
    let mut values = [0u32; QUAD_LEN];

    for (value, &len) in values.iter_mut().zip(&lens) {
        for _ in 0..len {
            *value = (*value << 8) | u32::from(source.next_byte()?);
        }
    }

    Ok(finish(values, diff))
}

/// Table-free decoder that reads field lengths straight from the control
/// bits. Cross-checks the table-driven path under test and fuzzing.
#[cfg(any(test, feature = "fuzzing"))]
pub fn decode_reference(control: u8, data: &[u8], diff: bool) -> Option<[u32; QUAD_LEN]> {
    let mut values = [0u32; QUAD_LEN];
    let mut bytes = data.iter();
    for (i, value) in values.iter_mut().enumerate() {
        let len = ((control >> lookup::field_shift(i)) & 0x3) + 1;
        for _ in 0..len {
            *value = (*value << 8) | u32::from(*bytes.next()?);
        }
    }
    Some(finish(values, diff))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
