// Quad encoder.
//
// Each integer is written big-endian using the fewest bytes that hold it
// (1..=4).  The control byte is accumulated by shifting left two bits per
// integer, so the first integer ends up in the most-significant field.

use super::delta::delta_encode;
use super::error::{QuadError, Result};
use super::lookup::QUAD_LEN;

/// Minimal big-endian byte length of `value` (1..=4).
#[inline]
pub fn byte_len(value: u32) -> usize {
    if value < 1 << 8 {
        1
    } else if value < 1 << 16 {
        2
    } else if value < 1 << 24 {
        3
    } else {
        4
    }
}

#[inline]
fn stored_values(values: [u32; QUAD_LEN], diff: bool) -> [u32; QUAD_LEN] {
    if diff { delta_encode(values) } else { values }
}

/// Exact number of data bytes the quad occupies once encoded.
pub fn encoded_len(values: [u32; QUAD_LEN], diff: bool) -> usize {
    stored_values(values, diff).into_iter().map(byte_len).sum()
}

/// Encode a quad into `out` without checking capacity first.
///
/// Returns `(control, bytes_written)`; `bytes_written` is always in 4..=16.
///
/// # Panics
///
/// Panics if `out` is shorter than the encoded data section. A prefix of
/// `out` may already have been written when that happens. Callers on this
/// path size their buffers up front (16 bytes always suffices).
pub fn encode_unchecked(values: [u32; QUAD_LEN], diff: bool, out: &mut [u8]) -> (u8, usize) {
    let mut control = 0u8;
    let mut pos = 0usize;

    for value in stored_values(values, diff) {
        let len = byte_len(value);
        out[pos..pos + len].copy_from_slice(&value.to_be_bytes()[4 - len..]);
        pos += len;
        control = (control << 2) | (len - 1) as u8;
    }

    (control, pos)
}

/// Encode a quad into `out`, validating capacity before writing.
///
/// On [`QuadError::Insufficient`] `out` is left untouched.
pub fn encode(values: [u32; QUAD_LEN], diff: bool, out: &mut [u8]) -> Result<(u8, usize)> {
    let needed = encoded_len(values, diff);
    if out.len() < needed {
        log::trace!(
            "encode: output too small ({} bytes, need {needed})",
            out.len()
        );
        return Err(QuadError::Insufficient {
            needed,
            available: out.len(),
        });
    }
    Ok(encode_unchecked(values, diff, out))
}

/// Encode a quad in inline layout: control byte first, data after it.
///
/// Returns the total bytes written including the control byte.
pub fn encode_inline(values: [u32; QUAD_LEN], diff: bool, out: &mut [u8]) -> Result<usize> {
    let needed = 1 + encoded_len(values, diff);
    if out.len() < needed {
        return Err(QuadError::Insufficient {
            needed,
            available: out.len(),
        });
    }
    let (control, n) = encode_unchecked(values, diff, &mut out[1..]);
    out[0] = control;
    Ok(1 + n)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
