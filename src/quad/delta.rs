// Differential coding within a quad.
//
// Values after the first are stored as the difference from the previous
// original value.  Arithmetic wraps, so a quad that is not ascending still
// round-trips; it just stops shrinking.

use super::lookup::QUAD_LEN;

/// Replace `values[1..]` with successive differences.
#[inline]
pub fn delta_encode(values: [u32; QUAD_LEN]) -> [u32; QUAD_LEN] {
    [
        values[0],
        values[1].wrapping_sub(values[0]),
        values[2].wrapping_sub(values[1]),
        values[3].wrapping_sub(values[2]),
    ]
}

/// Undo [`delta_encode`] with a running prefix sum.
#[inline]
pub fn delta_decode(mut deltas: [u32; QUAD_LEN]) -> [u32; QUAD_LEN] {
    deltas[1] = deltas[1].wrapping_add(deltas[0]);
    deltas[2] = deltas[2].wrapping_add(deltas[1]);
    deltas[3] = deltas[3].wrapping_add(deltas[2]);
    deltas
}

/// True when the quad is non-decreasing, i.e. delta coding cannot wrap.
#[inline]
pub fn is_ascending(values: [u32; QUAD_LEN]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
