// Control-byte length table.
//
// A control byte carries four 2-bit fields, most-significant pair first.
// Field `i` stores `len(i) - 1`, so every field maps to a byte length in
// 1..=4 independently of its neighbours.  The table has exactly 256 entries.

/// Number of integers in one coding unit.
pub const QUAD_LEN: usize = 4;

/// Smallest data section a quad can occupy (four 1-byte integers).
pub const MIN_DATA_LEN: usize = 4;

/// Largest data section a quad can occupy (four 4-byte integers).
pub const MAX_DATA_LEN: usize = 16;

/// Worst-case inline encoding: control byte plus a full data section.
pub const MAX_ENCODED_LEN: usize = 1 + MAX_DATA_LEN;

/// Per-integer byte lengths for one control byte, plus their sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuadLengths {
    pub lens: [u8; QUAD_LEN],
    pub total: u8,
}

/// The complete 256-entry length table, indexed by control byte.
pub type LengthTable = [QuadLengths; 256];

/// Shift that brings field `index` of a control byte into the low two bits.
#[inline]
pub(crate) const fn field_shift(index: usize) -> u32 {
    (6 - 2 * index) as u32
}

/// Build the length table.
pub fn build_length_table() -> LengthTable {
    let mut tbl = [QuadLengths::default(); 256];

    for (control, entry) in tbl.iter_mut().enumerate() {
        let mut total = 0u8;
        for (i, len) in entry.lens.iter_mut().enumerate() {
            *len = ((control >> field_shift(i)) & 0x3) as u8 + 1;
            total += *len;
        }
        entry.total = total;
    }

    debug_assert_eq!(tbl[0x00].total as usize, MIN_DATA_LEN);
    debug_assert_eq!(tbl[0xff].total as usize, MAX_DATA_LEN);
    tbl
}

/// Return a reference to the lazily-initialized length table.
pub fn length_table() -> &'static LengthTable {
    use std::sync::LazyLock;
    static TABLE: LazyLock<LengthTable> = LazyLock::new(build_length_table);
    &TABLE
}

/// Look up the four byte lengths encoded by `control` and their sum.
#[inline]
pub fn lengths(control: u8) -> ([u8; QUAD_LEN], u8) {
    let entry = length_table()[control as usize];
    (entry.lens, entry.total)
}

/// Size of the data section described by `control`.
#[inline]
pub fn data_len(control: u8) -> usize {
    length_table()[control as usize].total as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
