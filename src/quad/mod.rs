// Stream VByte quad codec.
//
// This module packs four `u32`s into one control byte plus 4..=16 data
// bytes, and unpacks them again.
//
// # Modules
//
// - `lookup`  — Control byte → per-integer byte lengths (256 entries)
// - `encoder` — Checked and unchecked quad encoding
// - `decoder` — Checked, unchecked and incremental quad decoding
// - `delta`   — Differential coding within a quad
// - `layout`  — Inline and split layouts over runs of quads
// - `error`   — `QuadError`

pub mod decoder;
pub mod delta;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod lookup;

// Re-export key types for convenience.
pub use decoder::{ByteSource, decode, decode_from, decode_inline, decode_unchecked};
pub use delta::{delta_decode, delta_encode, is_ascending};
pub use encoder::{byte_len, encode, encode_inline, encode_unchecked, encoded_len};
pub use error::QuadError;
pub use layout::{
    InlineReader, decode_inline_all, decode_split, encode_inline_all, encode_split, split_data_len,
};
#[cfg(feature = "parallel")]
pub use layout::decode_split_par;
pub use lookup::{
    LengthTable, MAX_DATA_LEN, MAX_ENCODED_LEN, MIN_DATA_LEN, QUAD_LEN, QuadLengths, data_len,
    length_table, lengths,
};
