//! svbyte: the Stream VByte quad codec in Rust.
//!
//! Four `u32`s are packed into one control byte and 4 to 16 data bytes.
//! Each integer takes the fewest big-endian bytes that hold it; the control
//! byte records those lengths two bits apiece, first integer in the
//! most-significant bits.
//!
//! The crate provides:
//! - The quad codec (`quad`): lookup table, encoder, decoder, delta coding
//!   and inline/split layout helpers
//! - An optional inspection CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use svbyte::quad;
//!
//! let mut buf = [0u8; quad::MAX_DATA_LEN];
//! let (control, n) = quad::encode([1024, 12, 10, 1 << 30], false, &mut buf).unwrap();
//! assert_eq!(control, 0x43);
//! assert_eq!(n, 8);
//!
//! let (values, consumed) = quad::decode(control, &buf[..n], false).unwrap();
//! assert_eq!(values, [1024, 12, 10, 1 << 30]);
//! assert_eq!(consumed, n);
//! ```
//!
//! Callers decide whether a stream uses differential coding; the flag is
//! not recorded in the bytes.

pub mod quad;

#[cfg(feature = "cli")]
pub mod cli;

pub use quad::QuadError;
