//! # ulcompress
//!
//! `ulcompress` maps every file to a unique natural number and back. The
//! mapping is a bijection that orders files first by length, then by content
//! read as a little-endian base-256 number:
//!
//! | file            | integer |
//! |-----------------|---------|
//! | (empty)         | 0       |
//! | `00`            | 1       |
//! | `FF`            | 256     |
//! | `00 00`         | 257     |
//!
//! "Compressing" a file subtracts one from its integer; "decompressing" adds
//! one. Any file can therefore be compressed, again and again, down to the
//! empty file, and the matching number of decompressions restores it exactly.
//! Each step saves at most a fraction of a bit.
//!
//! ## Example
//!
//! ```rust
//! use ulcompress::{Shift, compress, decompress, encode};
//!
//! assert_eq!(encode(&[0xFF]).to_string(), "256");
//!
//! // [0x00, 0x00] is 257; one step down is 256, the single byte 0xFF.
//! let smaller = compress(&[0x00, 0x00], &Shift::compress_once()).unwrap();
//! assert_eq!(smaller, [0xFF]);
//!
//! let restored = decompress(&smaller, &Shift::compress_once()).unwrap();
//! assert_eq!(restored, [0x00, 0x00]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod codec;
pub mod engine;
pub mod error;
#[cfg(feature = "std")]
pub mod fs;
pub mod intervals;
pub mod shift;

pub use codec::{FileCodec, decode, encode};
pub use engine::{CompressionEngine, apply, compress, decompress, max_compressions};
#[cfg(feature = "std")]
pub use error::Error;
pub use error::{ParseShiftError, ShiftError};
pub use intervals::SizeIntervals;
pub use num_bigint::{BigInt, BigUint};
pub use shift::{Shift, ShiftStep, parse_integer};
