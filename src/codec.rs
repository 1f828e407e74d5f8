use alloc::vec::Vec;

use num_bigint::BigUint;
use tracing::debug;

use crate::intervals::SizeIntervals;

/// Converts files to their integers and back.
///
/// A file of `n` bytes maps to `category_start(n) + offset`, where `offset`
/// is the file read as a little-endian base-256 number (byte 0 is the least
/// significant digit). This digit order is the on-disk format: changing it
/// would make every previously compressed file decode differently.
#[derive(Debug, Clone, Default)]
pub struct FileCodec {
    intervals: SizeIntervals,
}

impl FileCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::with_intervals(SizeIntervals::new())
    }

    #[must_use]
    pub const fn with_intervals(intervals: SizeIntervals) -> Self {
        Self { intervals }
    }

    #[must_use]
    pub const fn intervals(&self) -> &SizeIntervals {
        &self.intervals
    }

    /// Returns the unique integer standing for `bytes`.
    #[must_use]
    pub fn encode(&self, bytes: &[u8]) -> BigUint {
        let size = bytes.len() as u64;
        let base = self.intervals.category_start(size);
        debug!(size, %base, "encode: interval base");

        let offset = BigUint::from_bytes_le(bytes);
        debug!(%offset, "encode: interval offset");

        base + offset
    }

    /// Returns the unique file designated by `value`.
    #[must_use]
    pub fn decode(&self, value: &BigUint) -> Vec<u8> {
        let mut output = Vec::new();
        self.decode_into(value, &mut output);
        output
    }

    /// Decodes `value` and appends exactly `category_of(value)` bytes to `output`.
    pub fn decode_into(&self, value: &BigUint, output: &mut Vec<u8>) {
        let size = self.intervals.category_of(value);
        let base = self.intervals.category_start(size);
        debug!(size, %base, "decode: interval base");

        let offset = value - &base;
        debug!(%offset, "decode: interval offset");

        // value >= 256^(size-1) / 255, so its own digits already occupy at
        // least size - 1 bytes of memory: size always fits in usize.
        let size = size as usize;

        // Zero exports as a single 0x00 digit; the resize below absorbs it.
        let mut digits = offset.to_bytes_le();
        debug_assert!(size > 0 || digits == [0]);
        debug_assert!(digits.len() <= size.max(1));
        digits.resize(size, 0);

        output.extend_from_slice(&digits);
    }
}

/// Encodes `bytes` with the default codec.
#[must_use]
pub fn encode(bytes: &[u8]) -> BigUint {
    FileCodec::new().encode(bytes)
}

/// Decodes `value` with the default codec.
#[must_use]
pub fn decode(value: &BigUint) -> Vec<u8> {
    FileCodec::new().decode(value)
}
