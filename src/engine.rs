use alloc::vec::Vec;

use num_bigint::{BigUint, Sign};
use num_traits::Zero;
use tracing::debug;

use crate::codec::FileCodec;
use crate::error::ShiftError;
use crate::shift::Shift;

type Result<T> = core::result::Result<T, ShiftError>;

/// Moves files along the integer line.
///
/// Compressing `k` times is `decode(encode(file) - k)`; decompressing is the
/// same with `+ k`. Both are exact inverses of each other.
#[derive(Debug, Clone, Default)]
pub struct CompressionEngine {
    codec: FileCodec,
}

impl CompressionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_codec(FileCodec::new())
    }

    #[must_use]
    pub const fn with_codec(codec: FileCodec) -> Self {
        Self { codec }
    }

    #[must_use]
    pub const fn codec(&self) -> &FileCodec {
        &self.codec
    }

    /// Compresses `bytes` by `shift` steps (decompresses when negative).
    pub fn compress(&self, bytes: &[u8], shift: &Shift) -> Result<Vec<u8>> {
        let value = self.codec.encode(bytes);
        debug!(%value, "encoded input");

        let shifted = apply(&value, shift)?;
        debug!(%shifted, "value - shift");

        Ok(self.codec.decode(&shifted))
    }

    /// Decompresses `bytes` by `shift` steps (compresses when negative).
    pub fn decompress(&self, bytes: &[u8], shift: &Shift) -> Result<Vec<u8>> {
        self.compress(bytes, &-shift)
    }
}

/// Subtracts `shift` from `value`.
///
/// # Errors
/// * [`ShiftError::EmptyFileOverCompress`] when `value` is 0 and `shift` is positive.
/// * [`ShiftError::InsufficientValue`] when `shift` exceeds `value`; `max` is
///   the largest shift that would have succeeded.
pub fn apply(value: &BigUint, shift: &Shift) -> Result<BigUint> {
    debug!(%value, %shift, "applying shift");

    if value.is_zero() && shift.is_positive() {
        return Err(ShiftError::EmptyFileOverCompress);
    }

    let steps = shift.magnitude();
    match shift.as_bigint().sign() {
        Sign::Plus if value < steps => Err(ShiftError::InsufficientValue {
            max: max_compressions(value),
        }),
        Sign::Plus => Ok(value - steps),
        Sign::Minus => Ok(value + steps),
        Sign::NoSign => Ok(value.clone()),
    }
}

/// Number of compressions that turn the file with integer `value` into the empty file.
#[must_use]
pub fn max_compressions(value: &BigUint) -> BigUint {
    value.clone()
}

/// Compresses `bytes` by `shift` steps with the default engine.
pub fn compress(bytes: &[u8], shift: &Shift) -> Result<Vec<u8>> {
    CompressionEngine::new().compress(bytes, shift)
}

/// Decompresses `bytes` by `shift` steps with the default engine.
pub fn decompress(bytes: &[u8], shift: &Shift) -> Result<Vec<u8>> {
    CompressionEngine::new().decompress(bytes, shift)
}
