use num_bigint::BigUint;
use num_traits::{One, Zero};

// --- Constants ---

/// Number of bits in one digit of a file (one byte).
const BITS_PER_BYTE: u64 = 8;

/// Number of distinct byte values minus one. Category sizes grow by a factor
/// of `RADIX_MINUS_ONE + 1`, so this is the denominator of the geometric sum.
const RADIX_MINUS_ONE: u32 = 255;

/// Locates the size categories of the integer line.
///
/// Category `n` holds the `256^n` integers that stand for files of exactly
/// `n` bytes. Category 0 is `{0}`, category 1 is `1..=256`, category 2 starts
/// at 257, and so on. The first value of category `n` is the geometric sum
/// `(256^n - 1) / 255`.
///
/// The divisor is built once at construction and never mutated, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeIntervals {
    radix_minus_one: BigUint,
}

impl Default for SizeIntervals {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeIntervals {
    #[must_use]
    pub fn new() -> Self {
        Self {
            radix_minus_one: BigUint::from(RADIX_MINUS_ONE),
        }
    }

    /// Returns the first integer of size category `n`.
    ///
    /// Computed as `((1 << 8n) - 1) / 255` with exact big-integer arithmetic.
    ///
    /// # Panics
    ///
    /// Panics if `8n` does not fit in a `u64`.
    #[must_use]
    pub fn category_start(&self, n: u64) -> BigUint {
        if n == 0 {
            return BigUint::zero();
        }
        // 256^n - 1 is divisible by 255, floor division is exact here.
        let mut base = BigUint::one() << bit_offset(n);
        base -= 1u32;
        base / &self.radix_minus_one
    }

    /// Returns the number of integers in size category `n` (`256^n`).
    ///
    /// # Panics
    ///
    /// Panics if `8n` does not fit in a `u64`.
    #[must_use]
    pub fn category_size(&self, n: u64) -> BigUint {
        BigUint::one() << bit_offset(n)
    }

    /// Returns the size category containing `value`.
    ///
    /// This is `floor(log_256(255 * value + 1))`, taken from the bit length:
    /// a number in `[256^n, 256^(n+1))` has between `8n + 1` and `8n + 8` bits.
    #[must_use]
    pub fn category_of(&self, value: &BigUint) -> u64 {
        let scaled = value * &self.radix_minus_one + 1u32;
        // scaled >= 1, so bits() >= 1.
        (scaled.bits() - 1) / BITS_PER_BYTE
    }
}

/// Bit position of `256^n`.
fn bit_offset(n: u64) -> u64 {
    match n.checked_mul(BITS_PER_BYTE) {
        Some(bits) => bits,
        None => panic!("size category {n} out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_categories() {
        let iv = SizeIntervals::new();
        assert_eq!(iv.category_start(0), BigUint::from(0u32));
        assert_eq!(iv.category_start(1), BigUint::from(1u32));
        assert_eq!(iv.category_start(2), BigUint::from(257u32));
        assert_eq!(iv.category_start(3), BigUint::from(65_793u32));
    }

    #[test]
    fn test_category_start_recurrence() {
        let iv = SizeIntervals::new();
        for n in 0..64 {
            assert_eq!(
                iv.category_start(n + 1),
                iv.category_start(n) + iv.category_size(n),
                "recurrence broken at n = {n}"
            );
        }
    }

    #[test]
    fn test_category_of_small_values() {
        let iv = SizeIntervals::new();
        assert_eq!(iv.category_of(&BigUint::from(0u32)), 0);
        assert_eq!(iv.category_of(&BigUint::from(1u32)), 1);
        assert_eq!(iv.category_of(&BigUint::from(256u32)), 1);
        assert_eq!(iv.category_of(&BigUint::from(257u32)), 2);
        assert_eq!(iv.category_of(&BigUint::from(65_792u32)), 2);
        assert_eq!(iv.category_of(&BigUint::from(65_793u32)), 3);
    }

    #[test]
    fn test_category_of_around_boundaries() {
        let iv = SizeIntervals::new();
        for n in 1..200u64 {
            let start = iv.category_start(n);
            assert_eq!(iv.category_of(&start), n);
            assert_eq!(iv.category_of(&(&start - 1u32)), n - 1);
            assert_eq!(iv.category_of(&(&start + 1u32)), n);
        }
    }

    #[test]
    fn test_last_value_of_category() {
        let iv = SizeIntervals::new();
        for n in 0..100u64 {
            let last = iv.category_start(n + 1) - 1u32;
            assert_eq!(iv.category_of(&last), n);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_category_start_rejects_overflowing_category() {
        let _ = SizeIntervals::new().category_start(u64::MAX);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_category_size_rejects_overflowing_category() {
        let _ = SizeIntervals::new().category_size(u64::MAX / BITS_PER_BYTE + 1);
    }
}
