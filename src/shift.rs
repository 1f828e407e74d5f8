use alloc::string::ToString;
use core::fmt;
use core::ops::{Add, Neg, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Signed, Zero};

use crate::error::ParseShiftError;

/// A net number of compression steps.
///
/// Positive values compress (move the file's integer towards zero), negative
/// values decompress. There is no bound in either direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shift(BigInt);

/// One command-line request contributing to a [`Shift`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftStep {
    Compress(BigInt),
    Decompress(BigInt),
}

impl Shift {
    #[must_use]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    #[must_use]
    pub fn compress_once() -> Self {
        Self(BigInt::from(1))
    }

    #[must_use]
    pub fn decompress_once() -> Self {
        Self(BigInt::from(-1))
    }

    /// Folds every step into a single net shift.
    pub fn accumulate<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = ShiftStep>,
    {
        steps.into_iter().fold(Self::zero(), |mut acc, step| {
            acc.push(step);
            acc
        })
    }

    pub fn push(&mut self, step: ShiftStep) {
        match step {
            ShiftStep::Compress(n) => self.0 += n,
            ShiftStep::Decompress(n) => self.0 -= n,
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub const fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Number of steps regardless of direction.
    #[must_use]
    pub fn magnitude(&self) -> &BigUint {
        self.0.magnitude()
    }

    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl From<BigInt> for Shift {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for Shift {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl Neg for Shift {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Shift {
    type Output = Shift;

    fn neg(self) -> Shift {
        Shift(-&self.0)
    }
}

impl Add for Shift {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Shift> for &Shift {
    type Output = Shift;

    fn add(self, rhs: &Shift) -> Shift {
        Shift(&self.0 + &rhs.0)
    }
}

impl Sub for Shift {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Shift> for &Shift {
    type Output = Shift;

    fn sub(self, rhs: &Shift) -> Shift {
        Shift(&self.0 - &rhs.0)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses a signed integer literal of any size.
///
/// The base is picked from the prefix after an optional sign: `0x`/`0X` is
/// hexadecimal, `0b`/`0B` binary, any other leading `0` octal, and everything
/// else decimal.
pub fn parse_integer(literal: &str) -> Result<BigInt, ParseShiftError> {
    let (sign, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &literal[1..]),
        Some(b'+') => (Sign::Plus, &literal[1..]),
        Some(_) => (Sign::Plus, literal),
        None => return Err(ParseShiftError::Empty),
    };

    let (radix, digits) = if let Some(rest) = strip_prefix_ci(unsigned, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(unsigned, "0b") {
        (2, rest)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix tolerates a sign and underscores of its own; reject both.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseShiftError::InvalidDigit {
            literal: literal.to_string(),
        });
    }

    let magnitude =
        BigUint::from_str_radix(digits, radix).map_err(|_| ParseShiftError::InvalidDigit {
            literal: literal.to_string(),
        })?;

    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Case-insensitive `strip_prefix` for ASCII prefixes.
#[inline]
fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
