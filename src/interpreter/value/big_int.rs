use std::{cmp::Ordering, collections::VecDeque, fmt, str::FromStr};

use thiserror::Error;

/// An arbitrary-precision, non-negative, base-10 integer.
///
/// Digits are stored most significant first in a double-ended queue so that
/// the schoolbook algorithms can prepend result digits in constant time.
///
/// A value is *canonical* when it has no leading zero digit, except for the
/// single-digit value `0`. Every value produced by [`BigInt::normalized`] and
/// by subtraction is canonical. Addition preserves canonical form only when
/// both operands are canonical.
///
/// The value built from an empty string has no digits at all. It stands for
/// "no value" (for example the result of evaluating a missing operand) and
/// renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(super) digits: VecDeque<u8>,
}

impl BigInt {
    /// Returns the degenerate value with no digits.
    #[must_use]
    pub const fn empty() -> Self {
        Self { digits: VecDeque::new() }
    }

    /// Builds a value from a string of decimal digits without validating it.
    ///
    /// Each character is mapped to its offset from `'0'`, so anything other
    /// than ASCII digits yields meaningless digits. Use [`str::parse`] when the
    /// input has not been checked already.
    ///
    /// # Example
    /// ```
    /// use digitwise::interpreter::value::big_int::BigInt;
    ///
    /// assert_eq!(BigInt::from_digits("1579").to_string(), "1579");
    /// assert!(BigInt::from_digits("").is_empty());
    /// ```
    #[must_use]
    pub fn from_digits(text: &str) -> Self {
        Self { digits: text.bytes().map(|b| b.wrapping_sub(b'0')).collect() }
    }

    /// Number of stored digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` for the degenerate value with no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns `true` if every digit is in `0..=9` and there is no superfluous
    /// leading zero.
    ///
    /// # Example
    /// ```
    /// use digitwise::interpreter::value::big_int::BigInt;
    ///
    /// assert!(BigInt::from_digits("0").is_canonical());
    /// assert!(BigInt::from_digits("120").is_canonical());
    /// assert!(!BigInt::from_digits("007").is_canonical());
    /// assert!(!BigInt::empty().is_canonical());
    /// ```
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        match self.digits.front() {
            None => false,
            Some(0) => self.digits.len() == 1,
            Some(_) => self.digits.iter().all(|d| *d <= 9),
        }
    }

    /// Returns a copy with leading zeros stripped down to a single digit.
    ///
    /// The empty value stays empty.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut copy = self.clone();
        copy.strip_leading_zeros();
        copy
    }

    pub(super) fn strip_leading_zeros(&mut self) {
        while self.digits.len() > 1 && self.digits.front() == Some(&0) {
            self.digits.pop_front();
        }
    }

    /// Digit at position `k` counted from the least significant end, or `0`
    /// past the most significant digit.
    pub(super) fn digit_from_end(&self, k: usize) -> u8 {
        self.digits
            .len()
            .checked_sub(k + 1)
            .and_then(|i| self.digits.get(i).copied())
            .unwrap_or(0)
    }
}

impl From<u64> for BigInt {
    fn from(mut value: u64) -> Self {
        let mut digits = VecDeque::new();
        loop {
            #[allow(clippy::cast_possible_truncation)]
            digits.push_front((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits }
    }
}

/// Returned when a string is not a non-empty run of ASCII digits.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid digit literal '{literal}'")]
pub struct ParseBigIntError {
    /// The rejected input.
    pub literal: String,
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses a non-empty string of ASCII digits. Leading zeros are kept as
    /// written.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError { literal: s.to_string() });
        }
        Ok(Self::from_digits(s))
    }
}

impl Ord for BigInt {
    /// Orders by digit count first, then digit by digit from the most
    /// significant end.
    ///
    /// This matches numeric order only for canonical values: `007` sorts above
    /// `10` because it is longer.
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().cmp(other.digits.iter()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
