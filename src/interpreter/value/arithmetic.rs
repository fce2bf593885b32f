use std::{
    collections::VecDeque,
    iter,
    ops::{Add, Sub},
};

use crate::interpreter::value::big_int::BigInt;

impl BigInt {
    /// Returns the absolute difference between `self` and `other`.
    ///
    /// The operands are swapped when `self < other`, so the result is never
    /// negative and `a.abs_diff(b) == b.abs_diff(a)`. Leading zeros are
    /// stripped from the result, leaving at least one digit.
    ///
    /// # Example
    /// ```
    /// use digitwise::interpreter::value::big_int::BigInt;
    ///
    /// let a = BigInt::from_digits("456");
    /// let b = BigInt::from_digits("1123");
    /// assert_eq!(a.abs_diff(&b).to_string(), "667");
    /// assert_eq!(b.abs_diff(&a).to_string(), "667");
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn abs_diff(&self, other: &Self) -> Self {
        if self < other {
            return other.abs_diff(self);
        }

        let mut digits = VecDeque::with_capacity(self.len());
        let mut borrow = 0i16;
        let subtrahend = other.digits.iter().rev().chain(iter::repeat(&0));

        for (&d1, &d2) in self.digits.iter().rev().zip(subtrahend) {
            let mut diff = i16::from(d1) - i16::from(d2) - borrow;
            if diff >= 0 {
                borrow = 0;
            } else {
                borrow = 1;
                diff += 10;
            }
            digits.push_front(diff as u8);
        }

        let mut result = Self { digits };
        result.strip_leading_zeros();
        result
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Returns the sum of `self` and `rhs`.
    ///
    /// Schoolbook addition from the least significant digit. The shorter
    /// operand is treated as if padded with zeros on the left. Leading zeros in
    /// the operands are carried into the result unchanged.
    ///
    /// # Example
    /// ```
    /// use digitwise::interpreter::value::big_int::BigInt;
    ///
    /// let sum = &BigInt::from_digits("456") + &BigInt::from_digits("1123");
    /// assert_eq!(sum.to_string(), "1579");
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    fn add(self, rhs: &BigInt) -> BigInt {
        let width = self.len().max(rhs.len());
        let mut digits = VecDeque::with_capacity(width + 1);
        let mut carry = 0u16;

        for k in 0..width {
            let mut sum = u16::from(self.digit_from_end(k))
                          + u16::from(rhs.digit_from_end(k))
                          + carry;
            if sum < 10 {
                carry = 0;
            } else {
                carry = 1;
                sum -= 10;
            }
            digits.push_front(sum as u8);
        }

        if carry == 1 {
            digits.push_front(1);
        }

        BigInt { digits }
    }
}

impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

/// `-` is the absolute difference; see [`BigInt::abs_diff`].
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self.abs_diff(rhs)
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.abs_diff(&rhs)
    }
}
