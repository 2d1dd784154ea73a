//! # Money
//!
//! Non-negative decimal money amounts with saturating arithmetic and the
//! rounding helpers the pricing pipeline needs.
//!
//! The pipeline's contract is "always returns an estimate", so the
//! arithmetic here is total: subtraction floors at zero (a discount can
//! never push a total negative) and multiplication clamps instead of
//! overflowing.
//!
//! All amounts in the engine are USD until the currency localizer
//! converts them for display; [`Money`] itself is currency-agnostic.
//!
//! # Examples
//!
//! ```
//! use quote_engine::domain::value_objects::money::Money;
//! use rust_decimal::Decimal;
//!
//! let base = Money::from_whole(1500);
//! let line = base.saturating_mul(Decimal::new(13, 1)).round_to_unit();
//! assert_eq!(line, Money::from_whole(1950));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a money amount from a decimal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if the value is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::NegativeAmount(value));
        }
        Ok(Self(value))
    }

    /// Creates a money amount from a whole number of currency units.
    #[must_use]
    pub fn from_whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the inner decimal value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Adds another amount, clamping at the decimal maximum on overflow.
    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }

    /// Subtracts another amount, flooring at zero.
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        if rhs.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - rhs.0)
        }
    }

    /// Multiplies by a factor.
    ///
    /// Negative factors clamp to zero, overflow clamps to the decimal
    /// maximum; the result is always a valid amount.
    #[must_use]
    pub fn saturating_mul(self, factor: Decimal) -> Self {
        if factor.is_sign_negative() {
            return Self::ZERO;
        }
        Self(self.0.checked_mul(factor).unwrap_or(Decimal::MAX))
    }

    /// Rounds to the nearest whole currency unit, midpoints away from zero.
    #[must_use]
    pub fn round_to_unit(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Rounds to the nearest multiple of `step`; ties go to the even
    /// multiple, so a half-step amount never inflates the display price.
    ///
    /// A non-positive step leaves the amount unchanged.
    #[must_use]
    pub fn round_to_step(self, step: Decimal) -> Self {
        if step <= Decimal::ZERO {
            return self;
        }
        let quotient =
            (self.0 / step).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        Self(quotient * step)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", group_thousands(&self.0.normalize().to_string()))
    }
}

/// Inserts comma separators into the integer part of a decimal string.
///
/// # Examples
///
/// ```
/// use quote_engine::domain::value_objects::money::group_thousands;
///
/// assert_eq!(group_thousands("4882500"), "4,882,500");
/// assert_eq!(group_thousands("800"), "800");
/// assert_eq!(group_thousands("1234.5"), "1,234.5");
/// ```
#[must_use]
pub fn group_thousands(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
