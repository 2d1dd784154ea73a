//! # Bundle Discount
//!
//! Discount tier applied to the pre-discount subtotal when multiple
//! services are purchased together.
//!
//! Tiers replace each other — a five-service bundle gets the 15% tier,
//! not 10% plus 15%. The discount is applied before the urgency
//! multiplier.

use crate::domain::value_objects::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bundle discount tier by selected-service count.
///
/// # Examples
///
/// ```
/// use quote_engine::application::services::bundle_discount::DiscountTier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DiscountTier::for_service_count(1), DiscountTier::None);
/// assert_eq!(DiscountTier::for_service_count(3), DiscountTier::Duo);
/// assert_eq!(DiscountTier::for_service_count(5).rate(), Decimal::new(15, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DiscountTier {
    /// Zero or one service — no discount.
    #[default]
    None = 0,
    /// Two or three services — 10% off the subtotal.
    Duo = 1,
    /// Four or more services — 15% off the subtotal.
    Suite = 2,
}

impl DiscountTier {
    /// Resolves the tier for a selected-service count.
    #[must_use]
    pub const fn for_service_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::None,
            2 | 3 => Self::Duo,
            _ => Self::Suite,
        }
    }

    /// Returns the discount rate as a fraction of the subtotal.
    #[must_use]
    pub fn rate(self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Duo => Decimal::new(10, 2),
            Self::Suite => Decimal::new(15, 2),
        }
    }

    /// Computes `round(subtotal × rate)` in whole currency units.
    #[must_use]
    pub fn discount_amount(self, subtotal: Money) -> Money {
        subtotal.saturating_mul(self.rate()).round_to_unit()
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Duo => write!(f, "duo"),
            Self::Suite => write!(f, "suite"),
        }
    }
}
