//! # Estimate
//!
//! The quote engine's sole output: one priced estimate with a line-item
//! breakdown, bundle discount, and currency-localized display values.
//!
//! An [`Estimate`] is a pure value — constructed fresh on every
//! computation, never mutated in place, and persisted verbatim alongside
//! the project record by the surrounding application.

use crate::domain::value_objects::{
    ComplexityBand, Currency, Money, PaymentProvider, ServiceId, UrgencyTier,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display amount in the buyer's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedAmount {
    amount: Money,
    currency: Currency,
    formatted: String,
}

impl LocalizedAmount {
    /// Creates a localized amount with its preformatted display string.
    #[must_use]
    pub fn new(amount: Money, currency: Currency, formatted: String) -> Self {
        Self {
            amount,
            currency,
            formatted,
        }
    }

    /// Returns the numeric amount in the display currency.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the display currency.
    #[inline]
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the symbol-prefixed, thousands-separated display string.
    #[inline]
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for LocalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted)
    }
}

/// One line of the estimate breakdown — a single priced service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Stable service identifier.
    pub service_id: ServiceId,
    /// Display name of the service.
    pub service_name: String,
    /// Fixed base price in USD.
    pub base_price: Money,
    /// Complexity multiplier applied to the base price.
    pub multiplier: Decimal,
    /// Human-facing complexity label derived from the multiplier.
    pub band: ComplexityBand,
    /// Localized line price (base × multiplier, rounded).
    pub line_price: LocalizedAmount,
    /// True if this service needs a pricing consultation; the line price
    /// is then a "starting from" figure.
    pub requires_consultation: bool,
    /// False when the identifier priced through the default fallback.
    pub from_catalog: bool,
}

/// A complete priced estimate.
///
/// Invariants: `total` is non-negative; the USD line prices behind
/// `breakdown` sum to the pre-discount subtotal; `discount` never
/// exceeds `subtotal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Final localized total (post-discount, post-urgency).
    pub total: LocalizedAmount,
    /// Localized pre-discount subtotal.
    pub subtotal: LocalizedAmount,
    /// Localized bundle-discount amount.
    pub discount: LocalizedAmount,
    /// One entry per selection, primary first.
    pub breakdown: Vec<BreakdownEntry>,
    /// Number of selected services.
    pub service_count: usize,
    /// True if any selected service is consultation-flagged.
    pub requires_consultation: bool,
    /// Display currency shared by every figure above.
    pub currency: Currency,
    /// Payment provider paired with the display currency.
    pub provider: PaymentProvider,
    /// Urgency tier that was applied.
    pub urgency: UrgencyTier,
    /// The urgency multiplier actually applied to the total.
    pub urgency_multiplier: Decimal,
}

impl Estimate {
    /// The zero-value estimate for the "nothing selected yet" state.
    #[must_use]
    pub fn empty(currency: Currency, provider: PaymentProvider, formatted_zero: String) -> Self {
        let zero = LocalizedAmount::new(Money::ZERO, currency, formatted_zero);
        Self {
            total: zero.clone(),
            subtotal: zero.clone(),
            discount: zero,
            breakdown: Vec::new(),
            service_count: 0,
            requires_consultation: false,
            currency,
            provider,
            urgency: UrgencyTier::Standard,
            urgency_multiplier: Decimal::ONE,
        }
    }

    /// Returns true if this is the zero-value estimate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty() && self.total.amount().is_zero()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimate_is_zero_valued() {
        let estimate = Estimate::empty(
            Currency::Usd,
            PaymentProvider::Stripe,
            "$0".to_string(),
        );
        assert!(estimate.is_empty());
        assert_eq!(estimate.service_count, 0);
        assert!(!estimate.requires_consultation);
        assert_eq!(estimate.urgency_multiplier, Decimal::ONE);
        assert_eq!(estimate.total.formatted(), "$0");
    }

    #[test]
    fn localized_amount_display_uses_formatted() {
        let amount = LocalizedAmount::new(
            Money::from_whole(4725),
            Currency::Usd,
            "$4,725".to_string(),
        );
        assert_eq!(amount.to_string(), "$4,725");
        assert_eq!(amount.amount(), Money::from_whole(4725));
        assert_eq!(amount.currency(), Currency::Usd);
    }

    #[test]
    fn estimate_serde_roundtrip() {
        let estimate = Estimate::empty(
            Currency::Ngn,
            PaymentProvider::Paystack,
            "₦0".to_string(),
        );
        let json = serde_json::to_string(&estimate).unwrap();
        let back: Estimate = serde_json::from_str(&json).unwrap();
        assert_eq!(estimate, back);
    }
}
