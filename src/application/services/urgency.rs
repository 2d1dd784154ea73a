//! # Urgency Resolver
//!
//! Classifies a requested delivery timeline into an urgency tier.
//!
//! The amount+unit is normalized to days and compared against a
//! threshold table keyed by the declared complexity class. Thresholds
//! widen as complexity increases: a complex project's rush window is
//! longer in days than a simple project's. The resulting multiplier
//! applies to the post-bundle-discount total, never to individual lines.
//!
//! # Examples
//!
//! ```
//! use quote_engine::application::services::urgency::UrgencyResolver;
//! use quote_engine::domain::value_objects::{ComplexityClass, DeliveryUnit, UrgencyTier};
//! use rust_decimal::Decimal;
//!
//! let tier = UrgencyResolver::classify(
//!     Decimal::from(2),
//!     DeliveryUnit::Days,
//!     ComplexityClass::Simple,
//! );
//! assert_eq!(tier, UrgencyTier::Rush);
//! ```

use crate::domain::entities::project::UrgencySelection;
use crate::domain::value_objects::{ComplexityClass, DeliveryUnit, UrgencyTier};
use rust_decimal::Decimal;

/// Day-count ceilings for the RUSH, FAST, and STANDARD bands; anything
/// beyond the last ceiling is FLEXIBLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Thresholds {
    rush: u32,
    fast: u32,
    standard: u32,
}

const fn thresholds_for(class: ComplexityClass) -> Thresholds {
    match class {
        ComplexityClass::Simple => Thresholds {
            rush: 3,
            fast: 7,
            standard: 14,
        },
        ComplexityClass::Medium => Thresholds {
            rush: 5,
            fast: 14,
            standard: 30,
        },
        ComplexityClass::Complex => Thresholds {
            rush: 10,
            fast: 21,
            standard: 45,
        },
    }
}

/// Classifies delivery timelines into urgency tiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyResolver;

impl UrgencyResolver {
    /// Classifies a timeline into its urgency tier.
    ///
    /// A zero or negative amount is invalid form input; it is treated as
    /// maximal urgency (RUSH) rather than an error.
    #[must_use]
    pub fn classify(amount: Decimal, unit: DeliveryUnit, class: ComplexityClass) -> UrgencyTier {
        if amount <= Decimal::ZERO {
            return UrgencyTier::Rush;
        }

        let days = unit.in_days(amount);
        let t = thresholds_for(class);

        if days <= Decimal::from(t.rush) {
            UrgencyTier::Rush
        } else if days <= Decimal::from(t.fast) {
            UrgencyTier::Fast
        } else if days <= Decimal::from(t.standard) {
            UrgencyTier::Standard
        } else {
            UrgencyTier::Flexible
        }
    }

    /// Classifies a full urgency selection.
    #[must_use]
    pub fn classify_selection(selection: &UrgencySelection) -> UrgencyTier {
        Self::classify(selection.amount, selection.unit, selection.complexity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify_days(days: i64, class: ComplexityClass) -> UrgencyTier {
        UrgencyResolver::classify(Decimal::from(days), DeliveryUnit::Days, class)
    }

    mod bands {
        use super::*;

        #[test]
        fn simple_class_table() {
            assert_eq!(classify_days(1, ComplexityClass::Simple), UrgencyTier::Rush);
            assert_eq!(classify_days(3, ComplexityClass::Simple), UrgencyTier::Rush);
            assert_eq!(classify_days(4, ComplexityClass::Simple), UrgencyTier::Fast);
            assert_eq!(classify_days(7, ComplexityClass::Simple), UrgencyTier::Fast);
            assert_eq!(
                classify_days(14, ComplexityClass::Simple),
                UrgencyTier::Standard
            );
            assert_eq!(
                classify_days(15, ComplexityClass::Simple),
                UrgencyTier::Flexible
            );
        }

        #[test]
        fn medium_class_table() {
            assert_eq!(classify_days(5, ComplexityClass::Medium), UrgencyTier::Rush);
            assert_eq!(classify_days(14, ComplexityClass::Medium), UrgencyTier::Fast);
            assert_eq!(
                classify_days(30, ComplexityClass::Medium),
                UrgencyTier::Standard
            );
            assert_eq!(
                classify_days(31, ComplexityClass::Medium),
                UrgencyTier::Flexible
            );
        }

        #[test]
        fn complex_class_table() {
            assert_eq!(
                classify_days(10, ComplexityClass::Complex),
                UrgencyTier::Rush
            );
            assert_eq!(
                classify_days(21, ComplexityClass::Complex),
                UrgencyTier::Fast
            );
            assert_eq!(
                classify_days(45, ComplexityClass::Complex),
                UrgencyTier::Standard
            );
            assert_eq!(
                classify_days(46, ComplexityClass::Complex),
                UrgencyTier::Flexible
            );
        }

        #[test]
        fn thresholds_widen_with_complexity() {
            // 8 days: standard for simple, fast for medium, still rush for complex.
            assert_eq!(
                classify_days(8, ComplexityClass::Simple),
                UrgencyTier::Standard
            );
            assert_eq!(classify_days(8, ComplexityClass::Medium), UrgencyTier::Fast);
            assert_eq!(classify_days(8, ComplexityClass::Complex), UrgencyTier::Rush);
        }
    }

    mod units {
        use super::*;

        #[test]
        fn hours_normalize_to_fractional_days() {
            // 48 hours = 2 days → RUSH for simple work.
            let tier = UrgencyResolver::classify(
                Decimal::from(48),
                DeliveryUnit::Hours,
                ComplexityClass::Simple,
            );
            assert_eq!(tier, UrgencyTier::Rush);
        }

        #[test]
        fn weeks_and_months_normalize() {
            let two_weeks = UrgencyResolver::classify(
                Decimal::from(2),
                DeliveryUnit::Weeks,
                ComplexityClass::Simple,
            );
            assert_eq!(two_weeks, UrgencyTier::Standard);

            let two_months = UrgencyResolver::classify(
                Decimal::from(2),
                DeliveryUnit::Months,
                ComplexityClass::Complex,
            );
            assert_eq!(two_months, UrgencyTier::Flexible);
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn zero_amount_is_maximal_urgency() {
            let tier = UrgencyResolver::classify(
                Decimal::ZERO,
                DeliveryUnit::Weeks,
                ComplexityClass::Complex,
            );
            assert_eq!(tier, UrgencyTier::Rush);
        }

        #[test]
        fn negative_amount_is_maximal_urgency() {
            let tier = UrgencyResolver::classify(
                Decimal::from(-3),
                DeliveryUnit::Days,
                ComplexityClass::Simple,
            );
            assert_eq!(tier, UrgencyTier::Rush);
        }

        #[test]
        fn classify_selection_delegates() {
            let selection = UrgencySelection::new(
                Decimal::from(2),
                DeliveryUnit::Weeks,
                ComplexityClass::Medium,
            );
            assert_eq!(
                UrgencyResolver::classify_selection(&selection),
                UrgencyTier::Fast
            );
        }
    }

    proptest! {
        /// The multiplier never increases as the buyer grants more time.
        #[test]
        fn multiplier_monotone_in_days(
            days_a in 1i64..400,
            days_b in 1i64..400,
            class_idx in 0u8..3,
        ) {
            let class = match class_idx {
                0 => ComplexityClass::Simple,
                1 => ComplexityClass::Medium,
                _ => ComplexityClass::Complex,
            };
            let (sooner, later) = if days_a <= days_b {
                (days_a, days_b)
            } else {
                (days_b, days_a)
            };
            let sooner_mult = classify_days(sooner, class).multiplier();
            let later_mult = classify_days(later, class).multiplier();
            prop_assert!(sooner_mult >= later_mult);
        }
    }
}
