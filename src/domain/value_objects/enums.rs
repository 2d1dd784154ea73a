//! # Domain Enums
//!
//! Enumeration types for quoting concepts.
//!
//! This module provides the core enumerations used throughout the quote
//! engine:
//!
//! - [`DeliveryUnit`] - Unit of a requested delivery timeline
//! - [`ComplexityClass`] - Declared complexity of the priced work
//! - [`UrgencyTier`] - Urgency band with its price multiplier
//! - [`ComplexityBand`] - Human-facing label derived from a multiplier
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
//! `Hash`, `Display`, and Serde traits; the input-side enums also
//! implement `FromStr`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of a requested delivery timeline.
///
/// # Examples
///
/// ```
/// use quote_engine::domain::value_objects::enums::DeliveryUnit;
/// use rust_decimal::Decimal;
///
/// let days = DeliveryUnit::Weeks.in_days(Decimal::from(2));
/// assert_eq!(days, Decimal::from(14));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DeliveryUnit {
    /// Hours until delivery.
    Hours = 0,
    /// Days until delivery.
    Days = 1,
    /// Weeks until delivery.
    Weeks = 2,
    /// Months until delivery.
    Months = 3,
}

impl DeliveryUnit {
    /// Normalizes an amount in this unit to a day count.
    ///
    /// Hours divide by 24; weeks multiply by 7; months use a 30-day month.
    #[must_use]
    pub fn in_days(self, amount: Decimal) -> Decimal {
        match self {
            Self::Hours => amount / Decimal::from(24),
            Self::Days => amount,
            Self::Weeks => amount * Decimal::from(7),
            Self::Months => amount * Decimal::from(30),
        }
    }
}

impl fmt::Display for DeliveryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours => write!(f, "hours"),
            Self::Days => write!(f, "days"),
            Self::Weeks => write!(f, "weeks"),
            Self::Months => write!(f, "months"),
        }
    }
}

impl FromStr for DeliveryUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" | "hours" => Ok(Self::Hours),
            "day" | "days" => Ok(Self::Days),
            "week" | "weeks" => Ok(Self::Weeks),
            "month" | "months" => Ok(Self::Months),
            _ => Err(ParseEnumError::InvalidValue("DeliveryUnit", s.to_string())),
        }
    }
}

/// Declared complexity class of the priced work.
///
/// Collected from the buyer alongside the urgency selection; widens the
/// urgency thresholds (a complex project's rush window is longer in days
/// than a simple project's).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ComplexityClass {
    /// Simple, small-scope work.
    Simple = 0,
    /// Typical scope — the default when nothing is declared.
    #[default]
    Medium = 1,
    /// Large or intricate scope.
    Complex = 2,
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Medium => write!(f, "medium"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

impl FromStr for ComplexityClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "medium" => Ok(Self::Medium),
            "complex" => Ok(Self::Complex),
            _ => Err(ParseEnumError::InvalidValue(
                "ComplexityClass",
                s.to_string(),
            )),
        }
    }
}

/// Urgency band for a requested delivery timeline.
///
/// The multiplier applies to the post-bundle-discount total. `Flexible`
/// is a discount for buyer-granted slack.
///
/// # Examples
///
/// ```
/// use quote_engine::domain::value_objects::enums::UrgencyTier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(UrgencyTier::Rush.multiplier(), Decimal::new(15, 1));
/// assert_eq!(UrgencyTier::Standard.multiplier(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum UrgencyTier {
    /// Shortest timelines — 1.5× premium.
    Rush = 0,
    /// Tight but workable timelines — 1.2× premium.
    Fast = 1,
    /// Normal timelines — no adjustment.
    #[default]
    Standard = 2,
    /// Generous timelines — 0.9× discount.
    Flexible = 3,
}

impl UrgencyTier {
    /// Returns the price multiplier for this tier.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Rush => Decimal::new(15, 1),
            Self::Fast => Decimal::new(12, 1),
            Self::Standard => Decimal::ONE,
            Self::Flexible => Decimal::new(9, 1),
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rush => write!(f, "RUSH"),
            Self::Fast => write!(f, "FAST"),
            Self::Standard => write!(f, "STANDARD"),
            Self::Flexible => write!(f, "FLEXIBLE"),
        }
    }
}

/// Coarse human-facing label for a complexity multiplier.
///
/// # Examples
///
/// ```
/// use quote_engine::domain::value_objects::enums::ComplexityBand;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ComplexityBand::from_multiplier(Decimal::ONE), ComplexityBand::Basic);
/// assert_eq!(ComplexityBand::from_multiplier(Decimal::new(25, 1)), ComplexityBand::Enterprise);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ComplexityBand {
    /// Multiplier ≤ 1.2.
    Basic = 0,
    /// Multiplier ≤ 1.6.
    Standard = 1,
    /// Multiplier ≤ 2.0.
    Advanced = 2,
    /// Multiplier above 2.0.
    Enterprise = 3,
}

impl ComplexityBand {
    /// Derives the band from a complexity multiplier.
    #[must_use]
    pub fn from_multiplier(multiplier: Decimal) -> Self {
        if multiplier <= Decimal::new(12, 1) {
            Self::Basic
        } else if multiplier <= Decimal::new(16, 1) {
            Self::Standard
        } else if multiplier <= Decimal::new(20, 1) {
            Self::Advanced
        } else {
            Self::Enterprise
        }
    }
}

impl fmt::Display for ComplexityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Standard => write!(f, "Standard"),
            Self::Advanced => write!(f, "Advanced"),
            Self::Enterprise => write!(f, "Enterprise"),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
