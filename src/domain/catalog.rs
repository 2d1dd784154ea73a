//! # Service Catalog
//!
//! The immutable registry of purchasable service types.
//!
//! Every magic number tied to a service identifier lives here: base
//! price, complexity-multiplier ceiling, and the consultation flag.
//! Adding a new service type means adding one entry — the calculation
//! pipeline never changes.
//!
//! Unknown identifiers resolve through [`TermsLookup::Default`] so the
//! caller can tell the fallback path apart from a catalog hit.
//!
//! # Examples
//!
//! ```
//! use quote_engine::domain::catalog::ServiceCatalog;
//! use quote_engine::domain::value_objects::{Money, ServiceId};
//!
//! let catalog = ServiceCatalog::standard();
//! let lookup = catalog.terms(&ServiceId::new("landing-page").unwrap());
//! assert!(!lookup.is_default());
//! assert_eq!(lookup.terms().base_price(), Money::from_whole(800));
//! ```

use crate::domain::value_objects::{Money, ServiceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base price applied to identifiers not present in the catalog, in USD.
pub const DEFAULT_BASE_PRICE_USD: u64 = 1000;

/// Pricing terms for one service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTerms {
    base_price: Money,
    ceiling: Decimal,
    requires_consultation: bool,
}

impl ServiceTerms {
    /// Creates pricing terms.
    #[must_use]
    pub const fn new(base_price: Money, ceiling: Decimal, requires_consultation: bool) -> Self {
        Self {
            base_price,
            ceiling,
            requires_consultation,
        }
    }

    /// Fixed base price in USD.
    #[inline]
    #[must_use]
    pub const fn base_price(&self) -> Money {
        self.base_price
    }

    /// Ceiling for the complexity multiplier.
    #[inline]
    #[must_use]
    pub const fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    /// True if the real cost cannot be captured by the standard formula.
    ///
    /// The line price is still estimated and shown as a "starting from"
    /// figure.
    #[inline]
    #[must_use]
    pub const fn requires_consultation(&self) -> bool {
        self.requires_consultation
    }
}

/// Outcome of a catalog lookup.
///
/// Tags whether the terms came from the catalog or from the default
/// fallback, so tests and callers can assert the path taken instead of
/// inferring it from numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsLookup {
    /// The identifier is in the catalog.
    Known(ServiceTerms),
    /// The identifier is unknown; default terms apply.
    Default(ServiceTerms),
}

impl TermsLookup {
    /// Returns the resolved terms regardless of provenance.
    #[inline]
    #[must_use]
    pub const fn terms(&self) -> &ServiceTerms {
        match self {
            Self::Known(terms) | Self::Default(terms) => terms,
        }
    }

    /// True if the default fallback path was taken.
    #[inline]
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }
}

/// Immutable registry mapping service identifiers to pricing terms.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    entries: BTreeMap<&'static str, ServiceTerms>,
}

/// Ceiling for simpler service categories.
fn low_ceiling() -> Decimal {
    Decimal::new(20, 1)
}

/// Ceiling for richer service categories.
fn high_ceiling() -> Decimal {
    Decimal::new(25, 1)
}

impl ServiceCatalog {
    /// Builds the standard catalog of the twelve known service types.
    #[must_use]
    pub fn standard() -> Self {
        let low = low_ceiling();
        let high = high_ceiling();
        let fixed = |price: u64, ceiling: Decimal| ServiceTerms::new(
            Money::from_whole(price),
            ceiling,
            false,
        );
        let consult = |price: u64, ceiling: Decimal| ServiceTerms::new(
            Money::from_whole(price),
            ceiling,
            true,
        );

        let entries = BTreeMap::from([
            ("landing-page", fixed(800, low)),
            ("frontend", fixed(1500, high)),
            ("backend", fixed(2000, high)),
            ("design", fixed(1200, low)),
            ("api", fixed(1200, high)),
            ("database", fixed(900, low)),
            ("auth", fixed(600, low)),
            ("payment", fixed(1000, low)),
            ("deployment", fixed(400, low)),
            ("smart-contract", consult(3500, high)),
            ("bug-fix", consult(500, low)),
            ("refactor", consult(800, low)),
        ]);

        Self { entries }
    }

    /// Resolves the pricing terms for a service identifier.
    ///
    /// Unknown identifiers resolve to default terms (base price
    /// [`DEFAULT_BASE_PRICE_USD`], low ceiling, no consultation).
    #[must_use]
    pub fn terms(&self, id: &ServiceId) -> TermsLookup {
        match self.entries.get(id.as_str()) {
            Some(terms) => TermsLookup::Known(*terms),
            None => TermsLookup::Default(ServiceTerms::new(
                Money::from_whole(DEFAULT_BASE_PRICE_USD),
                low_ceiling(),
                false,
            )),
        }
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
