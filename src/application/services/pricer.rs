//! # Service Pricer
//!
//! Combines a service's catalog base price with its complexity
//! multiplier into one USD line price.
//!
//! Missing configuration never fails — it prices at baseline. Unknown
//! identifiers price through the catalog's default terms and are logged
//! as a warning-level anomaly. Consultation-flagged services still get a
//! real estimated line price (shown as "starting from"), never zero.

use crate::application::services::complexity::ComplexityScorer;
use crate::domain::catalog::ServiceCatalog;
use crate::domain::entities::project::{ServiceConfiguration, ServiceSelection};
use crate::domain::value_objects::{ComplexityBand, Money};
use rust_decimal::Decimal;
use std::sync::Arc;

/// One priced service line, in USD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    /// Fixed base price from the catalog.
    pub base_price: Money,
    /// Complexity multiplier, within `[1.0, ceiling]`.
    pub multiplier: Decimal,
    /// Human-facing complexity label.
    pub band: ComplexityBand,
    /// `round(base_price × multiplier)` to the nearest whole USD.
    pub line_price: Money,
    /// True for custom-pricing services; the line price is then a
    /// "starting from" figure.
    pub requires_consultation: bool,
    /// False when the identifier priced through the default fallback.
    pub from_catalog: bool,
}

/// Prices one selected service from catalog terms and configuration.
#[derive(Debug, Clone)]
pub struct ServicePricer {
    catalog: Arc<ServiceCatalog>,
    scorer: ComplexityScorer,
}

impl ServicePricer {
    /// Creates a pricer over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        let scorer = ComplexityScorer::new(Arc::clone(&catalog));
        Self { catalog, scorer }
    }

    /// Creates a pricer over the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(ServiceCatalog::standard()))
    }

    /// Prices one selection.
    ///
    /// Absent configuration is treated as empty (multiplier 1.0).
    #[must_use]
    pub fn price(
        &self,
        selection: &ServiceSelection,
        configuration: Option<&ServiceConfiguration>,
    ) -> PricedLine {
        let lookup = self.catalog.terms(selection.id());
        if lookup.is_default() {
            tracing::warn!(
                service = %selection.id(),
                "unknown service identifier, pricing with default terms"
            );
        }
        let terms = lookup.terms();

        let empty = ServiceConfiguration::new();
        let config = configuration.unwrap_or(&empty);
        let multiplier = self.scorer.score(selection.id(), config);

        let line_price = terms
            .base_price()
            .saturating_mul(multiplier)
            .round_to_unit();

        PricedLine {
            base_price: terms.base_price(),
            multiplier,
            band: ComplexityBand::from_multiplier(multiplier),
            line_price,
            requires_consultation: terms.requires_consultation(),
            from_catalog: !lookup.is_default(),
        }
    }
}

impl Default for ServicePricer {
    fn default() -> Self {
        Self::standard()
    }
}
