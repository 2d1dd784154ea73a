//! # Complexity Scorer
//!
//! Maps one service's collected configuration to a dimensionless price
//! multiplier.
//!
//! Every service identifier has its own independently-authored set of
//! additive rules on top of the 1.0 baseline; the result is clamped to
//! the service's catalog ceiling and never drops below baseline.
//! Identifiers without rules (including unknown ones) score exactly 1.0,
//! so scoring is a best-effort enhancement, never a requirement for
//! pricing to function.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_engine::application::services::complexity::ComplexityScorer;
//! use quote_engine::domain::catalog::ServiceCatalog;
//! use quote_engine::domain::entities::project::ServiceConfiguration;
//! use quote_engine::domain::value_objects::ServiceId;
//! use rust_decimal::Decimal;
//!
//! let scorer = ComplexityScorer::new(Arc::new(ServiceCatalog::standard()));
//! let id = ServiceId::new("landing-page").unwrap();
//! let score = scorer.score(&id, &ServiceConfiguration::new());
//! assert_eq!(score, Decimal::ONE);
//! ```

use crate::domain::catalog::ServiceCatalog;
use crate::domain::entities::project::ServiceConfiguration;
use crate::domain::value_objects::{ComplexityClass, ServiceId};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Rule weight in hundredths (25 → +0.25).
fn pts(hundredths: i64) -> Decimal {
    Decimal::new(hundredths, 2)
}

/// Scores a service's configuration into a complexity multiplier.
#[derive(Debug, Clone)]
pub struct ComplexityScorer {
    catalog: Arc<ServiceCatalog>,
}

impl ComplexityScorer {
    /// Creates a scorer that clamps against the given catalog's ceilings.
    #[must_use]
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self { catalog }
    }

    /// Computes the complexity multiplier for one service.
    ///
    /// Deterministic and side-effect free; the result is always within
    /// `[1.0, ceiling]` for the service's catalog terms.
    #[must_use]
    pub fn score(&self, id: &ServiceId, config: &ServiceConfiguration) -> Decimal {
        let additions = match id.as_str() {
            "frontend" => frontend_rules(config),
            "landing-page" => landing_page_rules(config),
            "backend" => backend_rules(config),
            "api" => api_rules(config),
            "database" => database_rules(config),
            "design" => design_rules(config),
            "auth" => auth_rules(config),
            "payment" => payment_rules(config),
            "smart-contract" => smart_contract_rules(config),
            "deployment" => deployment_rules(config),
            // bug-fix, refactor, and anything unknown: baseline only.
            _ => Decimal::ZERO,
        };

        let ceiling = self.catalog.terms(id).terms().ceiling();
        (Decimal::ONE + additions).clamp(Decimal::ONE, ceiling)
    }
}

/// Weight for an explicitly declared complexity tier.
fn declared_tier(config: &ServiceConfiguration) -> Decimal {
    match config.declared_complexity() {
        Some(ComplexityClass::Complex) => pts(50),
        Some(ComplexityClass::Medium) => pts(25),
        _ => Decimal::ZERO,
    }
}

/// Two-threshold count rule: above `upper` adds `high`, above `lower`
/// adds `low`.
fn count_rule(
    config: &ServiceConfiguration,
    key: &str,
    lower: u64,
    upper: u64,
    low: Decimal,
    high: Decimal,
) -> Decimal {
    match config.count(key) {
        Some(n) if n > upper => high,
        Some(n) if n > lower => low,
        _ => Decimal::ZERO,
    }
}

/// Per-item list rule: `weight` for each selected entry.
fn per_item(config: &ServiceConfiguration, key: &str, weight: Decimal) -> Decimal {
    weight * Decimal::from(config.list_len(key) as u64)
}

fn frontend_rules(config: &ServiceConfiguration) -> Decimal {
    declared_tier(config)
        + count_rule(config, "screens", 5, 10, pts(30), pts(50))
        + if config.flag("real_time") { pts(30) } else { Decimal::ZERO }
        + per_item(config, "integrations", pts(15))
}

fn landing_page_rules(config: &ServiceConfiguration) -> Decimal {
    count_rule(config, "sections", 5, 8, pts(15), pts(30))
        + if config.flag("animations") { pts(20) } else { Decimal::ZERO }
        + if config.flag("cms") { pts(20) } else { Decimal::ZERO }
}

fn backend_rules(config: &ServiceConfiguration) -> Decimal {
    count_rule(config, "endpoints", 10, 20, pts(30), pts(50))
        + if config.flag("real_time") { pts(30) } else { Decimal::ZERO }
        + if config.flag("auth") { pts(20) } else { Decimal::ZERO }
        + per_item(config, "integrations", pts(15))
}

fn api_rules(config: &ServiceConfiguration) -> Decimal {
    count_rule(config, "endpoints", 10, 20, pts(30), pts(50))
        + per_item(config, "integrations", pts(15))
}

fn database_rules(config: &ServiceConfiguration) -> Decimal {
    count_rule(config, "tables", 8, 15, pts(30), pts(50))
        + if config.flag("migrations") { pts(20) } else { Decimal::ZERO }
}

fn design_rules(config: &ServiceConfiguration) -> Decimal {
    count_rule(config, "screens", 5, 10, pts(20), pts(40))
        + if config.flag("design_system") { pts(30) } else { Decimal::ZERO }
}

fn auth_rules(config: &ServiceConfiguration) -> Decimal {
    per_item(config, "oauth_providers", pts(15))
        + if config.flag("mfa") { pts(25) } else { Decimal::ZERO }
}

fn payment_rules(config: &ServiceConfiguration) -> Decimal {
    let providers = config.list_len("providers");
    let extra_providers = providers.saturating_sub(1);
    pts(20) * Decimal::from(extra_providers as u64)
        + if config.flag("subscriptions") { pts(30) } else { Decimal::ZERO }
}

fn smart_contract_rules(config: &ServiceConfiguration) -> Decimal {
    declared_tier(config)
        + if config.flag("audit") { pts(50) } else { Decimal::ZERO }
}

fn deployment_rules(config: &ServiceConfiguration) -> Decimal {
    count_rule(config, "environments", 2, u64::MAX, pts(30), pts(30))
        + if config.flag("ci") { pts(20) } else { Decimal::ZERO }
}
