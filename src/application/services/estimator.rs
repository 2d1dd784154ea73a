//! # Quote Estimator
//!
//! The top-level assembler: turns a [`ProjectQuoteRequest`] into one
//! complete [`Estimate`].
//!
//! The pipeline is total — it never fails and never returns a partial
//! result. Missing inputs degrade to neutral defaults: no urgency means
//! STANDARD pricing, no country means the USD baseline, no primary
//! selection means the zero-value estimate. Computation is synchronous
//! and pure given the current cache state; the same request against the
//! same cache always produces the same estimate.
//!
//! Order of operations: price lines → sum subtotal → subtract bundle
//! discount → apply urgency multiplier → localize every display figure.
//! The urgency multiplier applies after the discount, never per line.

use crate::application::services::bundle_discount::DiscountTier;
use crate::application::services::pricer::ServicePricer;
use crate::application::services::urgency::UrgencyResolver;
use crate::domain::entities::estimate::{BreakdownEntry, Estimate};
use crate::domain::entities::project::ProjectQuoteRequest;
use crate::domain::value_objects::{CountryCode, Currency, Money, UrgencyTier};
use crate::infrastructure::rates::localizer::CurrencyLocalizer;

/// Assembles complete estimates from collected project inputs.
#[derive(Debug, Clone)]
pub struct QuoteEstimator {
    pricer: ServicePricer,
    localizer: CurrencyLocalizer,
}

impl QuoteEstimator {
    /// Creates an estimator from its two collaborators.
    #[must_use]
    pub fn new(pricer: ServicePricer, localizer: CurrencyLocalizer) -> Self {
        Self { pricer, localizer }
    }

    /// Creates an estimator over the standard catalog.
    #[must_use]
    pub fn standard(localizer: CurrencyLocalizer) -> Self {
        Self::new(ServicePricer::standard(), localizer)
    }

    /// Computes the estimate for a request.
    ///
    /// Never fails; degraded inputs price at neutral defaults. Currency
    /// conversion uses the cached or fallback rate — this path never
    /// fetches. Call [`warm_rates`](Self::warm_rates) beforehand when a
    /// live rate is wanted.
    #[must_use]
    pub fn compute(&self, request: &ProjectQuoteRequest) -> Estimate {
        let baseline = CountryCode::baseline();
        let country = request.country().unwrap_or(&baseline);
        let (currency, provider) = Currency::for_country(country);

        if request.primary().is_none() {
            tracing::debug!("no primary selection, returning empty estimate");
            return Estimate::empty(
                currency,
                provider,
                CurrencyLocalizer::format(Money::ZERO, currency),
            );
        }

        let mut subtotal = Money::ZERO;
        let mut requires_consultation = false;
        let mut breakdown = Vec::with_capacity(request.service_count());

        for selection in request.ordered() {
            let line = self
                .pricer
                .price(selection, request.configuration(selection.id()));
            subtotal = subtotal.saturating_add(line.line_price);
            requires_consultation |= line.requires_consultation;

            breakdown.push(BreakdownEntry {
                service_id: selection.id().clone(),
                service_name: selection.name().to_string(),
                base_price: line.base_price,
                multiplier: line.multiplier,
                band: line.band,
                line_price: self.localizer.localize_sync(line.line_price, country),
                requires_consultation: line.requires_consultation,
                from_catalog: line.from_catalog,
            });
        }

        let service_count = request.service_count();
        let tier = DiscountTier::for_service_count(service_count);
        let discount = tier.discount_amount(subtotal);

        let urgency = request
            .urgency()
            .map_or(UrgencyTier::Standard, UrgencyResolver::classify_selection);
        let urgency_multiplier = urgency.multiplier();

        let total = subtotal
            .saturating_sub(discount)
            .saturating_mul(urgency_multiplier)
            .round_to_unit();

        tracing::info!(
            services = service_count,
            %subtotal,
            %discount,
            urgency = %urgency,
            %total,
            currency = currency.code(),
            "estimate computed"
        );

        Estimate {
            total: self.localizer.localize_sync(total, country),
            subtotal: self.localizer.localize_sync(subtotal, country),
            discount: self.localizer.localize_sync(discount, country),
            breakdown,
            service_count,
            requires_consultation,
            currency,
            provider,
            urgency,
            urgency_multiplier,
        }
    }

    /// Pre-populates the exchange-rate cache for the request's market.
    ///
    /// Call ahead of [`compute`](Self::compute) so the synchronous path
    /// can localize with a live rate. Failures are logged and swallowed.
    pub async fn warm_rates(&self, request: &ProjectQuoteRequest) {
        let baseline = CountryCode::baseline();
        let country = request.country().unwrap_or(&baseline);
        self.localizer.warm_cache(country).await;
    }
}
