//! # Currency Localizer
//!
//! Converts USD figures into the buyer's display currency.
//!
//! Resolution order for the exchange rate: fresh cache → live provider
//! (async path only) → hardcoded fallback constant. The synchronous
//! path exists for immediate-render contexts and never fetches or
//! blocks. A failed live fetch leaves the cache unpopulated so the next
//! asynchronous call retries the source.
//!
//! Converted non-USD amounts get magnitude-aware rounding so displayed
//! local prices stay clean despite inexact conversion: nearest 10 below
//! 1,000; nearest 100 below 10,000; nearest 1,000 below 100,000;
//! nearest 5,000 beyond.
//!
//! Concurrent cold-cache calls may each trigger an independent fetch.
//! The operation is idempotent and cheap, so the duplicate work is a
//! known inefficiency rather than a correctness problem.

use crate::domain::entities::estimate::LocalizedAmount;
use crate::domain::value_objects::{CountryCode, Currency, Money};
use crate::infrastructure::rates::cache::RateCache;
use crate::infrastructure::rates::provider::ExchangeRateProvider;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Converts and formats USD amounts for a buyer's market.
#[derive(Clone)]
pub struct CurrencyLocalizer {
    cache: RateCache,
    provider: Arc<dyn ExchangeRateProvider>,
    fallback_rate: Decimal,
}

impl CurrencyLocalizer {
    /// NGN per USD used when no live or cached rate is available.
    #[must_use]
    pub fn default_fallback_rate() -> Decimal {
        Decimal::from(1550)
    }

    /// Creates a localizer with the default fallback rate.
    #[must_use]
    pub fn new(cache: RateCache, provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            cache,
            provider,
            fallback_rate: Self::default_fallback_rate(),
        }
    }

    /// Overrides the hardcoded fallback rate.
    #[must_use]
    pub fn with_fallback_rate(mut self, rate: Decimal) -> Self {
        self.fallback_rate = rate;
        self
    }

    /// Localizes a USD amount without ever fetching or blocking.
    ///
    /// Uses whatever rate is cached, or the fallback constant when the
    /// cache is cold. Safe to call from a rendering context.
    #[must_use]
    pub fn localize_sync(&self, usd: Money, country: &CountryCode) -> LocalizedAmount {
        let (currency, _) = Currency::for_country(country);
        let rate = match currency {
            Currency::Usd => Decimal::ONE,
            Currency::Ngn => self.cache.get().unwrap_or(self.fallback_rate),
        };
        self.build(usd, currency, rate)
    }

    /// Localizes a USD amount, fetching a live rate on a cold cache.
    ///
    /// Falls back to the hardcoded constant if the provider fails; the
    /// cache is left unpopulated in that case so the next call retries.
    pub async fn localize(&self, usd: Money, country: &CountryCode) -> LocalizedAmount {
        let (currency, _) = Currency::for_country(country);
        let rate = match currency {
            Currency::Usd => Decimal::ONE,
            Currency::Ngn => self.current_rate(currency).await,
        };
        self.build(usd, currency, rate)
    }

    /// Proactively populates the rate cache for a buyer's market.
    ///
    /// Fire-and-forget: provider failures are logged and swallowed.
    pub async fn warm_cache(&self, country: &CountryCode) {
        let (currency, _) = Currency::for_country(country);
        if currency == Currency::Usd || !self.cache.is_expired() {
            return;
        }
        match self.provider.usd_rate(currency).await {
            Ok(rate) => {
                tracing::debug!(currency = currency.code(), %rate, "rate cache warmed");
                self.cache.set(rate);
            }
            Err(error) => {
                tracing::warn!(
                    currency = currency.code(),
                    %error,
                    "rate warm-up failed, cache left cold"
                );
            }
        }
    }

    /// Formats an amount as a symbol-prefixed, thousands-separated string.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_engine::domain::value_objects::{Currency, Money};
    /// use quote_engine::infrastructure::rates::localizer::CurrencyLocalizer;
    ///
    /// let formatted = CurrencyLocalizer::format(Money::from_whole(4725), Currency::Usd);
    /// assert_eq!(formatted, "$4,725");
    /// ```
    #[must_use]
    pub fn format(amount: Money, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), amount)
    }

    /// Cache → live fetch → fallback.
    async fn current_rate(&self, currency: Currency) -> Decimal {
        if let Some(rate) = self.cache.get() {
            tracing::debug!(currency = currency.code(), %rate, "rate cache hit");
            return rate;
        }
        match self.provider.usd_rate(currency).await {
            Ok(rate) => {
                self.cache.set(rate);
                rate
            }
            Err(error) => {
                tracing::warn!(
                    currency = currency.code(),
                    %error,
                    "rate fetch failed, using fallback rate"
                );
                self.fallback_rate
            }
        }
    }

    fn build(&self, usd: Money, currency: Currency, rate: Decimal) -> LocalizedAmount {
        let amount = match currency {
            Currency::Usd => usd,
            Currency::Ngn => {
                let converted = usd.saturating_mul(rate);
                converted.round_to_step(display_step(converted))
            }
        };
        LocalizedAmount::new(amount, currency, Self::format(amount, currency))
    }
}

impl std::fmt::Debug for CurrencyLocalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyLocalizer")
            .field("cache", &self.cache)
            .field("fallback_rate", &self.fallback_rate)
            .finish_non_exhaustive()
    }
}

/// Magnitude-aware rounding step for converted local-currency amounts.
fn display_step(amount: Money) -> Decimal {
    let value = amount.get();
    if value < Decimal::from(1_000) {
        Decimal::from(10)
    } else if value < Decimal::from(10_000) {
        Decimal::from(100)
    } else if value < Decimal::from(100_000) {
        Decimal::from(1_000)
    } else {
        Decimal::from(5_000)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::rates::provider::{RateError, RateResult};
    use async_trait::async_trait;

    /// Provider returning a fixed rate.
    struct FixedRateProvider(Decimal);

    #[async_trait]
    impl ExchangeRateProvider for FixedRateProvider {
        async fn usd_rate(&self, _currency: Currency) -> RateResult<Decimal> {
            Ok(self.0)
        }
    }

    /// Provider that always fails.
    struct FailingProvider;

    #[async_trait]
    impl ExchangeRateProvider for FailingProvider {
        async fn usd_rate(&self, _currency: Currency) -> RateResult<Decimal> {
            Err(RateError::Timeout)
        }
    }

    fn ng() -> CountryCode {
        CountryCode::new("NG").unwrap()
    }

    fn us() -> CountryCode {
        CountryCode::new("US").unwrap()
    }

    fn localizer_with(provider: Arc<dyn ExchangeRateProvider>) -> CurrencyLocalizer {
        CurrencyLocalizer::new(RateCache::with_default_ttl(), provider)
    }

    mod sync_path {
        use super::*;

        #[test]
        fn usd_passes_through_with_formatting() {
            let localizer = localizer_with(Arc::new(FailingProvider));
            let amount = localizer.localize_sync(Money::from_whole(3150), &us());
            assert_eq!(amount.amount(), Money::from_whole(3150));
            assert_eq!(amount.currency(), Currency::Usd);
            assert_eq!(amount.formatted(), "$3,150");
        }

        #[test]
        fn cold_cache_uses_fallback_without_fetching() {
            // FailingProvider would error if the sync path ever fetched.
            let localizer = localizer_with(Arc::new(FailingProvider));
            let amount = localizer.localize_sync(Money::from_whole(3150), &ng());
            // 3150 × 1550 = 4,882,500 → nearest 5,000 = 4,880,000.
            assert_eq!(amount.amount(), Money::from_whole(4_880_000));
            assert_eq!(amount.currency(), Currency::Ngn);
            assert_eq!(amount.formatted(), "₦4,880,000");
        }

        #[test]
        fn warm_cache_rate_is_used() {
            let cache = RateCache::with_default_ttl();
            cache.set(Decimal::from(1000));
            let localizer = CurrencyLocalizer::new(cache, Arc::new(FailingProvider));
            let amount = localizer.localize_sync(Money::from_whole(10), &ng());
            // 10 × 1000 = 10,000 → nearest 1,000 band.
            assert_eq!(amount.amount(), Money::from_whole(10_000));
        }
    }

    mod async_path {
        use super::*;

        #[tokio::test]
        async fn fetches_and_populates_cache_when_cold() {
            let cache = RateCache::with_default_ttl();
            let localizer =
                CurrencyLocalizer::new(cache.clone(), Arc::new(FixedRateProvider(Decimal::from(1600))));
            let amount = localizer.localize(Money::from_whole(100), &ng()).await;
            // 100 × 1600 = 160,000 → nearest 5,000 = 160,000.
            assert_eq!(amount.amount(), Money::from_whole(160_000));
            assert_eq!(cache.get(), Some(Decimal::from(1600)));
        }

        #[tokio::test]
        async fn provider_failure_falls_back_and_leaves_cache_cold() {
            let cache = RateCache::with_default_ttl();
            let localizer = CurrencyLocalizer::new(cache.clone(), Arc::new(FailingProvider));
            let amount = localizer.localize(Money::from_whole(3150), &ng()).await;
            assert_eq!(amount.amount(), Money::from_whole(4_880_000));
            assert_eq!(cache.get(), None, "failure must not populate the cache");
        }

        #[tokio::test]
        async fn usd_never_touches_provider_or_cache() {
            let cache = RateCache::with_default_ttl();
            let localizer = CurrencyLocalizer::new(cache.clone(), Arc::new(FailingProvider));
            let amount = localizer.localize(Money::from_whole(800), &us()).await;
            assert_eq!(amount.formatted(), "$800");
            assert_eq!(cache.get(), None);
        }

        #[tokio::test]
        async fn warm_cache_populates() {
            let cache = RateCache::with_default_ttl();
            let localizer =
                CurrencyLocalizer::new(cache.clone(), Arc::new(FixedRateProvider(Decimal::from(1550))));
            localizer.warm_cache(&ng()).await;
            assert_eq!(cache.get(), Some(Decimal::from(1550)));
        }

        #[tokio::test]
        async fn warm_cache_swallows_failures() {
            let cache = RateCache::with_default_ttl();
            let localizer = CurrencyLocalizer::new(cache.clone(), Arc::new(FailingProvider));
            localizer.warm_cache(&ng()).await;
            assert_eq!(cache.get(), None);
        }

        #[tokio::test]
        async fn warm_cache_skips_usd_markets() {
            let localizer = localizer_with(Arc::new(FailingProvider));
            // Must not even attempt a fetch; FailingProvider would just
            // log, but the early return is the documented behavior.
            localizer.warm_cache(&us()).await;
            assert!(localizer.cache.get().is_none());
        }
    }

    mod magnitude_rounding {
        use super::*;

        fn convert(usd: u64, rate: i64) -> Money {
            let cache = RateCache::with_default_ttl();
            cache.set(Decimal::from(rate));
            let localizer = CurrencyLocalizer::new(cache, Arc::new(FailingProvider));
            localizer.localize_sync(Money::from_whole(usd), &ng()).amount()
        }

        #[test]
        fn below_one_thousand_rounds_to_tens() {
            // 1 USD × 847 = 847 → 850.
            assert_eq!(convert(1, 847), Money::from_whole(850));
        }

        #[test]
        fn below_ten_thousand_rounds_to_hundreds() {
            // 3 USD × 1549 = 4,647 → 4,600.
            assert_eq!(convert(3, 1549), Money::from_whole(4_600));
        }

        #[test]
        fn below_one_hundred_thousand_rounds_to_thousands() {
            // 60 USD × 1549 = 92,940 → 93,000.
            assert_eq!(convert(60, 1549), Money::from_whole(93_000));
        }

        #[test]
        fn large_amounts_round_to_five_thousands() {
            // 3150 USD × 1550 = 4,882,500 → 4,880,000.
            assert_eq!(convert(3150, 1550), Money::from_whole(4_880_000));
        }
    }
}
