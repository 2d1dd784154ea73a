//! # Exchange Rates
//!
//! Live-rate fetching, caching, and currency localization:
//! - [`ExchangeRateProvider`]: the rate-source seam, with
//!   [`HttpRateProvider`] as the production implementation
//! - [`RateCache`]: shared TTL-bounded rate storage
//! - [`CurrencyLocalizer`]: USD → display-currency conversion with
//!   magnitude-aware rounding and formatting

pub mod cache;
pub mod localizer;
pub mod provider;

pub use cache::RateCache;
pub use localizer::CurrencyLocalizer;
pub use provider::{ExchangeRateProvider, HttpRateProvider, RateError, RateResult};
