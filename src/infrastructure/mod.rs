//! # Infrastructure Layer
//!
//! Everything that touches the outside world. Currently that is one
//! concern: exchange rates, behind the [`rates`] module. Failures here
//! never propagate into the pricing pipeline; the localizer absorbs them
//! with cached or fallback rates.

pub mod rates;

pub use rates::{CurrencyLocalizer, ExchangeRateProvider, HttpRateProvider, RateCache};
