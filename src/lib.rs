//! # Quote Engine
//!
//! Deterministic pricing engine that turns a buyer's onboarding
//! selections into one localized project estimate.
//!
//! The crate is layered:
//! - [`domain`]: pure value objects, the service catalog, and the
//!   input/output entities
//! - [`application`]: the pricing pipeline — complexity scoring, line
//!   pricing, bundle discount, urgency, and the estimate assembler
//! - [`infrastructure`]: exchange-rate fetching, caching, and currency
//!   localization
//!
//! Pricing never fails: missing or malformed inputs degrade to neutral
//! defaults, an unreachable rate source degrades to a cached or
//! hardcoded rate, and the same inputs always produce the same estimate.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use quote_engine::application::QuoteEstimator;
//! use quote_engine::domain::entities::project::{ProjectQuoteRequest, ServiceSelection};
//! use quote_engine::domain::value_objects::ServiceId;
//! use quote_engine::infrastructure::rates::{CurrencyLocalizer, HttpRateProvider, RateCache};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(HttpRateProvider::new("https://open.er-api.com/v6")?);
//! let localizer = CurrencyLocalizer::new(RateCache::with_default_ttl(), provider);
//! let estimator = QuoteEstimator::standard(localizer);
//!
//! let request = ProjectQuoteRequest::new()
//!     .with_selection(ServiceSelection::primary(ServiceId::new("frontend")?, "Frontend"));
//! let estimate = estimator.compute(&request);
//! assert_eq!(estimate.total.formatted(), "$1,500");
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::QuoteEstimator;
pub use domain::entities::estimate::Estimate;
pub use domain::entities::project::ProjectQuoteRequest;
