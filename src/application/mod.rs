//! # Application Layer
//!
//! Deterministic pricing logic over the domain types. Everything here is
//! synchronous and side-effect free apart from structured logging;
//! currency conversion and rate fetching live in the infrastructure
//! layer.

pub mod services;

pub use services::{
    ComplexityScorer, DiscountTier, PricedLine, QuoteEstimator, ServicePricer, UrgencyResolver,
};
