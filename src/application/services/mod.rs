//! # Application Services
//!
//! The pricing pipeline, one stage per module:
//! - [`ComplexityScorer`]: configuration → multiplier
//! - [`ServicePricer`]: catalog terms × multiplier → line price
//! - [`DiscountTier`]: bundle discount by service count
//! - [`UrgencyResolver`]: timeline → urgency tier
//! - [`QuoteEstimator`]: the assembler over all of the above

pub mod bundle_discount;
pub mod complexity;
pub mod estimator;
pub mod pricer;
pub mod urgency;

pub use bundle_discount::DiscountTier;
pub use complexity::ComplexityScorer;
pub use estimator::QuoteEstimator;
pub use pricer::{PricedLine, ServicePricer};
pub use urgency::UrgencyResolver;
