//! # Domain Entities
//!
//! Input and output aggregates of the quote engine.
//!
//! - [`project`]: collected onboarding state (selections, answers, urgency)
//! - [`estimate`]: the priced output value object

pub mod estimate;
pub mod project;

pub use estimate::{BreakdownEntry, Estimate, LocalizedAmount};
pub use project::{
    ProjectQuoteRequest, SelectionRole, ServiceConfiguration, ServiceSelection, UrgencySelection,
};
