//! # Domain Errors
//!
//! Error types for domain-level validation and arithmetic.
//!
//! Pricing is deliberately lenient: most bad inputs are defaulted rather
//! than rejected (missing configuration, unknown service identifiers).
//! The errors here cover the few cases where a value object cannot be
//! constructed at all.

use crate::domain::value_objects::enums::ParseEnumError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A money amount was negative.
    #[error("negative amount: {0}")]
    NegativeAmount(Decimal),

    /// A service identifier was empty or malformed.
    #[error("invalid service identifier: '{0}'")]
    InvalidServiceId(String),

    /// A country code was not two ASCII letters.
    #[error("invalid country code: '{0}'")]
    InvalidCountryCode(String),

    /// An enum value could not be parsed from its string form.
    #[error(transparent)]
    Parse(#[from] ParseEnumError),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
