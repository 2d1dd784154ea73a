//! # Service Identifier
//!
//! Stable string identifier for one purchasable unit of work.
//!
//! Identifiers are lowercase kebab-case strings (`"frontend"`,
//! `"landing-page"`, `"smart-contract"`). The catalog resolves known
//! identifiers to their pricing terms; unknown identifiers are still
//! valid and price through the default terms.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a purchasable service.
///
/// # Examples
///
/// ```
/// use quote_engine::domain::value_objects::service_id::ServiceId;
///
/// let id = ServiceId::new("Landing-Page").unwrap();
/// assert_eq!(id.as_str(), "landing-page");
/// assert!(ServiceId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a service identifier, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidServiceId` if the trimmed input is empty.
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidServiceId(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
