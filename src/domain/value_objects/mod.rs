//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ServiceId`]: String-based service identifier
//! - [`CountryCode`]: Two-letter ISO country code
//!
//! ## Numeric Types
//!
//! - [`Money`]: Non-negative decimal amount with saturating arithmetic
//!
//! ## Domain Enums
//!
//! - `DeliveryUnit`, `ComplexityClass`, `UrgencyTier`, `ComplexityBand`
//! - [`Currency`], [`PaymentProvider`]: display currency routing

pub mod country;
pub mod enums;
pub mod money;
pub mod service_id;

pub use country::{CountryCode, Currency, PaymentProvider};
pub use enums::{ComplexityBand, ComplexityClass, DeliveryUnit, ParseEnumError, UrgencyTier};
pub use money::Money;
pub use service_id::ServiceId;
