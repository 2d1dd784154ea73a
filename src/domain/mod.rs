//! # Domain Layer
//!
//! Pure business types: value objects, input/output entities, the
//! service catalog, and domain errors. Nothing in this layer performs
//! I/O.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{ServiceCatalog, ServiceTerms, TermsLookup};
pub use errors::{DomainError, DomainResult};
