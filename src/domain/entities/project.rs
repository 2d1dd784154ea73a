//! # Project Inputs
//!
//! The collected state of an onboarding flow: which services the buyer
//! selected, what they answered about each one, and how soon they want
//! delivery.
//!
//! These types are write-owned by the form layer; the quote engine only
//! reads them. Everything here is best-effort: missing configuration,
//! missing urgency, and missing country are all valid states.

use crate::domain::value_objects::{ComplexityClass, CountryCode, DeliveryUnit, ServiceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a selection is the primary service or an add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SelectionRole {
    /// The one designated primary selection.
    Primary = 0,
    /// An additional service purchased alongside the primary.
    AddOn = 1,
}

/// One purchasable unit of work chosen by the buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    id: ServiceId,
    name: String,
    role: SelectionRole,
}

impl ServiceSelection {
    /// Creates a primary selection.
    #[must_use]
    pub fn primary(id: ServiceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: SelectionRole::Primary,
        }
    }

    /// Creates an add-on selection.
    #[must_use]
    pub fn add_on(id: ServiceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: SelectionRole::AddOn,
        }
    }

    /// Returns the stable service identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the selection role.
    #[inline]
    #[must_use]
    pub const fn role(&self) -> SelectionRole {
        self.role
    }

    /// True if this is the primary selection.
    #[inline]
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.role == SelectionRole::Primary
    }
}

/// Free-form answers collected for one service.
///
/// The form layer writes arbitrary key/value shapes per service; the
/// quote engine reads them through the typed accessors below, tolerating
/// any missing or mistyped value.
///
/// # Examples
///
/// ```
/// use quote_engine::domain::entities::project::ServiceConfiguration;
/// use serde_json::json;
///
/// let config = ServiceConfiguration::new()
///     .with("screens", json!(12))
///     .with("real_time", json!(true))
///     .with("integrations", json!(["stripe", "mailchimp"]));
///
/// assert_eq!(config.count("screens"), Some(12));
/// assert!(config.flag("real_time"));
/// assert_eq!(config.list_len("integrations"), 2);
/// assert_eq!(config.count("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ServiceConfiguration {
    answers: BTreeMap<String, serde_json::Value>,
}

impl ServiceConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one answer, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.answers.insert(key.into(), value);
        self
    }

    /// Reads an answer as a non-negative count.
    ///
    /// Non-numeric and negative values read as absent.
    #[must_use]
    pub fn count(&self, key: &str) -> Option<u64> {
        self.answers.get(key).and_then(serde_json::Value::as_u64)
    }

    /// Reads an answer as a boolean flag; absent or mistyped reads false.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.answers
            .get(key)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns the length of a list answer; absent or mistyped reads 0.
    #[must_use]
    pub fn list_len(&self, key: &str) -> usize {
        self.answers
            .get(key)
            .and_then(serde_json::Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Reads the explicitly declared complexity tier, if any.
    ///
    /// Stored under the `"complexity"` key; unparseable values read as
    /// absent.
    #[must_use]
    pub fn declared_complexity(&self) -> Option<ComplexityClass> {
        self.answers
            .get("complexity")
            .and_then(serde_json::Value::as_str)
            .and_then(|s| s.parse().ok())
    }

    /// Returns true if no answers have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// The buyer's delivery-urgency choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencySelection {
    /// How many units until requested delivery.
    pub amount: Decimal,
    /// The unit the amount is expressed in.
    pub unit: DeliveryUnit,
    /// Declared complexity class of the work the timeline applies to.
    pub complexity: ComplexityClass,
}

impl UrgencySelection {
    /// Creates an urgency selection.
    #[must_use]
    pub const fn new(amount: Decimal, unit: DeliveryUnit, complexity: ComplexityClass) -> Self {
        Self {
            amount,
            unit,
            complexity,
        }
    }
}

/// The full input bundle for one quote computation.
///
/// Selections keep their insertion order; [`ordered`](Self::ordered)
/// moves the primary to the front defensively before pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectQuoteRequest {
    selections: Vec<ServiceSelection>,
    configurations: BTreeMap<ServiceId, ServiceConfiguration>,
    urgency: Option<UrgencySelection>,
    country: Option<CountryCode>,
}

impl ProjectQuoteRequest {
    /// Creates an empty request — the valid "nothing selected yet" state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selection, builder style.
    #[must_use]
    pub fn with_selection(mut self, selection: ServiceSelection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Attaches the configuration for one service, builder style.
    #[must_use]
    pub fn with_configuration(mut self, id: ServiceId, config: ServiceConfiguration) -> Self {
        self.configurations.insert(id, config);
        self
    }

    /// Sets the urgency selection, builder style.
    #[must_use]
    pub fn with_urgency(mut self, urgency: UrgencySelection) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Sets the buyer's country, builder style.
    #[must_use]
    pub fn with_country(mut self, country: CountryCode) -> Self {
        self.country = Some(country);
        self
    }

    /// Returns the primary selection, if one exists.
    #[must_use]
    pub fn primary(&self) -> Option<&ServiceSelection> {
        self.selections.iter().find(|s| s.is_primary())
    }

    /// Returns all selections with the primary first, add-ons in
    /// insertion order after it.
    #[must_use]
    pub fn ordered(&self) -> Vec<&ServiceSelection> {
        let mut ordered: Vec<&ServiceSelection> = Vec::with_capacity(self.selections.len());
        ordered.extend(self.selections.iter().filter(|s| s.is_primary()));
        ordered.extend(self.selections.iter().filter(|s| !s.is_primary()));
        ordered
    }

    /// Returns the configuration collected for a service, if any.
    #[must_use]
    pub fn configuration(&self, id: &ServiceId) -> Option<&ServiceConfiguration> {
        self.configurations.get(id)
    }

    /// Returns the urgency selection, if one has been made.
    #[inline]
    #[must_use]
    pub const fn urgency(&self) -> Option<&UrgencySelection> {
        self.urgency.as_ref()
    }

    /// Returns the buyer's country, if resolved.
    #[inline]
    #[must_use]
    pub const fn country(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    /// Returns the number of selected services.
    #[must_use]
    pub fn service_count(&self) -> usize {
        self.selections.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s).unwrap()
    }

    mod configuration {
        use super::*;

        #[test]
        fn typed_accessors_tolerate_mistyped_values() {
            let config = ServiceConfiguration::new()
                .with("screens", json!("a lot"))
                .with("real_time", json!(3))
                .with("integrations", json!("stripe"));

            assert_eq!(config.count("screens"), None);
            assert!(!config.flag("real_time"));
            assert_eq!(config.list_len("integrations"), 0);
        }

        #[test]
        fn negative_count_reads_as_absent() {
            let config = ServiceConfiguration::new().with("screens", json!(-4));
            assert_eq!(config.count("screens"), None);
        }

        #[test]
        fn declared_complexity_parses() {
            let config = ServiceConfiguration::new().with("complexity", json!("complex"));
            assert_eq!(config.declared_complexity(), Some(ComplexityClass::Complex));

            let bad = ServiceConfiguration::new().with("complexity", json!("impossible"));
            assert_eq!(bad.declared_complexity(), None);
        }

        #[test]
        fn empty_by_default() {
            assert!(ServiceConfiguration::new().is_empty());
        }
    }

    mod request {
        use super::*;

        #[test]
        fn primary_found_among_add_ons() {
            let request = ProjectQuoteRequest::new()
                .with_selection(ServiceSelection::add_on(id("design"), "Design"))
                .with_selection(ServiceSelection::primary(id("frontend"), "Frontend"));

            assert_eq!(request.primary().unwrap().id(), &id("frontend"));
        }

        #[test]
        fn ordered_puts_primary_first() {
            let request = ProjectQuoteRequest::new()
                .with_selection(ServiceSelection::add_on(id("design"), "Design"))
                .with_selection(ServiceSelection::primary(id("frontend"), "Frontend"))
                .with_selection(ServiceSelection::add_on(id("backend"), "Backend"));

            let ordered: Vec<&str> = request.ordered().iter().map(|s| s.id().as_str()).collect();
            assert_eq!(ordered, vec!["frontend", "design", "backend"]);
        }

        #[test]
        fn empty_request_is_valid() {
            let request = ProjectQuoteRequest::new();
            assert!(request.primary().is_none());
            assert_eq!(request.service_count(), 0);
            assert!(request.urgency().is_none());
            assert!(request.country().is_none());
        }

        #[test]
        fn configuration_lookup() {
            let config = ServiceConfiguration::new().with("screens", json!(4));
            let request = ProjectQuoteRequest::new()
                .with_selection(ServiceSelection::primary(id("frontend"), "Frontend"))
                .with_configuration(id("frontend"), config.clone());

            assert_eq!(request.configuration(&id("frontend")), Some(&config));
            assert_eq!(request.configuration(&id("backend")), None);
        }

        #[test]
        fn serde_roundtrip() {
            let request = ProjectQuoteRequest::new()
                .with_selection(ServiceSelection::primary(id("frontend"), "Frontend"))
                .with_urgency(UrgencySelection::new(
                    Decimal::from(2),
                    DeliveryUnit::Weeks,
                    ComplexityClass::Medium,
                ))
                .with_country(CountryCode::new("NG").unwrap());

            let json = serde_json::to_string(&request).unwrap();
            let back: ProjectQuoteRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(request, back);
        }
    }
}
