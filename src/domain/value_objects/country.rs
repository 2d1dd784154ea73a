//! # Country and Currency
//!
//! Country codes, display currencies, and payment provider routing.
//!
//! A buyer's country (resolved upstream via IP geolocation) selects a
//! currency/provider pairing. A short allow-list of African markets
//! routes to NGN via Paystack; every other country routes to USD via
//! Stripe. The country code is an input only — it is never part of the
//! pricing math.
//!
//! # Examples
//!
//! ```
//! use quote_engine::domain::value_objects::country::{CountryCode, Currency, PaymentProvider};
//!
//! let ng = CountryCode::new("ng").unwrap();
//! let (currency, provider) = Currency::for_country(&ng);
//! assert_eq!(currency, Currency::Ngn);
//! assert_eq!(provider, PaymentProvider::Paystack);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Markets whose buyers see NGN prices through Paystack.
const NGN_MARKETS: [&str; 4] = ["NG", "GH", "KE", "ZA"];

/// Two-letter ISO country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a country code from a two-letter string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCountryCode` if the input is not
    /// exactly two ASCII letters.
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// The baseline country used when geolocation yields nothing.
    #[must_use]
    pub fn baseline() -> Self {
        Self("US".to_string())
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::baseline()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Display currency for localized amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Currency {
    /// United States dollar — the pricing baseline.
    #[default]
    Usd = 0,
    /// Nigerian naira.
    Ngn = 1,
}

impl Currency {
    /// Returns the ISO 4217 currency code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Ngn => "NGN",
        }
    }

    /// Returns the display symbol.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Ngn => "₦",
        }
    }

    /// Resolves the currency/provider pairing for a buyer's country.
    ///
    /// Countries in the fixed allow-list get NGN via Paystack; all
    /// others get USD via Stripe.
    #[must_use]
    pub fn for_country(country: &CountryCode) -> (Self, PaymentProvider) {
        if NGN_MARKETS.contains(&country.as_str()) {
            (Self::Ngn, PaymentProvider::Paystack)
        } else {
            (Self::Usd, PaymentProvider::Stripe)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Payment provider paired with a display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PaymentProvider {
    /// Default provider for USD checkouts.
    #[default]
    Stripe = 0,
    /// Provider for NGN checkouts in supported African markets.
    Paystack = 1,
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stripe => write!(f, "stripe"),
            Self::Paystack => write!(f, "paystack"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod country_code {
        use super::*;

        #[test]
        fn uppercases_input() {
            assert_eq!(CountryCode::new("ng").unwrap().as_str(), "NG");
        }

        #[test]
        fn rejects_bad_lengths_and_digits() {
            assert!(CountryCode::new("USA").is_err());
            assert!(CountryCode::new("U").is_err());
            assert!(CountryCode::new("1A").is_err());
            assert!(CountryCode::new("").is_err());
        }

        #[test]
        fn baseline_is_us() {
            assert_eq!(CountryCode::baseline().as_str(), "US");
            assert_eq!(CountryCode::default(), CountryCode::baseline());
        }
    }

    mod currency_routing {
        use super::*;

        #[test]
        fn ngn_markets_route_to_paystack() {
            for code in ["NG", "GH", "KE", "ZA"] {
                let country = CountryCode::new(code).unwrap();
                assert_eq!(
                    Currency::for_country(&country),
                    (Currency::Ngn, PaymentProvider::Paystack),
                    "expected NGN for {code}"
                );
            }
        }

        #[test]
        fn everything_else_routes_to_usd() {
            for code in ["US", "GB", "DE", "IN", "BR"] {
                let country = CountryCode::new(code).unwrap();
                assert_eq!(
                    Currency::for_country(&country),
                    (Currency::Usd, PaymentProvider::Stripe),
                    "expected USD for {code}"
                );
            }
        }

        #[test]
        fn codes_and_symbols() {
            assert_eq!(Currency::Usd.code(), "USD");
            assert_eq!(Currency::Usd.symbol(), "$");
            assert_eq!(Currency::Ngn.code(), "NGN");
            assert_eq!(Currency::Ngn.symbol(), "₦");
        }
    }
}
