//! # Exchange-Rate Providers
//!
//! The seam between the quote engine and the external rate source.
//!
//! [`ExchangeRateProvider`] abstracts where a USD exchange rate comes
//! from; [`HttpRateProvider`] is the production implementation against
//! an open-exchange-style JSON endpoint with a short request timeout.
//! Failures are represented by [`RateError`] and always caught at the
//! localizer boundary — they never reach the assembler or the UI.

use crate::domain::value_objects::Currency;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Error type for rate-provider operations.
#[derive(Debug, Clone, Error)]
pub enum RateError {
    /// The request timed out.
    #[error("rate request timed out")]
    Timeout,

    /// Network or connection failure.
    #[error("rate request failed: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("rate endpoint returned status {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be interpreted as a usable rate.
    #[error("malformed rate response: {0}")]
    Malformed(String),
}

/// Result type for rate-provider operations.
pub type RateResult<T> = Result<T, RateError>;

/// Source of USD exchange rates.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Fetches how many units of `currency` one USD buys.
    ///
    /// # Errors
    ///
    /// Returns a `RateError` on network failure, non-success status, or
    /// an unusable response body.
    async fn usd_rate(&self, currency: Currency) -> RateResult<Decimal>;
}

/// Shape of the rate endpoint's JSON body.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, Decimal>,
}

/// HTTP rate provider against an open-exchange-style endpoint.
///
/// Expects `GET {base_url}/latest/USD` to return
/// `{"rates": {"NGN": 1550.0, ...}}`.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRateProvider {
    /// Default request timeout: the fetch must fall back rather than hang.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Creates a provider for the given endpoint with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> RateResult<Self> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    /// Creates a provider with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Network` if the HTTP client cannot be built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> RateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RateError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ExchangeRateProvider for HttpRateProvider {
    async fn usd_rate(&self, currency: Currency) -> RateResult<Decimal> {
        if currency == Currency::Usd {
            return Ok(Decimal::ONE);
        }

        let url = format!("{}/latest/USD", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RateError::Timeout
                } else {
                    RateError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Http {
                status: status.as_u16(),
            });
        }

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::Malformed(e.to_string()))?;

        let rate = body
            .rates
            .get(currency.code())
            .copied()
            .ok_or_else(|| RateError::Malformed(format!("no rate for {}", currency.code())))?;

        if rate <= Decimal::ZERO {
            return Err(RateError::Malformed(format!(
                "non-positive rate for {}: {rate}",
                currency.code()
            )));
        }

        Ok(rate)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn usd_short_circuits_to_one() {
        // No server needed: USD never hits the network.
        let provider = HttpRateProvider::new("http://127.0.0.1:1").unwrap();
        let rate = provider.usd_rate(Currency::Usd).await.unwrap();
        assert_eq!(rate, Decimal::ONE);
    }

    #[tokio::test]
    async fn parses_rate_from_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "rates": { "NGN": 1550.0, "KES": 129.5 }
            })))
            .mount(&server)
            .await;

        let provider = HttpRateProvider::new(server.uri()).unwrap();
        let rate = provider.usd_rate(Currency::Ngn).await.unwrap();
        assert_eq!(rate, Decimal::from(1550));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest/USD"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let provider = HttpRateProvider::new(server.uri()).unwrap();
        let err = provider.usd_rate(Currency::Ngn).await.unwrap_err();
        assert!(matches!(err, RateError::Http { status: 503 }));
    }

    #[tokio::test]
    async fn missing_currency_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "rates": { "EUR": 0.9 }
            })))
            .mount(&server)
            .await;

        let provider = HttpRateProvider::new(server.uri()).unwrap();
        let err = provider.usd_rate(Currency::Ngn).await.unwrap_err();
        assert!(matches!(err, RateError::Malformed(_)));
    }

    #[tokio::test]
    async fn non_positive_rate_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "rates": { "NGN": 0 }
            })))
            .mount(&server)
            .await;

        let provider = HttpRateProvider::new(server.uri()).unwrap();
        let err = provider.usd_rate(Currency::Ngn).await.unwrap_err();
        assert!(matches!(err, RateError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let provider = HttpRateProvider::new("http://127.0.0.1:1").unwrap();
        let err = provider.usd_rate(Currency::Ngn).await.unwrap_err();
        assert!(matches!(err, RateError::Network(_) | RateError::Timeout));
    }
}
