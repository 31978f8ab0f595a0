//! # Live Rate Provider
//!
//! Rate provider backed by an external exchange-rate REST API.
//!
//! This module provides the [`LiveRateProvider`] which resolves conversion
//! factors by querying `GET <base-url>/latest?base=<code>&symbols=<code>`
//! once per call. The upstream is expected to answer with
//! `{"rates": {"<code>": <factor>}}`.
//!
//! # Examples
//!
//! ```
//! use currency_service::infrastructure::rates::{LiveRateConfig, LiveRateProvider};
//!
//! let config = LiveRateConfig::new()
//!     .with_base_url("https://api.exchangeratesapi.io")
//!     .with_timeout_ms(3000);
//!
//! let provider = LiveRateProvider::new(config).unwrap();
//! ```

use crate::domain::currency::CurrencyCode;
use crate::infrastructure::rates::{RateError, RateProvider, RateResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// Default rate API base URL.
const DEFAULT_BASE_URL: &str = "https://api.exchangeratesapi.io";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Response from the rate API's `latest` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRatesResponse {
    /// Conversion factors keyed by target currency code.
    pub rates: HashMap<String, f64>,
}

/// Configuration for the live rate provider.
///
/// # Examples
///
/// ```
/// use currency_service::infrastructure::rates::LiveRateConfig;
///
/// let config = LiveRateConfig::new().with_timeout_ms(3000);
/// assert_eq!(config.timeout_ms(), 3000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveRateConfig {
    /// Base URL of the rate API.
    base_url: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl LiveRateConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the base URL of the rate API.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout in milliseconds.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Builds the URL of the `latest` rates endpoint.
    #[must_use]
    pub fn latest_url(&self) -> String {
        format!("{}/latest", self.base_url.trim_end_matches('/'))
    }
}

impl Default for LiveRateConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rate provider querying an external exchange-rate API.
///
/// Performs exactly one round trip per [`RateProvider::factor`] call: the
/// query base is fixed to the source currency and a single target symbol is
/// requested.
#[derive(Debug)]
pub struct LiveRateProvider {
    /// Configuration.
    config: LiveRateConfig,
    /// HTTP client for API requests.
    client: reqwest::Client,
}

impl LiveRateProvider {
    /// Creates a new live rate provider.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Internal` if the HTTP client cannot be created.
    pub fn new(config: LiveRateConfig) -> RateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms()))
            .build()
            .map_err(|e| RateError::internal(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LiveRateConfig {
        &self.config
    }

    /// Extracts the factor for `target` from a rates payload.
    ///
    /// # Errors
    ///
    /// Returns `RateError::UnsupportedCurrency` if the payload has no entry
    /// for `target`, or `RateError::Malformed` if the factor is not a finite
    /// non-negative number.
    pub fn extract_factor(payload: &LatestRatesResponse, target: &CurrencyCode) -> RateResult<f64> {
        let factor = payload
            .rates
            .get(target.as_str())
            .copied()
            .ok_or_else(|| RateError::unsupported(target.as_str()))?;

        if !factor.is_finite() || factor < 0.0 {
            return Err(RateError::malformed(format!(
                "factor for {target} is not a finite non-negative number: {factor}"
            )));
        }

        Ok(factor)
    }
}

#[async_trait]
impl RateProvider for LiveRateProvider {
    async fn factor(&self, base: &CurrencyCode, target: &CurrencyCode) -> RateResult<f64> {
        info!(base = %base, target = %target, "querying rate source");

        let response = self
            .client
            .get(self.config.latest_url())
            .query(&[("base", base.as_str()), ("symbols", target.as_str())])
            .send()
            .await
            .map_err(|e| RateError::unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RateError::bad_status(response.status().as_u16()));
        }

        let payload: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::malformed(e.to_string()))?;

        Self::extract_factor(&payload, target)
    }
}
