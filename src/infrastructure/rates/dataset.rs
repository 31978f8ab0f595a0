//! # Static Rate Provider
//!
//! Rate provider backed by a euro-reference dataset embedded at compile time.
//!
//! The dataset is the European Central Bank reference table: a map from
//! currency code to its value in euro terms. Cross rates are derived as
//! `rate[target] / rate[base]`. The same dataset directory also carries the
//! ordered list of supported currency codes served by the enumeration
//! endpoint.
//!
//! # Examples
//!
//! ```
//! use currency_service::infrastructure::rates::StaticRateProvider;
//!
//! let provider = StaticRateProvider::from_embedded().unwrap();
//! ```

use crate::domain::currency::CurrencyCode;
use crate::infrastructure::rates::{RateError, RateProvider, RateResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Euro-reference conversion table, embedded at build time.
const CONVERSION_TABLE: &str = include_str!("../../../data/currency_conversion.json");

/// Ordered list of supported currency codes, embedded at build time.
const SUPPORTED_CURRENCIES: &str = include_str!("../../../data/supported_currencies.json");

/// Rate provider reading from a preloaded euro-reference table.
///
/// Used as the offline rate source and for tests; the table is parsed once
/// at construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    /// Euro value of one unit of each currency.
    rates: HashMap<String, f64>,
}

impl StaticRateProvider {
    /// Creates a provider from an explicit rate table.
    #[must_use]
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Creates a provider from the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Malformed` if the embedded dataset cannot be
    /// parsed.
    pub fn from_embedded() -> RateResult<Self> {
        let rates: HashMap<String, f64> =
            serde_json::from_str(CONVERSION_TABLE).map_err(|e| RateError::malformed(e.to_string()))?;
        Ok(Self::new(rates))
    }

    /// Returns the euro-reference rate for a code.
    fn reference_rate(&self, code: &CurrencyCode) -> RateResult<f64> {
        self.rates
            .get(code.as_str())
            .copied()
            .ok_or_else(|| RateError::unsupported(code.as_str()))
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn factor(&self, base: &CurrencyCode, target: &CurrencyCode) -> RateResult<f64> {
        let base_rate = self.reference_rate(base)?;
        let target_rate = self.reference_rate(target)?;

        if base_rate <= 0.0 {
            return Err(RateError::malformed(format!(
                "non-positive reference rate for {base}: {base_rate}"
            )));
        }

        Ok(target_rate / base_rate)
    }
}

/// The ordered, read-only list of supported currency codes.
///
/// Loaded once at startup and shared immutably; never mutated at request
/// time.
#[derive(Debug, Clone)]
pub struct SupportedCurrencies {
    codes: Vec<String>,
}

impl SupportedCurrencies {
    /// Creates a list from explicit codes.
    #[must_use]
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// Creates the list from the embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns `RateError::Malformed` if the embedded dataset cannot be
    /// parsed.
    pub fn from_embedded() -> RateResult<Self> {
        let codes: Vec<String> = serde_json::from_str(SUPPORTED_CURRENCIES)
            .map_err(|e| RateError::malformed(e.to_string()))?;
        Ok(Self::new(codes))
    }

    /// Returns the codes in their defined order.
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Returns the number of supported currencies.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn embedded_table_parses() {
        let provider = StaticRateProvider::from_embedded().unwrap();
        assert!(provider.rates.contains_key("EUR"));
        assert!(provider.rates.contains_key("USD"));
    }

    #[tokio::test]
    async fn euro_reference_rate_is_one() {
        let provider = StaticRateProvider::from_embedded().unwrap();
        let factor = provider.factor(&code("EUR"), &code("EUR")).await.unwrap();
        assert!((factor - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn identity_factor_for_any_pair() {
        let provider = StaticRateProvider::from_embedded().unwrap();
        let factor = provider.factor(&code("JPY"), &code("JPY")).await.unwrap();
        assert!((factor - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn cross_rate_uses_euro_reference() {
        let provider = StaticRateProvider::new(HashMap::from([
            ("EUR".to_string(), 1.0),
            ("USD".to_string(), 2.0),
            ("GBP".to_string(), 0.5),
        ]));

        // 1 USD = 0.5 EUR = 0.25 GBP
        let factor = provider.factor(&code("USD"), &code("GBP")).await.unwrap();
        assert!((factor - 0.25).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unknown_base_is_unsupported() {
        let provider = StaticRateProvider::from_embedded().unwrap();
        let result = provider.factor(&code("XXX"), &code("EUR")).await;
        assert!(matches!(result, Err(RateError::UnsupportedCurrency(_))));
    }

    #[tokio::test]
    async fn unknown_target_is_unsupported() {
        let provider = StaticRateProvider::from_embedded().unwrap();
        let result = provider.factor(&code("EUR"), &code("XXX")).await;
        assert!(matches!(result, Err(RateError::UnsupportedCurrency(_))));
    }

    #[test]
    fn supported_currencies_load_in_order() {
        let currencies = SupportedCurrencies::from_embedded().unwrap();
        assert!(!currencies.is_empty());
        // The euro leads the reference table.
        assert_eq!(currencies.codes()[0], "EUR");
        assert!(currencies.codes().iter().any(|c| c == "USD"));
    }

    #[test]
    fn supported_currencies_are_valid_codes() {
        let currencies = SupportedCurrencies::from_embedded().unwrap();
        for raw in currencies.codes() {
            assert!(CurrencyCode::new(raw).is_ok(), "invalid code in dataset: {raw}");
        }
    }
}
