//! # Conversion Engine
//!
//! Combines the money model with a rate provider to convert amounts.
//!
//! The engine performs a single synchronous pass per request: one rate
//! lookup, one scale, one normalization. There is no retry loop here;
//! retry policy belongs to the caller tier.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use currency_service::application::conversion::ConversionService;
//! use currency_service::infrastructure::rates::StaticRateProvider;
//!
//! let provider = Arc::new(StaticRateProvider::from_embedded().unwrap());
//! let service = ConversionService::new(provider);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::currency::CurrencyCode;
use crate::domain::money::Money;
use crate::infrastructure::rates::RateProvider;
use std::sync::Arc;
use tracing::{info, instrument};

/// Converts monetary amounts between currencies.
#[derive(Debug)]
pub struct ConversionService {
    rates: Arc<dyn RateProvider>,
}

impl ConversionService {
    /// Creates a new conversion service over the given rate provider.
    #[must_use]
    pub fn new(rates: Arc<dyn RateProvider>) -> Self {
        Self { rates }
    }

    /// Converts an amount into the target currency.
    ///
    /// Fetches the factor for `from.currency_code() -> to_code`, scales
    /// both money fields by it, and normalizes the result. Truncation
    /// toward zero is the rounding policy.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::RateUnavailable` if the rate provider
    /// fails; the error propagates with no retry.
    #[instrument(skip_all, fields(from_code = %from.currency_code(), to_code = %to_code))]
    pub async fn convert(&self, from: &Money, to_code: &CurrencyCode) -> ApplicationResult<Money> {
        info!("requesting conversion rate");

        let factor = self
            .rates
            .factor(from.currency_code(), to_code)
            .await
            .map_err(ApplicationError::from)?;

        let converted = Money::from_raw(to_code.clone(), from.scaled(factor));

        info!("conversion request successful");
        Ok(converted)
    }
}
