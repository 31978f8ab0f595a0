//! # Rate Providers
//!
//! Implementations of the [`RateProvider`] trait for different rate sources.
//!
//! A rate provider resolves the multiplicative factor that converts an
//! amount denominated in a base currency into a target currency. Two
//! implementations exist: a live provider querying an external rate API per
//! request, and a static provider backed by a dataset embedded at compile
//! time.

pub mod dataset;
pub mod live;

use crate::domain::currency::CurrencyCode;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub use dataset::{StaticRateProvider, SupportedCurrencies};
pub use live::{LiveRateConfig, LiveRateProvider};

/// Error type for rate resolution failures.
#[derive(Debug, Error)]
pub enum RateError {
    /// The rate source could not be reached.
    #[error("rate source unreachable: {0}")]
    Unreachable(String),

    /// The rate source answered with a non-success status.
    #[error("rate source returned status {status}")]
    BadStatus {
        /// The HTTP status code returned by the source.
        status: u16,
    },

    /// The rate source answered with a payload that could not be parsed.
    #[error("malformed rate payload: {0}")]
    Malformed(String),

    /// The currency code is not known to the rate source.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Internal provider error.
    #[error("internal rate provider error: {0}")]
    Internal(String),
}

impl RateError {
    /// Creates an unreachable-source error.
    #[must_use]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable(message.into())
    }

    /// Creates a bad-status error.
    #[must_use]
    pub fn bad_status(status: u16) -> Self {
        Self::BadStatus { status }
    }

    /// Creates a malformed-payload error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates an unsupported-currency error.
    #[must_use]
    pub fn unsupported(code: impl Into<String>) -> Self {
        Self::UnsupportedCurrency(code.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for rate provider operations.
pub type RateResult<T> = Result<T, RateError>;

/// Resolves conversion factors between currency pairs.
///
/// A call performs at most one network round trip; concurrent requests are
/// not batched. There is no caching: each conversion fetches a fresh factor.
#[async_trait]
pub trait RateProvider: Send + Sync + fmt::Debug {
    /// Returns the factor converting one `base` unit into `target` units.
    ///
    /// # Errors
    ///
    /// Returns `RateError` if the source is unreachable, answers with a
    /// malformed payload, or does not recognize one of the codes.
    async fn factor(&self, base: &CurrencyCode, target: &CurrencyCode) -> RateResult<f64>;
}
