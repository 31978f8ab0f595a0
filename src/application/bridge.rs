//! # Currency Bridge
//!
//! Degradation policy between the RPC surface and the conversion engine.
//!
//! The bridge forwards conversion and enumeration requests to the engine
//! through a [`ConversionBackend`] and applies a fail-open policy: a
//! downstream failure never surfaces as an error to the RPC caller. A failed
//! conversion falls back to the original, unconverted amount; a failed
//! enumeration falls back to an empty list. Callers may therefore observe a
//! conversion that silently did not occur.
//!
//! The policy is visible in the type system: [`BridgeOutcome`] distinguishes
//! a fresh downstream result from a fallback, even though the RPC layer
//! flattens both into a successful response.

use crate::application::error::ApplicationResult;
use crate::domain::currency::CurrencyCode;
use crate::domain::money::Money;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Downstream interface the bridge forwards to.
///
/// The production implementation is an HTTP client against the conversion
/// engine; tests substitute failing or canned backends.
#[async_trait]
pub trait ConversionBackend: Send + Sync + fmt::Debug {
    /// Converts an amount into the target currency.
    async fn convert(&self, from: &Money, to_code: &CurrencyCode) -> ApplicationResult<Money>;

    /// Returns the currency codes the engine supports.
    async fn supported_currencies(&self) -> ApplicationResult<Vec<String>>;
}

/// Outcome of a bridged call.
///
/// `Fresh` carries a result the downstream actually produced; `Fallback`
/// carries the degraded substitute along with the reason the downstream
/// call failed. Both look identical to the external caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeOutcome<T> {
    /// The downstream call succeeded.
    Fresh(T),
    /// The downstream call failed and a fallback value is served instead.
    Fallback {
        /// The degraded substitute value.
        value: T,
        /// Why the downstream call failed.
        reason: String,
    },
}

impl<T> BridgeOutcome<T> {
    /// Consumes the outcome, returning the carried value.
    pub fn into_inner(self) -> T {
        match self {
            Self::Fresh(value) | Self::Fallback { value, .. } => value,
        }
    }

    /// Returns a reference to the carried value.
    pub fn value(&self) -> &T {
        match self {
            Self::Fresh(value) | Self::Fallback { value, .. } => value,
        }
    }

    /// Returns true if this outcome is a degraded fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Applies the fail-open policy over a [`ConversionBackend`].
///
/// Stateless per request; no session or connection state is retained here
/// beyond the backend's own connection pool.
#[derive(Debug)]
pub struct CurrencyBridge {
    backend: Arc<dyn ConversionBackend>,
}

impl CurrencyBridge {
    /// Creates a new bridge over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn ConversionBackend>) -> Self {
        Self { backend }
    }

    /// Forwards a conversion, falling back to the original amount.
    ///
    /// On any downstream failure the caller receives `from` unchanged, a
    /// syntactically valid amount in the original currency, rather than an
    /// error.
    pub async fn convert(&self, from: Money, to_code: &CurrencyCode) -> BridgeOutcome<Money> {
        match self.backend.convert(&from, to_code).await {
            Ok(converted) => BridgeOutcome::Fresh(converted),
            Err(err) => {
                warn!("conversion request failed, returning original amount: {err}");
                BridgeOutcome::Fallback {
                    value: from,
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Forwards an enumeration, falling back to an empty list.
    pub async fn supported_currencies(&self) -> BridgeOutcome<Vec<String>> {
        match self.backend.supported_currencies().await {
            Ok(codes) => BridgeOutcome::Fresh(codes),
            Err(err) => {
                warn!("supported currency request failed, returning empty list: {err}");
                BridgeOutcome::Fallback {
                    value: Vec::new(),
                    reason: err.to_string(),
                }
            }
        }
    }
}
