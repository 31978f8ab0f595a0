//! # Infrastructure Layer
//!
//! External adapters and implementations of application seams.
//!
//! ## Rates
//!
//! Rate provider implementations:
//! - Live provider querying an external exchange-rate API per request
//! - Static provider over a dataset embedded at compile time
//!
//! ## Engine Client
//!
//! The HTTP client the protocol bridge uses to reach the conversion
//! engine's internal interface.

pub mod engine_client;
pub mod rates;
