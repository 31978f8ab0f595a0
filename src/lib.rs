//! # Currency Conversion Service
//!
//! Converts monetary amounts between currencies, exposed over a binary gRPC
//! interface and an internal HTTP interface, with a protocol bridge proxying
//! gRPC calls to the HTTP layer.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Domain Layer** (`domain`): Money representation, currency codes, and
//!   the carry normalization rule
//! - **Application Layer** (`application`): The conversion engine and the
//!   fail-open protocol bridge
//! - **Infrastructure Layer** (`infrastructure`): Rate providers (live and
//!   static) and the bridge's HTTP client for the engine
//! - **API Layer** (`api`): gRPC and REST interfaces
//!
//! ## Degradation Policy
//!
//! The bridge degrades rather than fails: when the downstream engine or the
//! external rate source is unavailable, `Convert` returns the original
//! amount unchanged and `GetSupportedCurrencies` returns an empty list.
//! RPC callers never observe a downstream error; they may observe a
//! conversion that silently did not occur.
//!
//! ## Example
//!
//! ```rust,ignore
//! use currency_service::application::conversion::ConversionService;
//! use currency_service::infrastructure::rates::StaticRateProvider;
//! use std::sync::Arc;
//!
//! let provider = Arc::new(StaticRateProvider::from_embedded()?);
//! let service = ConversionService::new(provider);
//! let converted = service.convert(&amount, &target).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
