//! # gRPC Currency Service
//!
//! gRPC service implementation using tonic.
//!
//! This module provides the [`CurrencyServiceImpl`], a thin forwarder from
//! the binary RPC surface to the conversion engine's HTTP interface via the
//! [`CurrencyBridge`], and the [`HealthServiceImpl`] liveness responder.
//!
//! Downstream failures never surface as RPC errors here: the bridge's
//! fail-open policy substitutes the original amount (for `Convert`) or an
//! empty list (for `GetSupportedCurrencies`), and this layer flattens both
//! outcomes into successful responses.
//!
//! # Examples
//!
//! ```ignore
//! use currency_service::api::grpc::service::CurrencyServiceImpl;
//! use currency_service::api::grpc::proto::currency_v1::currency_service_server::CurrencyServiceServer;
//! use tonic::transport::Server;
//!
//! let service = CurrencyServiceImpl::new(bridge);
//! Server::builder()
//!     .add_service(CurrencyServiceServer::new(service))
//!     .serve(addr)
//!     .await?;
//! ```

use crate::api::grpc::conversions::ConversionError;
use crate::api::grpc::proto::{
    self, CurrencyConversionRequest, Empty, GetSupportedCurrenciesResponse,
    currency_service_server::CurrencyService,
    health_v1::{
        HealthCheckRequest, HealthCheckResponse, health_check_response::ServingStatus,
        health_server::Health,
    },
};
use crate::application::bridge::CurrencyBridge;
use crate::domain::currency::CurrencyCode;
use crate::domain::money::Money;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

/// gRPC currency service implementation.
///
/// Implements the `CurrencyService` trait generated from the protobuf
/// definitions; every method forwards through the bridge.
#[derive(Debug)]
pub struct CurrencyServiceImpl {
    bridge: Arc<CurrencyBridge>,
}

impl CurrencyServiceImpl {
    /// Creates a new currency service over the given bridge.
    #[must_use]
    pub fn new(bridge: Arc<CurrencyBridge>) -> Self {
        Self { bridge }
    }
}

#[tonic::async_trait]
impl CurrencyService for CurrencyServiceImpl {
    /// Lists the supported currencies.
    #[instrument(skip(self, _request))]
    async fn get_supported_currencies(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<GetSupportedCurrenciesResponse>, Status> {
        info!("Getting supported currencies...");

        let outcome = self.bridge.supported_currencies().await;

        Ok(Response::new(GetSupportedCurrenciesResponse {
            currency_codes: outcome.into_inner(),
        }))
    }

    /// Converts between currencies.
    #[instrument(skip(self, request), fields(to_code))]
    async fn convert(
        &self,
        request: Request<CurrencyConversionRequest>,
    ) -> Result<Response<proto::Money>, Status> {
        let req = request.into_inner();
        tracing::Span::current().record("to_code", req.to_code.as_str());

        info!("received conversion request");

        let from: Money = req
            .from
            .ok_or_else(|| Status::invalid_argument("from is required"))?
            .try_into()
            .map_err(|e: ConversionError| Status::invalid_argument(e.to_string()))?;

        let to_code = CurrencyCode::new(&req.to_code)
            .map_err(|e| Status::invalid_argument(format!("invalid to_code: {e}")))?;

        let outcome = self.bridge.convert(from, &to_code).await;

        Ok(Response::new(proto::Money::from(outcome.into_inner())))
    }
}

/// Static liveness responder for the gRPC health protocol.
///
/// Always reports serving, independent of downstream health. This is a
/// liveness probe, not a readiness probe.
#[derive(Debug, Default)]
pub struct HealthServiceImpl;

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    /// Endpoint for health checks.
    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse {
            status: ServingStatus::Serving as i32,
        }))
    }
}
