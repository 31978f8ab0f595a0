//! # Currency Conversion Service
//!
//! Main entry point: hosts the conversion engine's HTTP server and the
//! protocol bridge's gRPC server.

use currency_service::api::grpc::proto::currency_v1::currency_service_server::CurrencyServiceServer;
use currency_service::api::grpc::proto::health_v1::health_server::HealthServer;
use currency_service::api::grpc::service::{CurrencyServiceImpl, HealthServiceImpl};
use currency_service::api::rest::{AppState, create_router};
use currency_service::application::bridge::CurrencyBridge;
use currency_service::application::conversion::ConversionService;
use currency_service::config::{AppConfig, LogFormat, RateSourceMode};
use currency_service::infrastructure::engine_client::{EngineClient, EngineClientConfig};
use currency_service::infrastructure::rates::{
    LiveRateConfig, LiveRateProvider, RateProvider, StaticRateProvider, SupportedCurrencies,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    info!(
        "Starting {} v{}",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );

    // Conversion engine over its HTTP interface
    let rates: Arc<dyn RateProvider> = match config.rates.mode {
        RateSourceMode::Live => Arc::new(LiveRateProvider::new(
            LiveRateConfig::new()
                .with_base_url(&config.rates.base_url)
                .with_timeout_ms(config.rates.timeout_ms),
        )?),
        RateSourceMode::Static => Arc::new(StaticRateProvider::from_embedded()?),
    };

    let state = Arc::new(AppState {
        converter: Arc::new(ConversionService::new(rates)),
        currencies: Arc::new(SupportedCurrencies::from_embedded()?),
    });

    let http_addr = config.http.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    info!("Starting HTTP server on {http_addr}...");
    let http_server = tokio::spawn(axum::serve(listener, create_router(state)).into_future());

    // Protocol bridge over its gRPC interface
    let backend = EngineClient::new(
        EngineClientConfig::new(&config.downstream.base_url)
            .with_timeout_ms(config.downstream.timeout_ms),
    )?;
    let bridge = Arc::new(CurrencyBridge::new(Arc::new(backend)));

    let grpc_addr = config.grpc.socket_addr()?;
    info!("Starting gRPC server on {grpc_addr}...");
    let grpc_server = tokio::spawn(
        tonic::transport::Server::builder()
            .add_service(CurrencyServiceServer::new(CurrencyServiceImpl::new(bridge)))
            .add_service(HealthServer::new(HealthServiceImpl))
            .serve(grpc_addr),
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutting down {}", config.service_name);

    http_server.abort();
    grpc_server.abort();

    Ok(())
}

/// Initializes the tracing subscriber from the logging configuration.
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
