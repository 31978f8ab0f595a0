//! # Generated Protobuf Bindings
//!
//! Compile-time-generated types for the gRPC surfaces. The schemas live in
//! `proto/` and are compiled by the build script; nothing is loaded at
//! runtime.

/// Currency conversion protocol (package `currency.v1`).
#[allow(missing_docs)]
pub mod currency_v1 {
    tonic::include_proto!("currency.v1");
}

/// gRPC health checking protocol (package `grpc.health.v1`).
#[allow(missing_docs)]
pub mod health_v1 {
    tonic::include_proto!("grpc.health.v1");
}

pub use currency_v1::*;
