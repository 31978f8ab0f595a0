//! # REST API
//!
//! The conversion engine's internal HTTP interface, built on axum.
//!
//! # Modules
//!
//! - [`handlers`]: Request handlers and DTOs
//! - [`routes`]: Router assembly and middleware

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
