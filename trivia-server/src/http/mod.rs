//! HTTP layer
//!
//! Axum router with:
//! - One route per trivia operation plus `/health`
//! - Uniform JSON error bodies, including unmatched paths and verbs
//! - CORS and request tracing

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
