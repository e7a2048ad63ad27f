//! HTTP application wiring (Axum router).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON shaping helpers
//! - `extract.rs`: extractors that run field validation before handlers
//! - `errors.rs`: consistent error responses

use axum::Router;
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    routes::router().layer(
        ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)),
    )
}
