//! HTTP API: router, extractors, and request/response mapping.

pub mod app;
pub mod middleware;
