//! Calculator API server
//!
//! Wires the `calculator` and `users` modules into one axum application,
//! with layered configuration, `tracing` logging and signal-driven shutdown.

pub mod app;
pub mod config;
pub mod logging;

pub use app::{AppServices, build_router, openapi_document, serve};
pub use config::AppConfig;
