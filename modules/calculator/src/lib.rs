//! Calculator Module
//!
//! Stateless arithmetic (sum, subtract, multiply, divide, power) with a REST
//! surface under `/calculator`. The server mounts [`api::rest::routes::router`]
//! and merges [`api::rest::routes::openapi`] into its API document.

pub mod api;
pub mod domain;

pub use domain::{DomainError, Service};
