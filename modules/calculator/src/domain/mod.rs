//! Domain layer for calculator module
//!
//! Contains the arithmetic operations and their error taxonomy.

pub mod error;
pub mod service;

pub use error::DomainError;
pub use service::Service;
