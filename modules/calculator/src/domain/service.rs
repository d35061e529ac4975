//! Domain service for calculator
//!
//! Contains the core arithmetic. Every operation works on `f64` with native
//! floating-point semantics; only division has a failure mode of its own.

use tracing::debug;

use super::error::DomainError;

/// Domain service that performs arithmetic operations.
///
/// Holds no state; the REST layer shares a single instance behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct Service;

#[allow(clippy::unused_self)] // Stateless service keeps a method-style API for handlers
impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers.
    #[must_use]
    pub fn sum(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply `a` by `b`.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisionByZero`] when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(DomainError::division_by_zero());
        }
        Ok(a / b)
    }

    /// Raise `a` to the integer power `b`.
    #[must_use]
    pub fn power(&self, a: f64, b: i32) -> f64 {
        debug!(a, b, "performing exponentiation");
        a.powi(b)
    }
}

/// Reject results that JSON cannot represent (NaN and infinities).
///
/// # Errors
/// Returns [`DomainError::Calculation`] for non-finite values.
pub fn ensure_finite(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::calculation("result is not a finite number"))
    }
}
