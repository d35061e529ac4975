use thiserror::Error;

/// Errors raised by arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Calculation error: {message}")]
    Calculation { message: String },
}

impl DomainError {
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::DivisionByZero
    }

    #[must_use]
    pub fn calculation(message: impl Into<String>) -> Self {
        Self::Calculation {
            message: message.into(),
        }
    }
}
