use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("User with id {id} already exists")]
    DuplicateKey { id: i64 },

    #[error("User with id {id} was not found")]
    NotFound { id: i64 },
}

impl DomainError {
    #[must_use]
    pub fn duplicate_key(id: i64) -> Self {
        Self::DuplicateKey { id }
    }

    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}
