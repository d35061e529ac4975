use api_problem::{Problem, bad_request, not_found};

use crate::domain::DomainError;

/// Map domain error to RFC9457 Problem
///
/// A duplicate id is a client mistake on create (400); a missing id is 404.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::DuplicateKey { .. } => {
            bad_request(format!("User creation failed: {e}")).with_code("USERS_DUPLICATE_ID")
        }
        DomainError::NotFound { .. } => not_found(e.to_string()).with_code("USERS_NOT_FOUND"),
    };
    problem.with_request_context(instance)
}
