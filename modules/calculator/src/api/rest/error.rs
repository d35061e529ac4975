use api_problem::{Problem, bad_request};

use crate::domain::DomainError;

/// Map a calculator domain error to an RFC 9457 Problem.
///
/// Both error kinds surface as 400; they differ in `code` and `detail`.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::DivisionByZero => {
            bad_request(e.to_string()).with_code("CALCULATOR_DIVISION_BY_ZERO")
        }
        DomainError::Calculation { .. } => {
            tracing::warn!(error = %e, "calculation produced an unusable result");
            bad_request(e.to_string()).with_code("CALCULATOR_CALCULATION_ERROR")
        }
    };
    problem.with_request_context(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn division_by_zero_maps_to_bad_request() {
        let p = domain_error_to_problem(&DomainError::DivisionByZero, "/calculator/divide/1/0");
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.code, "CALCULATOR_DIVISION_BY_ZERO");
        assert_eq!(p.detail, "Division by zero is not allowed");
        assert_eq!(p.instance, "/calculator/divide/1/0");
    }

    #[test]
    fn calculation_error_maps_to_bad_request() {
        let p = domain_error_to_problem(
            &DomainError::calculation("result is not a finite number"),
            "/calculator/multiply/1e308/10",
        );
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.code, "CALCULATOR_CALCULATION_ERROR");
        assert!(p.detail.starts_with("Calculation error:"));
        assert_eq!(p.instance, "/calculator/multiply/1e308/10");
    }
}
