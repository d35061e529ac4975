//! REST handlers for calculator module
//!
//! Operands arrive as path segments. A segment that does not parse as a
//! number is answered with a 400 Problem instead of axum's plain-text
//! rejection.

use std::sync::Arc;

use api_problem::{ApiResult, Problem, invalid_path};
use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use axum::http::Uri;
use axum::{Extension, Json};

use crate::domain::DomainError;
use crate::domain::Service;
use crate::domain::service::ensure_finite;

use super::dto::CalculationResponse;
use super::error::domain_error_to_problem;

/// Two real operands: `/{a}/{b}`.
pub type OperandsPath = Result<Path<(f64, f64)>, PathRejection>;

/// Real base and integer exponent: `/{a}/{b}`.
pub type PowerPath = Result<Path<(f64, i32)>, PathRejection>;

fn operands<T>(path: Result<Path<T>, PathRejection>, uri: &Uri) -> ApiResult<T> {
    path.map(|Path(values)| values)
        .map_err(|rejection| invalid_path(&rejection, uri.path()))
}

fn respond(result: Result<f64, DomainError>, uri: &Uri) -> ApiResult<Json<CalculationResponse>> {
    let result = result
        .and_then(ensure_finite)
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(CalculationResponse { result }))
}

/// Handler for GET /calculator/sum/{a}/{b}
#[utoipa::path(
    get,
    path = "/calculator/sum/{a}/{b}",
    tag = "calculator",
    params(
        ("a" = f64, Path, description = "First number to sum"),
        ("b" = f64, Path, description = "Second number to sum"),
    ),
    responses(
        (status = 200, description = "Sum of the two numbers", body = CalculationResponse),
        (status = 400, description = "Invalid operands or calculation error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn sum(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    path: OperandsPath,
) -> ApiResult<Json<CalculationResponse>> {
    let (a, b) = operands(path, &uri)?;
    respond(Ok(svc.sum(a, b)), &uri)
}

/// Handler for GET /calculator/subtract/{a}/{b}
#[utoipa::path(
    get,
    path = "/calculator/subtract/{a}/{b}",
    tag = "calculator",
    params(
        ("a" = f64, Path, description = "Number to subtract from"),
        ("b" = f64, Path, description = "Number to subtract"),
    ),
    responses(
        (status = 200, description = "Difference of the two numbers", body = CalculationResponse),
        (status = 400, description = "Invalid operands or calculation error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn subtract(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    path: OperandsPath,
) -> ApiResult<Json<CalculationResponse>> {
    let (a, b) = operands(path, &uri)?;
    respond(Ok(svc.subtract(a, b)), &uri)
}

/// Handler for GET /calculator/multiply/{a}/{b}
#[utoipa::path(
    get,
    path = "/calculator/multiply/{a}/{b}",
    tag = "calculator",
    params(
        ("a" = f64, Path, description = "First factor"),
        ("b" = f64, Path, description = "Second factor"),
    ),
    responses(
        (status = 200, description = "Product of the two numbers", body = CalculationResponse),
        (status = 400, description = "Invalid operands or calculation error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn multiply(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    path: OperandsPath,
) -> ApiResult<Json<CalculationResponse>> {
    let (a, b) = operands(path, &uri)?;
    respond(Ok(svc.multiply(a, b)), &uri)
}

/// Handler for GET /calculator/divide/{a}/{b}
///
/// A zero divisor yields a 400 whose detail names the division by zero.
#[utoipa::path(
    get,
    path = "/calculator/divide/{a}/{b}",
    tag = "calculator",
    params(
        ("a" = f64, Path, description = "Dividend"),
        ("b" = f64, Path, description = "Divisor"),
    ),
    responses(
        (status = 200, description = "Quotient of the two numbers", body = CalculationResponse),
        (status = 400, description = "Division by zero, invalid operands or calculation error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn divide(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    path: OperandsPath,
) -> ApiResult<Json<CalculationResponse>> {
    let (a, b) = operands(path, &uri)?;
    respond(svc.divide(a, b), &uri)
}

/// Handler for GET /calculator/power/{a}/{b}
#[utoipa::path(
    get,
    path = "/calculator/power/{a}/{b}",
    tag = "calculator",
    params(
        ("a" = f64, Path, description = "Base"),
        ("b" = i32, Path, description = "Integer exponent"),
    ),
    responses(
        (status = 200, description = "Base raised to the exponent", body = CalculationResponse),
        (status = 400, description = "Invalid operands or calculation error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn power(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    path: PowerPath,
) -> ApiResult<Json<CalculationResponse>> {
    let (a, b) = operands(path, &uri)?;
    respond(Ok(svc.power(a, b)), &uri)
}
