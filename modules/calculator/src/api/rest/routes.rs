//! Route registration for calculator module

use std::sync::Arc;

use api_problem::Problem;
use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::domain::Service;

use super::dto::CalculationResponse;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::sum,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::power,
    ),
    components(schemas(CalculationResponse, Problem)),
    tags((name = "calculator", description = "Basic arithmetic over two numbers"))
)]
struct CalculatorApi;

/// Build the calculator router.
///
/// All routes are `GET /calculator/{operation}/{a}/{b}`; the service is
/// shared with handlers through an `Extension`.
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/calculator/sum/{a}/{b}", get(handlers::sum))
        .route("/calculator/subtract/{a}/{b}", get(handlers::subtract))
        .route("/calculator/multiply/{a}/{b}", get(handlers::multiply))
        .route("/calculator/divide/{a}/{b}", get(handlers::divide))
        .route("/calculator/power/{a}/{b}", get(handlers::power))
        .layer(Extension(service))
}

/// OpenAPI fragment describing the calculator routes.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    CalculatorApi::openapi()
}
