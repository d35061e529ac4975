//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response carrying the result of an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    /// Operation result
    pub result: f64,
}
