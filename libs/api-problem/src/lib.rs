//! RFC 9457 Problem Details for the calculator and users APIs.
//!
//! The [`Problem`] type is a pure data model. With the `axum` feature it becomes
//! directly usable as a response, and with the `utoipa` feature it carries an
//! OpenAPI schema.

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Code carried by every 413 Problem, whichever layer rejected the body.
pub const PAYLOAD_TOO_LARGE_CODE: &str = "PAYLOAD_TOO_LARGE";

/// Result alias used by REST handlers.
pub type ApiResult<T> = Result<T, Problem>;

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "Problem",
        description = "RFC 9457 Problem Details for HTTP APIs"
    )
)]
#[must_use]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    #[cfg_attr(feature = "utoipa", schema(value_type = u16))]
    pub status: StatusCode,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// The request path that produced the problem.
    pub instance: String,
    /// Machine-readable error code, e.g. `USERS_NOT_FOUND`.
    pub code: String,
    /// Trace id of the request span, when one is active.
    pub trace_id: Option<String>,
}

impl Problem {
    /// Create a new Problem with the given status, title, and detail.
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            trace_id: None,
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach the request path and, when available, the current span id.
    #[cfg(feature = "axum")]
    pub fn with_request_context(mut self, instance: impl Into<String>) -> Self {
        self = self.with_instance(instance);
        if let Some(id) = tracing::Span::current().id() {
            self = self.with_trace_id(id.into_u64().to_string());
        }
        self
    }
}

pub fn bad_request(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
}

pub fn not_found(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found", detail)
}

pub fn unprocessable_entity(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
        detail,
    )
}

pub fn payload_too_large(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large", detail)
}

pub fn internal_error(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        detail,
    )
}

/// 400 Problem for a path segment that failed to parse.
#[cfg(feature = "axum")]
pub fn invalid_path(rejection: &axum::extract::rejection::PathRejection, instance: &str) -> Problem {
    tracing::warn!(path = instance, reason = %rejection.body_text(), "rejected path parameters");
    bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
        .with_code("INVALID_PATH_PARAMETER")
        .with_request_context(instance)
}

/// 422 Problem for a JSON body that is missing or does not match the schema,
/// or 413 when the body was cut off by the request size limit.
#[cfg(feature = "axum")]
pub fn invalid_body(rejection: &axum::extract::rejection::JsonRejection, instance: &str) -> Problem {
    tracing::warn!(path = instance, reason = %rejection.body_text(), "rejected request body");
    let problem = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        payload_too_large(format!("Request body too large: {}", rejection.body_text()))
            .with_code(PAYLOAD_TOO_LARGE_CODE)
    } else {
        unprocessable_entity(format!("Invalid request body: {}", rejection.body_text()))
            .with_code("INVALID_REQUEST_BODY")
    };
    problem.with_request_context(instance)
}

/// Axum integration: make Problem directly usable as a response
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        use axum::http::HeaderValue;

        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn problem_builder_pattern() {
        let p = Problem::new(StatusCode::NOT_FOUND, "Not Found", "User 7 was not found")
            .with_code("USERS_NOT_FOUND")
            .with_instance("/users/7")
            .with_trace_id("req-456");

        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.code, "USERS_NOT_FOUND");
        assert_eq!(p.instance, "/users/7");
        assert_eq!(p.trace_id.as_deref(), Some("req-456"));
        assert_eq!(p.type_url, "about:blank");
    }

    #[test]
    fn problem_serializes_status_as_u16() {
        let p = bad_request("Division by zero is not allowed");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["detail"], "Division by zero is not allowed");
    }

    #[test]
    fn problem_deserializes_status_from_u16() {
        let json = r#"{"type":"about:blank","title":"Not Found","status":404,"detail":"missing","instance":"","code":"","trace_id":null}"#;
        let p: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.detail, "missing");
    }

    #[test]
    fn convenience_constructors() {
        assert_eq!(bad_request("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(not_found("x").title, "Not Found");
        assert_eq!(
            unprocessable_entity("x").status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(payload_too_large("x").status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            internal_error("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[cfg(feature = "axum")]
    #[test]
    fn problem_into_response_sets_status_and_content_type() {
        use axum::response::IntoResponse;

        let resp = not_found("gone").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }
}
