//! Router assembly and the HTTP serve loop.
//!
//! Middleware order, outermost first:
//! set request id -> propagate request id -> trace -> CORS (optional) -> 413 as Problem
//! -> body limit -> router

use std::sync::Arc;

use anyhow::Context as _;
use api_problem::{
    APPLICATION_PROBLEM_JSON, PAYLOAD_TOO_LARGE_CODE, Problem, not_found, payload_too_large,
};
use axum::http::{HeaderName, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use users::UserStore;
use utoipa::OpenApi;

use crate::config::{AppConfig, ServerConfig};

pub const API_NAME: &str = "Calculator API with User Management";

const REQUEST_ID_HEADER: &str = "x-request-id";

// Stoplight Elements loaded from the CDN, pointed at the served document.
const DOCS_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Calculator API with User Management</title>
  <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>
"#;

#[derive(OpenApi)]
#[openapi(info(
    title = "Calculator API with User Management",
    description = "API for basic calculations and user management"
))]
struct ApiDoc;

/// Services shared by all requests. The server builds one set at startup;
/// tests build their own.
#[derive(Clone, Default)]
pub struct AppServices {
    pub calculator: Arc<calculator::Service>,
    pub users: Arc<UserStore>,
}

/// Merged OpenAPI document for every mounted module.
#[must_use]
pub fn openapi_document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.version = env!("CARGO_PKG_VERSION").to_owned();
    doc.merge(calculator::api::rest::routes::openapi());
    doc.merge(users::api::rest::routes::openapi());
    doc
}

async fn root() -> Json<Value> {
    Json(json!({
        "api_name": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API for mathematical operations and user management",
        "endpoints": {
            "root": "/",
            "documentation": "/docs",
            "openapi": "/openapi.json",
            "calculator": {
                "sum": "/calculator/sum/{a}/{b}",
                "subtract": "/calculator/subtract/{a}/{b}",
                "multiply": "/calculator/multiply/{a}/{b}",
                "divide": "/calculator/divide/{a}/{b}",
                "power": "/calculator/power/{a}/{b}",
            },
            "users": {
                "create": "/users/{user_id}",
                "read": "/users/{user_id}",
                "update": "/users/{user_id}",
                "delete": "/users/{user_id}",
            },
        },
        "status": "online",
    }))
}

async fn openapi_json(
    Extension(doc): Extension<Arc<utoipa::openapi::OpenApi>>,
) -> Json<utoipa::openapi::OpenApi> {
    Json(doc.as_ref().clone())
}

async fn docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

async fn fallback(uri: Uri) -> Problem {
    not_found(format!("No route matches '{}'", uri.path()))
        .with_code("ROUTE_NOT_FOUND")
        .with_request_context(uri.path())
}

/// Build the full application router with the middleware stack applied.
#[must_use]
pub fn build_router(cfg: &ServerConfig, services: AppServices) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs))
        .layer(Extension(Arc::new(openapi_document())))
        .merge(calculator::api::rest::routes::router(services.calculator))
        .merge(users::api::rest::routes::router(services.users))
        .fallback(fallback);

    apply_middleware_stack(router, cfg)
}

/// The body limit layer answers a declared oversize `Content-Length` with a
/// plain-text 413; give it the same Problem body as a body cut off mid-read.
async fn oversized_body_as_problem(uri: Uri, response: Response) -> Response {
    let is_problem = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|ct| ct == APPLICATION_PROBLEM_JSON);
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE || is_problem {
        return response;
    }

    tracing::warn!(path = uri.path(), "request body exceeds the configured limit");
    payload_too_large("Request body too large: length limit exceeded")
        .with_code(PAYLOAD_TOO_LARGE_CODE)
        .with_request_context(uri.path())
        .into_response()
}

fn apply_middleware_stack(router: Router, cfg: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let mut router = router
        .layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes))
        .layer(middleware::map_response(oversized_body_as_problem));
    if cfg.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Resolve once Ctrl+C or (on unix) SIGTERM arrives, naming the signal.
///
/// A listener that cannot be installed never resolves, so the other one
/// still gets a chance to stop the server.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    }
}

/// Bind `server.bind_addr` and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the address is invalid, cannot be bound, or the server fails.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let services = AppServices::default();
    let app = build_router(&config.server, services);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "HTTP server listening");

    let (stopped_by_tx, stopped_by_rx) = tokio::sync::oneshot::channel();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let signal = shutdown_signal().await;
            tracing::info!(signal, addr = %local_addr, "draining connections");
            if stopped_by_tx.send(signal).is_err() {
                tracing::debug!("serve loop exited before the shutdown signal was recorded");
            }
        })
        .await
        .context("HTTP server terminated with an error")?;

    let signal = stopped_by_rx.await.unwrap_or("none");
    tracing::info!(signal, addr = %local_addr, "HTTP server stopped");
    Ok(())
}
