//! Route registration for users module

use std::sync::Arc;

use api_problem::Problem;
use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::domain::UserStore;

use super::dto::{MessageResponse, UserDto, UserNameReq};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_user,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
    ),
    components(schemas(UserDto, UserNameReq, MessageResponse, Problem)),
    tags((name = "users", description = "In-memory user records keyed by integer id"))
)]
struct UsersApi;

/// Build the users router over the given store.
///
/// Callers own the store; two routers built over two stores share nothing.
#[must_use]
pub fn router(store: Arc<UserStore>) -> Router {
    Router::new()
        .route(
            "/users/{user_id}",
            get(handlers::get_user)
                .post(handlers::create_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(Extension(store))
}

/// OpenAPI fragment describing the users routes.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    UsersApi::openapi()
}
