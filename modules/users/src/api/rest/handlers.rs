use std::sync::Arc;

use api_problem::{ApiResult, Problem, invalid_body, invalid_path};
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::Uri;
use axum::{Extension, Json};
use tracing::info;

use crate::domain::UserStore;

use super::dto::{MessageResponse, UserDto, UserNameReq};
use super::error::domain_error_to_problem;

pub type IdPath = Result<Path<i64>, PathRejection>;
pub type NameBody = Result<Json<UserNameReq>, JsonRejection>;

fn user_id(path: IdPath, uri: &Uri) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| invalid_path(&rejection, uri.path()))
}

fn user_name(body: NameBody, uri: &Uri) -> ApiResult<String> {
    body.map(|Json(req)| req.name)
        .map_err(|rejection| invalid_body(&rejection, uri.path()))
}

#[utoipa::path(
    post,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User ID")),
    request_body = UserNameReq,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "User ID already exists or invalid ID", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Invalid request body", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn create_user(
    uri: Uri,
    Extension(store): Extension<Arc<UserStore>>,
    path: IdPath,
    body: NameBody,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path, &uri)?;
    let name = user_name(body, &uri)?;

    let user = store
        .create(id, name)
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    info!(user_id = id, "Created user");
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User ID to fetch")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Invalid ID", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn get_user(
    uri: Uri,
    Extension(store): Extension<Arc<UserStore>>,
    path: IdPath,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path, &uri)?;
    let user = store
        .read(id)
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User ID to update")),
    request_body = UserNameReq,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid ID", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Invalid request body", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn update_user(
    uri: Uri,
    Extension(store): Extension<Arc<UserStore>>,
    path: IdPath,
    body: NameBody,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path, &uri)?;
    let name = user_name(body, &uri)?;

    info!(user_id = id, "Updating user");

    let user = store
        .update(id, name)
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User ID to delete")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn delete_user(
    uri: Uri,
    Extension(store): Extension<Arc<UserStore>>,
    path: IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let id = user_id(path, &uri)?;

    info!(user_id = id, "Deleting user");

    store
        .delete(id)
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(MessageResponse {
        message: "User successfully deleted".to_owned(),
    }))
}
