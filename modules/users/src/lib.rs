//! Users Module
//!
//! Keeps user records (`id` -> `name`) in memory and exposes create, read,
//! update and delete over REST under `/users/{id}`.
//!
//! The store is an explicitly owned [`UserStore`]; the server creates one at
//! startup and hands it to [`api::rest::routes::router`]. Nothing is persisted.

pub mod api;
pub mod domain;

pub use domain::{DomainError, User, UserStore};
