//! REST DTOs for users module

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// REST representation of a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// User id (primary key)
    pub id: i64,
    /// Display name
    pub name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserNameReq {
    /// Name to store for the user
    pub name: String,
}

/// Confirmation returned by delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
