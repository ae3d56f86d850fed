//! User domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    /// Stored and reported, not used for access decisions
    pub is_admin: bool,
}

/// Data needed to persist a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Login name
    #[serde(rename = "usuario")]
    #[schema(example = "drsilva")]
    pub username: String,
    /// Administrator flag
    #[schema(example = false)]
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}
