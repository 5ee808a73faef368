//! Wire shapes for user creation.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body of `POST /api/users`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name; surrounding whitespace is trimmed, and a blank
    /// name is rejected.
    pub username: String,
}
