//! Wire shapes for recording exercises.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body of `POST /api/users/{user_id}/exercises`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateExerciseRequest {
    /// What was done; must not be blank.
    pub description: String,
    /// Duration in minutes; must be a non-zero integer.
    pub duration: i64,
    /// ISO `YYYY-MM-DD` date string; must not be empty.
    pub date: String,
}
