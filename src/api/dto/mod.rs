//! Wire shapes of the HTTP API.

pub mod exercise_dto;
pub mod log_dto;
pub mod user_dto;

pub use exercise_dto::CreateExerciseRequest;
pub use log_dto::{ExerciseLogResponse, LogQueryParams};
pub use user_dto::CreateUserRequest;
