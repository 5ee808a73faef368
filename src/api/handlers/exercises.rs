//! Exercise handlers: record a session, read a user's log.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateExerciseRequest, ExerciseLogResponse, LogQueryParams};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};
use crate::store::{Exercise, LogQuery};

/// `POST /users/{user_id}/exercises` — Record an exercise.
///
/// # Errors
///
/// Returns [`TrackerError::Validation`] on a malformed id or body,
/// [`TrackerError::UserNotFound`] when the user does not exist, or
/// [`TrackerError::Storage`] when the insert fails.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/exercises",
    tag = "Exercises",
    summary = "Record an exercise",
    description = "Stores an exercise session for the addressed user. The `description` is trimmed, `duration` must be a non-zero integer number of minutes, and `date` is a `YYYY-MM-DD` string.",
    params(
        ("user_id" = String, Path, description = "Id of the exercising user"),
    ),
    request_body = CreateExerciseRequest,
    responses(
        (status = 200, description = "Exercise stored", body = Exercise),
        (status = 400, description = "Invalid user id or missing fields", body = ErrorResponse),
        (status = 404, description = "User does not exist", body = ErrorResponse),
    )
)]
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, TrackerError> {
    let user_id = parse_user_id(&user_id)?;
    let request = parse_exercise_body(body)?;

    let exercise = state
        .store
        .create_exercise(user_id, &request.description, request.duration, &request.date)
        .await?;

    tracing::info!(id = exercise.id, user_id, "exercise recorded");
    Ok(Json(exercise))
}

/// `GET /users/{user_id}/logs` — Read a user's exercise log.
///
/// # Errors
///
/// Returns [`TrackerError::Validation`] on a malformed id, or
/// [`TrackerError::Storage`] when a query fails.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/logs",
    tag = "Exercises",
    summary = "Read an exercise log",
    description = "Returns one page of the user's exercises, optionally bounded by inclusive `from`/`to` dates, together with the total number of matches ignoring pagination.",
    params(
        ("user_id" = String, Path, description = "Id of the user whose log to read"),
        LogQueryParams,
    ),
    responses(
        (status = 200, description = "One page of the log", body = ExerciseLogResponse),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
    )
)]
pub async fn exercise_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> Result<impl IntoResponse, TrackerError> {
    let user_id = parse_user_id(&user_id)?;
    let query = LogQuery::from(params);
    tracing::debug!(user_id, ?query, "log query");

    let (logs, count) = state.store.exercise_log(user_id, &query).await?;
    Ok(Json(ExerciseLogResponse {
        user_id,
        logs,
        count,
    }))
}

/// Composes the exercise routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/exercises", post(add_exercise))
        .route("/users/{user_id}/logs", get(exercise_log))
}

// ── Request Parsing Helpers ─────────────────────────────────────────────

/// Parses the path segment into a user id.
///
/// Runs before anything touches the store, so a garbage id never causes
/// a database query.
fn parse_user_id(raw: &str) -> Result<i64, TrackerError> {
    raw.parse()
        .map_err(|_| TrackerError::validation("Invalid user ID"))
}

/// Parses and normalizes a record-exercise body.
///
/// The description is trimmed before the blank check; duration must be a
/// JSON integer other than zero (fractions and strings are rejected) and
/// the date string must be non-empty.
fn parse_exercise_body(body: serde_json::Value) -> Result<CreateExerciseRequest, TrackerError> {
    let mut request: CreateExerciseRequest = serde_json::from_value(body)
        .map_err(|_| TrackerError::validation("Missing required fields"))?;

    request.description = request.description.trim().to_string();
    if request.description.is_empty() || request.duration == 0 || request.date.is_empty() {
        return Err(TrackerError::validation("Missing required fields"));
    }
    Ok(request)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_user_id_parses() {
        let Ok(user_id) = parse_user_id("42") else {
            panic!("numeric id rejected");
        };
        assert_eq!(user_id, 42);
    }

    #[test]
    fn non_numeric_user_id_is_rejected() {
        let Err(TrackerError::Validation(message)) = parse_user_id("abc") else {
            panic!("non-numeric id accepted");
        };
        assert_eq!(message, "Invalid user ID");
    }

    #[test]
    fn fractional_user_id_is_rejected() {
        assert!(parse_user_id("4.2").is_err());
    }

    #[test]
    fn valid_body_is_normalized() {
        let body = json!({"description": "  morning run  ", "duration": 30, "date": "2024-01-15"});
        let Ok(request) = parse_exercise_body(body) else {
            panic!("valid body rejected");
        };
        assert_eq!(request.description, "morning run");
        assert_eq!(request.duration, 30);
        assert_eq!(request.date, "2024-01-15");
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = json!({"description": "run", "duration": 30});
        let Err(TrackerError::Validation(message)) = parse_exercise_body(body) else {
            panic!("incomplete body accepted");
        };
        assert_eq!(message, "Missing required fields");
    }

    #[test]
    fn zero_duration_is_rejected() {
        let body = json!({"description": "run", "duration": 0, "date": "2024-01-15"});
        assert!(parse_exercise_body(body).is_err());
    }

    #[test]
    fn non_integer_duration_is_rejected() {
        let body = json!({"description": "run", "duration": "thirty", "date": "2024-01-15"});
        assert!(parse_exercise_body(body).is_err());
    }

    #[test]
    fn negative_duration_is_accepted() {
        let body = json!({"description": "run", "duration": -5, "date": "2024-01-15"});
        let Ok(request) = parse_exercise_body(body) else {
            panic!("negative duration rejected");
        };
        assert_eq!(request.duration, -5);
    }

    #[test]
    fn blank_description_is_rejected() {
        let body = json!({"description": "   ", "duration": 30, "date": "2024-01-15"});
        assert!(parse_exercise_body(body).is_err());
    }

    #[test]
    fn empty_date_is_rejected() {
        let body = json!({"description": "run", "duration": 30, "date": ""});
        assert!(parse_exercise_body(body).is_err());
    }
}
