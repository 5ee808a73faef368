//! User handlers: create and list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::CreateUserRequest;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};
use crate::store::User;

/// `POST /users` — Create a new user.
///
/// # Errors
///
/// Returns [`TrackerError::Validation`] when the body carries no usable
/// `username`, or [`TrackerError::Storage`] when the insert fails.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    summary = "Create a new user",
    description = "Stores a user under the trimmed `username` and returns the stored row with its assigned id.",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User stored", body = User),
        (status = 400, description = "Invalid or missing username", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, TrackerError> {
    let username = parse_username(body)?;
    let user = state.store.create_user(&username).await?;

    tracing::info!(id = user.id, username = %user.username, "user created");
    Ok(Json(user))
}

/// `GET /users` — List all users.
///
/// # Errors
///
/// Returns [`TrackerError::Storage`] when the read fails.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    summary = "List users",
    description = "Returns every stored user in insertion order.",
    responses(
        (status = 200, description = "All users", body = [User]),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TrackerError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// Composes the user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}

// ── Body Parsing Helpers ────────────────────────────────────────────────

/// Pulls a trimmed, non-blank username out of a create-user body.
///
/// Bodies arrive as plain [`serde_json::Value`] so that a missing field
/// or a wrong type maps to the service's own 400 response instead of an
/// extractor rejection.
fn parse_username(body: serde_json::Value) -> Result<String, TrackerError> {
    let request: CreateUserRequest = serde_json::from_value(body)
        .map_err(|_| TrackerError::validation("Invalid or missing username"))?;

    let username = request.username.trim();
    if username.is_empty() {
        return Err(TrackerError::validation("Invalid or missing username"));
    }
    Ok(username.to_string())
}
