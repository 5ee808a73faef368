//! REST endpoint handlers organized by resource.

pub mod exercises;
pub mod system;
pub mod users;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(users::routes()).merge(exercises::routes())
}
