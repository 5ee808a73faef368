//! Shared application state handed to every handler.

use crate::store::ExerciseStore;

/// State injected into handlers via [`axum::extract::State`].
///
/// The store is the only shared resource; it wraps a connection pool and
/// is cheap to clone, so no extra `Arc` wrapping is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Persistence store shared by all requests.
    pub store: ExerciseStore,
}

impl AppState {
    /// Wraps an opened store.
    #[must_use]
    pub const fn new(store: ExerciseStore) -> Self {
        Self { store }
    }
}
