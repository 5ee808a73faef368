//! # exercise-tracker
//!
//! REST service for recording users and their exercise sessions, backed
//! by SQLite.
//!
//! Four JSON endpoints cover the whole surface: create a user, list all
//! users, record an exercise for a user, and read a user's exercise log
//! with optional date filtering and pagination. Anything that misses the
//! API falls through to a static client bundle.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AppState (app_state)
//!     │
//!     └── ExerciseStore (store/) ── SQLite file
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod store;
