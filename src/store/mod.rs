//! Persistence store: SQLite-backed storage for users and exercises.
//!
//! [`ExerciseStore`] owns the two-table relational schema (`users`,
//! `exercises`) and every query the service runs against it. The schema
//! is applied on startup with `CREATE TABLE IF NOT EXISTS` semantics, so
//! opening an existing database file is a no-op.

pub mod models;
pub mod sqlite;

pub use models::{DEFAULT_LOG_LIMIT, Exercise, LogEntry, LogQuery, User};
pub use sqlite::ExerciseStore;
