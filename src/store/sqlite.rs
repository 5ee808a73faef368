//! SQLite implementation of the persistence store.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::TrackerError;
use crate::store::models::{Exercise, LogEntry, LogQuery, User};

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL
)";

const CREATE_EXERCISES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    description TEXT NOT NULL,
    duration INTEGER NOT NULL,
    date TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users (id)
)";

/// SQLite-backed store for users and their exercise logs.
///
/// Cheap to clone: wraps a [`SqlitePool`]. The HTTP layer receives one
/// through [`AppState`](crate::app_state::AppState); tests build isolated
/// instances with [`ExerciseStore::in_memory`].
#[derive(Debug, Clone)]
pub struct ExerciseStore {
    pool: SqlitePool,
}

impl ExerciseStore {
    /// Opens the database file at `path`, creating it if missing, and
    /// applies the idempotent schema.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the file cannot be opened or
    /// the schema cannot be created.
    pub async fn connect(
        path: impl AsRef<Path>,
        max_connections: u32,
    ) -> Result<Self, TrackerError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| TrackerError::storage("Could not connect to database", e))?;

        let store = Self { pool };
        store.init_schema().await?;
        tracing::info!(path = %path.as_ref().display(), "connected to SQLite database");
        Ok(store)
    }

    /// Opens a private in-memory database, for tests.
    ///
    /// The pool is pinned to a single connection that is never reaped:
    /// every SQLite `:memory:` connection is a distinct database, and a
    /// second or reopened connection would see empty tables.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] if the connection or the schema
    /// creation fails.
    pub async fn in_memory() -> Result<Self, TrackerError> {
        let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| TrackerError::storage("Could not connect to database", e))?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Creates both tables unless they already exist.
    async fn init_schema(&self) -> Result<(), TrackerError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| TrackerError::storage("Could not create users table", e))?;
        sqlx::query(CREATE_EXERCISES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| TrackerError::storage("Could not create exercises table", e))?;
        Ok(())
    }

    /// Inserts a user and returns the stored row.
    ///
    /// The caller validates and trims `username` before it gets here; the
    /// store persists it verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] on any write failure.
    pub async fn create_user(&self, username: &str) -> Result<User, TrackerError> {
        let id =
            sqlx::query_scalar::<_, i64>("INSERT INTO users (username) VALUES (?) RETURNING id")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| TrackerError::storage("Could not add user to the database", e))?;

        tracing::debug!(id, username, "user row inserted");
        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    /// Returns all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] on read failure.
    pub async fn list_users(&self) -> Result<Vec<User>, TrackerError> {
        let rows =
            sqlx::query_as::<_, (i64, String)>("SELECT id, username FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    TrackerError::storage("Could not retrieve users from the database", e)
                })?;

        Ok(rows
            .into_iter()
            .map(|(id, username)| User { id, username })
            .collect())
    }

    /// Inserts an exercise for an existing user and returns the stored row.
    ///
    /// The referenced user must exist; an exercise pointing at a missing
    /// user is rejected instead of stored as an orphan.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UserNotFound`] if `user_id` matches no user,
    /// or [`TrackerError::Storage`] on any other failure.
    pub async fn create_exercise(
        &self,
        user_id: i64,
        description: &str,
        duration: i64,
        date: &str,
    ) -> Result<Exercise, TrackerError> {
        let exists = self
            .user_exists(user_id)
            .await
            .map_err(|e| TrackerError::storage("Error adding exercise", e))?;
        if !exists {
            return Err(TrackerError::UserNotFound(user_id));
        }

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO exercises (user_id, description, duration, date) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(user_id)
        .bind(description)
        .bind(duration)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TrackerError::storage("Error adding exercise", e))?;

        tracing::debug!(id, user_id, "exercise row inserted");
        Ok(Exercise {
            id,
            user_id,
            description: description.to_string(),
            duration,
            date: date.to_string(),
        })
    }

    /// Returns one page of a user's exercise log plus the total number of
    /// rows matching the same date filters.
    ///
    /// The total comes from an independent `COUNT(*)` over the same
    /// filters, never from the returned page, so it stays stable across
    /// `limit`/`skip`. An unknown `user_id` yields `(vec![], 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] on read failure.
    pub async fn exercise_log(
        &self,
        user_id: i64,
        query: &LogQuery,
    ) -> Result<(Vec<LogEntry>, i64), TrackerError> {
        let mut sql =
            String::from("SELECT id, description, duration, date FROM exercises WHERE user_id = ?");
        push_date_filters(&mut sql, query);
        sql.push_str(" ORDER BY id LIMIT ? OFFSET ?");

        let mut rows_query = sqlx::query_as::<_, (i64, String, i64, String)>(&sql).bind(user_id);
        if let Some(from) = &query.from {
            rows_query = rows_query.bind(from.as_str());
        }
        if let Some(to) = &query.to {
            rows_query = rows_query.bind(to.as_str());
        }
        let rows = rows_query
            .bind(i64::from(query.limit))
            .bind(i64::from(query.skip))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TrackerError::storage("Error fetching exercises", e))?;

        let logs = rows
            .into_iter()
            .map(|(id, description, duration, date)| LogEntry {
                id,
                description,
                duration,
                date,
            })
            .collect();

        let mut count_sql = String::from("SELECT COUNT(*) FROM exercises WHERE user_id = ?");
        push_date_filters(&mut count_sql, query);

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(user_id);
        if let Some(from) = &query.from {
            count_query = count_query.bind(from.as_str());
        }
        if let Some(to) = &query.to {
            count_query = count_query.bind(to.as_str());
        }
        let count = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TrackerError::storage("Error fetching exercises", e))?;

        Ok((logs, count))
    }

    async fn user_exists(&self, user_id: i64) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

/// Appends the optional inclusive date-range predicates, in bind order.
fn push_date_filters(sql: &mut String, query: &LogQuery) {
    if query.from.is_some() {
        sql.push_str(" AND date >= ?");
    }
    if query.to.is_some() {
        sql.push_str(" AND date <= ?");
    }
}
