//! Rows and query arguments handled by the persistence store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page size used for exercise log queries when none is requested.
pub const DEFAULT_LOG_LIMIT: u32 = 10;

/// A row of the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Autoincrement row id.
    pub id: i64,
    /// Display name, stored trimmed of surrounding whitespace.
    pub username: String,
}

/// A row of the `exercises` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Autoincrement row id.
    pub id: i64,
    /// Owning user id, serialized as `userId`.
    pub user_id: i64,
    /// What was done, stored trimmed.
    pub description: String,
    /// Duration in minutes.
    pub duration: i64,
    /// ISO `YYYY-MM-DD` date string.
    pub date: String,
}

/// One entry of a user's exercise log.
///
/// Same shape as [`Exercise`] minus the owning user id, which the log
/// response carries once at the top level instead of per entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    /// Autoincrement row id.
    pub id: i64,
    /// What was done.
    pub description: String,
    /// Duration in minutes.
    pub duration: i64,
    /// ISO `YYYY-MM-DD` date string.
    pub date: String,
}

/// Filter and pagination arguments for
/// [`ExerciseStore::exercise_log`](super::ExerciseStore::exercise_log).
///
/// Date bounds are inclusive and compared lexically; dates are stored as
/// ISO `YYYY-MM-DD` strings, so lexical order equals calendar order.
#[derive(Debug, Clone)]
pub struct LogQuery {
    /// Keep rows with `date >= from`.
    pub from: Option<String>,
    /// Keep rows with `date <= to`.
    pub to: Option<String>,
    /// Maximum number of rows returned.
    pub limit: u32,
    /// Matching rows skipped before the first returned row.
    pub skip: u32,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            limit: DEFAULT_LOG_LIMIT,
            skip: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn exercise_serializes_user_id_as_camel_case() {
        let exercise = Exercise {
            id: 1,
            user_id: 7,
            description: "morning run".to_string(),
            duration: 30,
            date: "2024-01-15".to_string(),
        };

        let Ok(json) = serde_json::to_value(&exercise) else {
            panic!("exercise serialization failed");
        };
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn log_query_defaults_to_first_page_of_ten() {
        let query = LogQuery::default();
        assert_eq!(query.limit, DEFAULT_LOG_LIMIT);
        assert_eq!(query.skip, 0);
        assert!(query.from.is_none());
        assert!(query.to.is_none());
    }
}
