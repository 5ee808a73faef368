//! Wire shapes of the exercise log endpoint.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::store::models::{DEFAULT_LOG_LIMIT, LogEntry, LogQuery};

/// Query parameters accepted by `GET /api/users/{user_id}/logs`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryParams {
    /// Inclusive lower date bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper date bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum number of log entries returned. Defaults to 10.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Matching entries skipped before the first returned one. Defaults
    /// to 0.
    #[serde(default)]
    pub skip: u32,
}

const fn default_limit() -> u32 {
    DEFAULT_LOG_LIMIT
}

impl From<LogQueryParams> for LogQuery {
    fn from(params: LogQueryParams) -> Self {
        Self {
            from: params.from,
            to: params.to,
            limit: params.limit,
            skip: params.skip,
        }
    }
}

/// Response body of `GET /api/users/{user_id}/logs`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogResponse {
    /// Id of the user the log belongs to.
    pub user_id: i64,
    /// One page of log entries, oldest first.
    pub logs: Vec<LogEntry>,
    /// Total entries matching the date filters, ignoring pagination.
    pub count: i64,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let Ok(params) = serde_json::from_str::<LogQueryParams>("{}") else {
            panic!("empty params failed to deserialize");
        };
        assert_eq!(params.limit, DEFAULT_LOG_LIMIT);
        assert_eq!(params.skip, 0);
        assert!(params.from.is_none());
        assert!(params.to.is_none());
    }

    #[test]
    fn params_convert_into_store_query() {
        let params = LogQueryParams {
            from: Some("2024-01-01".to_string()),
            to: None,
            limit: 5,
            skip: 2,
        };

        let query = LogQuery::from(params);
        assert_eq!(query.from.as_deref(), Some("2024-01-01"));
        assert!(query.to.is_none());
        assert_eq!(query.limit, 5);
        assert_eq!(query.skip, 2);
    }

    #[test]
    fn log_response_uses_camel_case_user_id() {
        let response = ExerciseLogResponse {
            user_id: 3,
            logs: vec![],
            count: 0,
        };

        let Ok(json) = serde_json::to_value(&response) else {
            panic!("response serialization failed");
        };
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
        assert_eq!(json.get("count"), Some(&serde_json::json!(0)));
    }
}
