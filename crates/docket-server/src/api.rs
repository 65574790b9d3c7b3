//! Wire types for the docket HTTP API.
//!
//! Items go over the wire as-is, list queries carry a single `limit`
//! parameter, and failures use a `{"detail": ...}` body.

use serde::{Deserialize, Serialize};

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Maximum number of items to return, counted from the front of the
    /// sequence. Zero or negative values yield an empty list.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Error response body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

impl ErrorBody {
    /// Creates a new error body with the given detail message.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_default_limit() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 10);
        assert_eq!(ListQuery::default().limit, 10);
    }

    #[test]
    fn test_list_query_accepts_negative_limit() {
        // Negative limits must reach the handler rather than fail to parse
        let query: ListQuery = serde_json::from_str(r#"{"limit": -3}"#).unwrap();
        assert_eq!(query.limit, -3);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new("Item id 2 not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Item id 2 not found"}));
    }
}
