//! Wire types for the task-board REST API.
//!
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
//! Identifiers are the raw server-assigned integers; `taskboard-core`
//! wraps them in kind-specific newtypes during normalization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Priority ─────────────────────────────────────────────────────────

/// Task priority. Serialized lowercase on the wire (`"low"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

// ── Users ────────────────────────────────────────────────────────────

/// Registered user, from `POST /user/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: u64,
    pub name: String,
}

// ── Nested board graph ───────────────────────────────────────────────

/// Board with embedded lists, from `GET /board/get-boards/{userId}`.
///
/// `list_ids` is redundant with `lists` and never used for ordering;
/// the embedded array is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBoard {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub list_ids: Vec<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub lists: Vec<ApiList>,
}

/// List with embedded tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiList {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub board_id: Option<u64>,
    /// May be empty even when `tasks` is not.
    #[serde(default)]
    pub task_ids: Vec<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tasks: Vec<ApiTask>,
}

/// Task as embedded in a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTask {
    pub id: u64,
    pub title: String,
    /// `null`, absent and `""` all mean "no description".
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub list_id: Option<u64>,
    /// ISO 8601 date-time.
    pub created_at: String,
}

// ── Create responses ─────────────────────────────────────────────────

/// Response of any create endpoint.
///
/// Only the id is interesting to callers and even that is optional:
/// some deployments answer with an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Created {
    #[serde(default)]
    pub id: Option<u64>,
    /// Catch-all for the rest of the created entity.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ── Request bodies ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoard {
    pub title: String,
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateList {
    pub title: String,
    pub board_id: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    /// Sent as `""` when the task has no description.
    pub description: String,
    pub priority: Priority,
    pub list_id: u64,
}

/// Partial board update for `PUT /board/update/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Partial list update for `PUT /list/update/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Partial task update for `PUT /task/update/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_board_tolerates_missing_redundant_fields() {
        let board: ApiBoard = serde_json::from_value(json!({
            "id": 1,
            "title": "Demo",
            "lists": [{
                "id": 10,
                "title": "Todo",
                "tasks": [{
                    "id": 100,
                    "title": "X",
                    "description": null,
                    "priority": "low",
                    "createdAt": "2024-01-01T00:00:00Z"
                }]
            }]
        }))
        .unwrap();

        assert!(board.list_ids.is_empty());
        assert_eq!(board.lists[0].tasks[0].description, None);
        assert_eq!(board.lists[0].tasks[0].priority, Priority::Low);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(Priority::Medium.to_string(), "medium");
    }

    #[test]
    fn task_update_skips_unset_fields() {
        let body = serde_json::to_value(TaskUpdate {
            priority: Some(Priority::High),
            ..TaskUpdate::default()
        })
        .unwrap();
        assert_eq!(body, json!({ "priority": "high" }));
    }

    #[test]
    fn created_keeps_extra_fields() {
        let created: Created =
            serde_json::from_value(json!({ "id": 7, "title": "New" })).unwrap();
        assert_eq!(created.id, Some(7));
        assert_eq!(created.extra.get("title"), Some(&json!("New")));
    }
}
