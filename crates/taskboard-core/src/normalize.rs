// ── Normalization ──
//
// Nested server graph (Board -> List -> Task) to flat entity maps plus
// order-preserving id sequences, and back. Always a full replace: the
// output contains exactly what the input contains.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat};

use taskboard_api::{ApiBoard, ApiList, ApiTask};

use crate::error::CoreError;
use crate::model::{Board, BoardId, Entities, List, ListId, Task, TaskId, UserId};

/// Flatten a `get-boards` payload into fresh [`Entities`].
///
/// The embedded `lists` / `tasks` arrays are authoritative for order; the
/// redundant `listIds` / `taskIds` fields are ignored. Fails on the first
/// unparseable `createdAt`, or if any id appears under more than one parent.
pub fn normalize(boards: &[ApiBoard]) -> Result<Entities, CoreError> {
    let mut entities = Entities::default();

    for api_board in boards {
        let mut list_ids = Vec::with_capacity(api_board.lists.len());

        for api_list in &api_board.lists {
            let mut task_ids = Vec::with_capacity(api_list.tasks.len());

            for api_task in &api_list.tasks {
                let task = normalize_task(api_task)?;
                task_ids.push(task.id);
                if entities.tasks.insert(task.id, task).is_some() {
                    return Err(CoreError::DuplicateEntity {
                        kind: "task",
                        id: api_task.id,
                    });
                }
            }

            let list = List {
                id: ListId(api_list.id),
                title: api_list.title.clone(),
                task_ids,
            };
            list_ids.push(list.id);
            if entities.lists.insert(list.id, list).is_some() {
                return Err(CoreError::DuplicateEntity {
                    kind: "list",
                    id: api_list.id,
                });
            }
        }

        let board = Board {
            id: BoardId(api_board.id),
            title: api_board.title.clone(),
            list_ids,
        };
        if entities.boards.insert(board.id, board).is_some() {
            return Err(CoreError::DuplicateEntity {
                kind: "board",
                id: api_board.id,
            });
        }
    }

    Ok(entities)
}

fn normalize_task(api: &ApiTask) -> Result<Task, CoreError> {
    let created_at = parse_timestamp(&api.created_at).ok_or_else(|| CoreError::InvalidTimestamp {
        entity: "task",
        id: api.id,
        value: api.created_at.clone(),
    })?;

    Ok(Task {
        id: TaskId(api.id),
        title: api.title.clone(),
        description: api.description.clone().filter(|d| !d.is_empty()),
        priority: api.priority,
        created_at,
    })
}

/// Parse a wire timestamp into epoch milliseconds.
///
/// Accepts RFC 3339 with any offset, an ISO 8601 date-time without an
/// offset (read as UTC), or a bare `YYYY-MM-DD` read as UTC midnight.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Render epoch milliseconds as RFC 3339 (UTC, millisecond precision).
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Rebuild the nested payload shape from normalized entities.
///
/// Boards come out in snapshot order, children in their sequence order.
/// Ids that do not resolve are skipped. `normalize(&denormalize(e, _))`
/// equals `e` for any entities that satisfy the ownership invariants.
pub fn denormalize(entities: &Entities, user_id: Option<UserId>) -> Vec<ApiBoard> {
    entities
        .boards
        .values()
        .map(|board| ApiBoard {
            id: board.id.get(),
            title: board.title.clone(),
            user_id: user_id.map(UserId::get),
            list_ids: board.list_ids.iter().map(|id| id.get()).collect(),
            created_at: None,
            updated_at: None,
            lists: entities
                .board_lists(board.id)
                .into_iter()
                .map(|list| ApiList {
                    id: list.id.get(),
                    title: list.title.clone(),
                    board_id: Some(board.id.get()),
                    task_ids: list.task_ids.iter().map(|id| id.get()).collect(),
                    created_at: None,
                    updated_at: None,
                    tasks: entities
                        .list_tasks(list.id)
                        .into_iter()
                        .map(|task| ApiTask {
                            id: task.id.get(),
                            title: task.title.clone(),
                            description: task.description.clone(),
                            priority: task.priority,
                            list_id: Some(list.id.get()),
                            created_at: format_timestamp(task.created_at),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use taskboard_api::Priority;

    fn payload(value: serde_json::Value) -> Vec<ApiBoard> {
        serde_json::from_value(value).unwrap()
    }

    fn demo() -> Vec<ApiBoard> {
        payload(json!([{
            "id": 1,
            "title": "Demo",
            "listIds": [999],
            "lists": [{
                "id": 10,
                "title": "Todo",
                "taskIds": [],
                "tasks": [{
                    "id": 100,
                    "title": "X",
                    "description": "",
                    "priority": "low",
                    "createdAt": "2024-01-01T00:00:00Z"
                }]
            }]
        }]))
    }

    #[test]
    fn empty_payload_yields_empty_entities() {
        let entities = normalize(&[]).unwrap();
        assert!(entities.boards.is_empty());
        assert!(entities.lists.is_empty());
        assert!(entities.tasks.is_empty());
    }

    #[test]
    fn single_board_graph() {
        let entities = normalize(&demo()).unwrap();

        assert_eq!(entities.boards.len(), 1);
        assert_eq!(entities.lists.len(), 1);
        assert_eq!(entities.tasks.len(), 1);
        assert_eq!(entities.boards[&BoardId(1)].list_ids, vec![ListId(10)]);
        assert_eq!(entities.lists[&ListId(10)].task_ids, vec![TaskId(100)]);

        let task = &entities.tasks[&TaskId(100)];
        assert_eq!(task.title, "X");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.description, None);
        assert_eq!(task.created_at, 1_704_067_200_000);
    }

    #[test]
    fn embedded_arrays_win_over_redundant_ids() {
        let entities = normalize(&demo()).unwrap();
        assert!(!entities.boards[&BoardId(1)].list_ids.contains(&ListId(999)));
    }

    #[test]
    fn normalizing_twice_is_structurally_equal() {
        assert_eq!(normalize(&demo()).unwrap(), normalize(&demo()).unwrap());
    }

    #[test]
    fn board_order_follows_payload() {
        let entities = normalize(&payload(json!([
            { "id": 3, "title": "C", "lists": [] },
            { "id": 1, "title": "A", "lists": [] },
            { "id": 2, "title": "B", "lists": [] }
        ])))
        .unwrap();
        let order: Vec<BoardId> = entities.board_order().collect();
        assert_eq!(order, vec![BoardId(3), BoardId(1), BoardId(2)]);
    }

    #[test]
    fn invalid_timestamp_is_a_hard_error() {
        let boards = payload(json!([{
            "id": 1, "title": "B",
            "lists": [{ "id": 10, "title": "L", "tasks": [
                { "id": 100, "title": "T", "priority": "high", "createdAt": "not a date" }
            ]}]
        }]));
        match normalize(&boards).unwrap_err() {
            CoreError::InvalidTimestamp { entity, id, value } => {
                assert_eq!(entity, "task");
                assert_eq!(id, 100);
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn task_under_two_lists_is_rejected() {
        let boards = payload(json!([{
            "id": 1, "title": "B",
            "lists": [
                { "id": 10, "title": "L1", "tasks": [
                    { "id": 100, "title": "T", "createdAt": "2024-01-01T00:00:00Z" }
                ]},
                { "id": 11, "title": "L2", "tasks": [
                    { "id": 100, "title": "T", "createdAt": "2024-01-01T00:00:00Z" }
                ]}
            ]
        }]));
        assert!(matches!(
            normalize(&boards).unwrap_err(),
            CoreError::DuplicateEntity { kind: "task", id: 100 }
        ));
    }

    #[test]
    fn timestamp_formats() {
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z"), Some(1_704_067_200_000));
        assert_eq!(
            parse_timestamp("2024-01-01T02:00:00.250+02:00"),
            Some(1_704_067_200_250)
        );
        assert_eq!(parse_timestamp("2024-01-01"), Some(1_704_067_200_000));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("2024-13-01T00:00:00Z"), None);
    }

    #[test]
    fn offsetless_timestamps_read_as_utc() {
        assert_eq!(parse_timestamp("2024-01-01T00:00:00"), Some(1_704_067_200_000));
        assert_eq!(parse_timestamp("2024-01-01T00:00:00.000"), Some(1_704_067_200_000));
        assert_eq!(parse_timestamp("2024-01-01T00:00:01.5"), Some(1_704_067_201_500));
        assert_eq!(parse_timestamp("2024-01-01T25:00:00"), None);
    }

    #[test]
    fn denormalize_then_normalize_round_trips() {
        let entities = normalize(&demo()).unwrap();
        let rebuilt = denormalize(&entities, Some(UserId(7)));
        assert_eq!(rebuilt[0].user_id, Some(7));
        assert_eq!(rebuilt[0].lists[0].tasks[0].created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(normalize(&rebuilt).unwrap(), entities);
    }
}
