// Integration tests for `BoardClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskboard_api::{BoardClient, CreateTask, Error, Priority, TaskUpdate};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, BoardClient) {
    let server = MockServer::start().await;
    let client = BoardClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/user/create"))
        .and(body_json(json!({ "name": "Ada" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42, "name": "Ada" })))
        .mount(&server)
        .await;

    let user = client.create_user("Ada").await.unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn test_get_boards_nested_graph() {
    let (server, client) = setup().await;

    let body = json!([{
        "id": 1,
        "title": "Demo",
        "userId": 42,
        "listIds": [],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z",
        "lists": [{
            "id": 10,
            "title": "Todo",
            "boardId": 1,
            "taskIds": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "tasks": [
                { "id": 100, "title": "X", "description": "", "priority": "low",
                  "listId": 10, "createdAt": "2024-01-01T00:00:00Z" },
                { "id": 101, "title": "Y", "description": "details", "priority": "high",
                  "listId": 10, "createdAt": "2024-01-02T00:00:00Z" }
            ]
        }]
    }]);

    Mock::given(method("GET"))
        .and(path("/board/get-boards/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let boards = client.get_boards(42).await.unwrap();

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].title, "Demo");
    assert_eq!(boards[0].lists[0].tasks.len(), 2);
    assert_eq!(boards[0].lists[0].tasks[1].priority, Priority::High);
    assert_eq!(
        boards[0].lists[0].tasks[1].description.as_deref(),
        Some("details")
    );
}

#[tokio::test]
async fn test_create_board_returns_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/board/create"))
        .and(body_json(json!({ "title": "Sprint", "userId": 42 })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 5, "title": "Sprint" })),
        )
        .mount(&server)
        .await;

    let created = client.create_board("Sprint", 42).await.unwrap();
    assert_eq!(created.id, Some(5));
}

#[tokio::test]
async fn test_create_with_empty_body_yields_no_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/list/create"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let created = client.create_list("Doing", 1).await.unwrap();
    assert_eq!(created.id, None);
}

#[tokio::test]
async fn test_create_task_body_shape() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/task/create"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "Write docs",
            "description": "",
            "priority": "medium",
            "listId": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 102 })))
        .mount(&server)
        .await;

    let created = client
        .create_task(&CreateTask {
            title: "Write docs".into(),
            description: String::new(),
            priority: Priority::Medium,
            list_id: 10,
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(102));
}

#[tokio::test]
async fn test_update_task_sends_partial_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/task/update/100"))
        .and(body_json(json!({ "priority": "high" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_task(
            100,
            &TaskUpdate {
                priority: Some(Priority::High),
                ..TaskUpdate::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_list_accepts_no_content() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/list/delete/10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_list(10).await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_carries_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/board/delete/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("board 9 not found"))
        .mount(&server)
        .await;

    let err = client.delete_board(9).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.body(), Some("board 9 not found"));
    assert!(matches!(err, Error::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_http_error_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/list/update/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client
        .update_list(3, &taskboard_api::ListUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "500 Internal Server Error -- Request failed");
}

#[tokio::test]
async fn test_malformed_board_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/board/get-boards/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client.get_boards(1).await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "{not json"),
        other => panic!("expected deserialization error, got {other:?}"),
    }
}
