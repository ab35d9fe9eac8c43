//! End-to-end tests for the todo HTTP API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{body::Bytes, http::StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use todo_service_core::{InMemoryTodoRepository, Todo};
use todo_service_testing::{FailingRepository, SequentialIdGenerator, seeded_repository};
use todo_service_web::{AppState, CORRELATION_ID_HEADER, app};

fn server() -> TestServer {
    TestServer::new(app(AppState::in_memory())).expect("test server should start")
}

fn server_with(repository: InMemoryTodoRepository) -> TestServer {
    let state = AppState::new(Arc::new(repository), Arc::new(SequentialIdGenerator::new()));
    TestServer::new(app(state)).expect("test server should start")
}

fn failing_server() -> TestServer {
    let state = AppState::new(
        Arc::new(FailingRepository),
        Arc::new(SequentialIdGenerator::new()),
    );
    TestServer::new(app(state)).expect("test server should start")
}

fn assert_internal_error(response: &TestResponse) {
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["error"], "An internal error occurred");
    assert!(!response.text().contains(FailingRepository::DETAIL));
}

async fn create(server: &TestServer, title: &str) -> Todo {
    let response = server.post("/todos").json(&json!({ "title": title })).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Todo>()
}

#[tokio::test]
async fn create_returns_201_with_new_todo() {
    let server = server();

    let response = server
        .post("/todos")
        .json(&json!({ "title": "buy milk" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["title"], "buy milk");
    assert_eq!(body["completed"], false);
}

#[tokio::test]
async fn create_honours_completed_flag() {
    let server = server();

    let response = server
        .post("/todos")
        .json(&json!({ "title": "already done", "completed": true }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["completed"], true);
}

#[tokio::test]
async fn create_uses_injected_id_generator() {
    let server = server_with(InMemoryTodoRepository::new());

    let first = create(&server, "first").await;
    let second = create(&server, "second").await;

    assert_eq!(first.id, SequentialIdGenerator::id_at(1));
    assert_eq!(second.id, SequentialIdGenerator::id_at(2));
}

#[tokio::test]
async fn create_without_title_is_400() {
    let server = server();

    let response = server.post("/todos").json(&json!({ "completed": true })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_with_blank_title_is_400() {
    let server = server();

    let response = server.post("/todos").json(&json!({ "title": "   " })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "todo title cannot be empty"
    );
    server.get("/todos").await.assert_json(&json!([]));
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let server = server();

    let response = server
        .post("/todos")
        .bytes(Bytes::from_static(b"{\"title\": "))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn list_is_empty_initially() {
    let server = server();

    let response = server.get("/todos").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn list_returns_todos_in_creation_order_with_unique_ids() {
    let server = server();
    let titles = ["one", "two", "three", "four", "five"];

    let mut created = Vec::new();
    for title in titles {
        created.push(create(&server, title).await);
    }

    let response = server.get("/todos").await;
    response.assert_status_ok();
    let listed = response.json::<Vec<Todo>>();

    assert_eq!(listed, created);
    let listed_titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(listed_titles, titles);
    let ids: HashSet<_> = listed.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), titles.len());
}

#[tokio::test]
async fn update_completed_keeps_title() {
    let server = server();
    let todo = create(&server, "buy milk").await;

    let response = server
        .put(&format!("/todos/{}", todo.id))
        .json(&json!({ "completed": true }))
        .await;

    response.assert_status_ok();
    let updated = response.json::<Todo>();
    assert_eq!(updated.id, todo.id);
    assert_eq!(updated.title, "buy milk");
    assert!(updated.completed);
}

#[tokio::test]
async fn update_with_empty_title_keeps_original() {
    let server = server();
    let todo = create(&server, "buy milk").await;

    let response = server
        .put(&format!("/todos/{}", todo.id))
        .json(&json!({ "title": "" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Todo>(), todo);
}

#[tokio::test]
async fn update_can_clear_completed() {
    let (repository, seeded) = seeded_repository(&["done"]);
    let server = server_with(repository);
    let id = seeded[0].id;

    server
        .put(&format!("/todos/{id}"))
        .json(&json!({ "completed": true }))
        .await
        .assert_status_ok();
    let response = server
        .put(&format!("/todos/{id}"))
        .json(&json!({ "completed": false }))
        .await;

    response.assert_status_ok();
    assert!(!response.json::<Todo>().completed);
}

#[tokio::test]
async fn sequential_updates_compose() {
    let server = server();
    let todo = create(&server, "old").await;
    let path = format!("/todos/{}", todo.id);

    server
        .put(&path)
        .json(&json!({ "completed": true }))
        .await
        .assert_status_ok();
    let response = server.put(&path).json(&json!({ "title": "new" })).await;

    response.assert_status_ok();
    let updated = response.json::<Todo>();
    assert_eq!(updated.title, "new");
    assert!(updated.completed);

    let listed = server.get("/todos").await.json::<Vec<Todo>>();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn update_preserves_list_position() {
    let (repository, seeded) = seeded_repository(&["a", "b", "c"]);
    let server = server_with(repository);

    server
        .put(&format!("/todos/{}", seeded[1].id))
        .json(&json!({ "title": "b, edited" }))
        .await
        .assert_status_ok();

    let titles: Vec<String> = server
        .get("/todos")
        .await
        .json::<Vec<Todo>>()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["a", "b, edited", "c"]);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let server = server();

    let response = server
        .put("/todos/does-not-exist")
        .json(&json!({ "completed": true }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("not found"));
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_unknown_uuid_is_404() {
    let server = server();
    create(&server, "present").await;

    let response = server
        .put(&format!("/todos/{}", SequentialIdGenerator::id_at(42)))
        .json(&json!({ "title": "ghost" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("not found"));
}

#[tokio::test]
async fn update_with_malformed_json_is_400() {
    let server = server();
    let todo = create(&server, "buy milk").await;

    let response = server
        .put(&format!("/todos/{}", todo.id))
        .bytes(Bytes::from_static(b"not json"))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_blank_title_keeps_original() {
    let server = server();
    let todo = create(&server, "buy milk").await;

    let response = server
        .put(&format!("/todos/{}", todo.id))
        .json(&json!({ "title": "   ", "completed": true }))
        .await;

    response.assert_status_ok();
    let updated = response.json::<Todo>();
    assert_eq!(updated.title, "buy milk");
    assert!(updated.completed);
}

#[tokio::test]
async fn create_with_long_title_is_201() {
    let server = server();
    let title = "x".repeat(5_000);

    let todo = create(&server, &title).await;

    assert_eq!(todo.title, title);
}

#[tokio::test]
async fn create_storage_failure_is_500() {
    let server = failing_server();

    let response = server
        .post("/todos")
        .json(&json!({ "title": "buy milk" }))
        .await;

    assert_internal_error(&response);
}

#[tokio::test]
async fn list_storage_failure_is_500() {
    let server = failing_server();

    let response = server.get("/todos").await;

    assert_internal_error(&response);
}

#[tokio::test]
async fn update_storage_failure_is_500() {
    let server = failing_server();

    let response = server
        .put(&format!("/todos/{}", SequentialIdGenerator::id_at(1)))
        .json(&json!({ "completed": true }))
        .await;

    assert_internal_error(&response);
}

#[tokio::test]
async fn health_check_is_ok() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn responses_carry_correlation_id() {
    let server = server();

    let response = server.get("/todos").await;

    let header = response.header(CORRELATION_ID_HEADER);
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}
