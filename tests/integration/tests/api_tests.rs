//! API integration tests
//!
//! End-to-end tests over the full router with an in-memory database.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::StatusCode;
use integration_tests::{assert_json, assert_status, TestApp};
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await.unwrap();
    let response = app.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let app = TestApp::spawn().await.unwrap();
    let response = app.get("/health/ready").await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["ready"], true);
}

// ============================================================================
// Participant Tests
// ============================================================================

#[tokio::test]
async fn test_register_participant() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .post_json("/participants", &json!({ "name": "Alice" }))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["name"], "Alice");

    // The arrival is announced to the whole room
    let response = app.get_as("/messages", "Bob").await.unwrap();
    let messages = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages[0]["from"], "Alice");
    assert_eq!(messages[0]["to"], "Todos");
    assert_eq!(messages[0]["text"], "entra na sala...");
    assert_eq!(messages[0]["type"], "status");
}

#[tokio::test]
async fn test_register_duplicate_name_conflicts() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    let response = app
        .post_json("/participants", &json!({ "name": "Alice" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_empty_name_is_unprocessable() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .post_json("/participants", &json!({ "name": "" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_participants() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();
    app.register("Bob").await.unwrap();

    let response = app.get("/participants").await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();

    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_post_message() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    let response = app
        .post_json_as(
            "/messages",
            "Alice",
            &json!({ "to": "Todos", "text": "oi gente", "type": "message" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_post_message_unknown_sender_is_unprocessable() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .post_json_as(
            "/messages",
            "Ghost",
            &json!({ "to": "Todos", "text": "oi", "type": "message" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_message_without_user_header_is_unprocessable() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .post_json(
            "/messages",
            &json!({ "to": "Todos", "text": "oi", "type": "message" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_message_rejects_status_kind() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    let response = app
        .post_json_as(
            "/messages",
            "Alice",
            &json!({ "to": "Todos", "text": "oi", "type": "status" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_private_message_visibility() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();
    app.register("Bob").await.unwrap();

    app.post_json_as(
        "/messages",
        "Alice",
        &json!({ "to": "Bob", "text": "segredo", "type": "private_message" }),
    )
    .await
    .unwrap();

    // Bob and the sender see the private message; Carol does not
    for viewer in ["Alice", "Bob"] {
        let response = app.get_as("/messages", viewer).await.unwrap();
        let messages = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(
            messages
                .as_array()
                .unwrap()
                .iter()
                .any(|m| m["text"] == "segredo"),
            "{viewer} should see the private message"
        );
    }

    let response = app.get_as("/messages", "Carol").await.unwrap();
    let messages = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["text"] != "segredo"));
}

#[tokio::test]
async fn test_get_messages_limit_newest_first() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    for i in 0..5 {
        app.post_json_as(
            "/messages",
            "Alice",
            &json!({ "to": "Todos", "text": format!("msg {i}"), "type": "message" }),
        )
        .await
        .unwrap();
    }

    let response = app.get_as("/messages?limit=2", "Alice").await.unwrap();
    let messages = assert_json(response, StatusCode::OK).await.unwrap();
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["text"], "msg 4");
    assert_eq!(messages[1]["text"], "msg 3");
}

#[tokio::test]
async fn test_get_messages_invalid_limit_is_unprocessable() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    let response = app.get_as("/messages?limit=abc", "Alice").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let response = app.get_as("/messages?limit=0", "Alice").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

// ============================================================================
// Heartbeat Tests
// ============================================================================

#[tokio::test]
async fn test_status_refreshes_heartbeat() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    let response = app.post_as("/status", "Alice").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_status_for_unknown_participant_is_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let response = app.post_as("/status", "Ghost").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
