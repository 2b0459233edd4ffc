//! Presence sweeper integration tests
//!
//! Exercises eviction end to end: register through the API, age the
//! heartbeat behind the API's back, sweep, and observe the room.
//!
//! Run with: cargo test -p integration-tests --test presence_tests

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use integration_tests::{assert_json, assert_status, TestApp};

#[tokio::test]
async fn test_stale_participant_is_evicted_with_departure_message() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();
    app.register("Bob").await.unwrap();

    // Age Alice past the 10s threshold
    app.ctx()
        .participant_repo()
        .update_last_seen("Alice", Utc::now() - Duration::seconds(30))
        .await
        .unwrap();

    let evicted = app.sweeper().sweep_once().await.unwrap();
    assert_eq!(evicted, 1);

    // Alice is gone from the room
    let response = app.get("/participants").await.unwrap();
    let participants = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = participants
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bob"]);

    // Exactly one departure announcement, broadcast to everyone
    let response = app.get_as("/messages", "Bob").await.unwrap();
    let messages = assert_json(response, StatusCode::OK).await.unwrap();
    let departures: Vec<_> = messages
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["text"] == "sai da sala...")
        .collect();
    assert_eq!(departures.len(), 1);
    assert_eq!(departures[0]["from"], "Alice");
    assert_eq!(departures[0]["to"], "Todos");
    assert_eq!(departures[0]["type"], "status");
}

#[tokio::test]
async fn test_heartbeat_keeps_participant_alive() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    // Age Alice, then let her heartbeat land before the sweep
    app.ctx()
        .participant_repo()
        .update_last_seen("Alice", Utc::now() - Duration::seconds(30))
        .await
        .unwrap();

    let response = app.post_as("/status", "Alice").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let evicted = app.sweeper().sweep_once().await.unwrap();
    assert_eq!(evicted, 0);

    let response = app.get("/participants").await.unwrap();
    let participants = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(participants.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_repeated_sweep_announces_nothing_new() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    app.ctx()
        .participant_repo()
        .update_last_seen("Alice", Utc::now() - Duration::seconds(30))
        .await
        .unwrap();

    let sweeper = app.sweeper();
    assert_eq!(sweeper.sweep_once().await.unwrap(), 1);
    let after_first = app.ctx().message_repo().count().await.unwrap();

    // A second sweep finds nobody stale and performs no writes
    assert_eq!(sweeper.sweep_once().await.unwrap(), 0);
    assert_eq!(app.ctx().message_repo().count().await.unwrap(), after_first);
}

#[tokio::test]
async fn test_sweep_store_failure_is_not_fatal() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();
    let sweeper = app.sweeper();

    app.pool().close().await;

    // The sweep reports the failure instead of panicking
    assert!(sweeper.sweep_once().await.is_err());

    // And the process is still serving
    let response = app.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_evicted_participant_must_register_again() {
    let app = TestApp::spawn().await.unwrap();
    app.register("Alice").await.unwrap();

    app.ctx()
        .participant_repo()
        .update_last_seen("Alice", Utc::now() - Duration::seconds(30))
        .await
        .unwrap();
    app.sweeper().sweep_once().await.unwrap();

    // The heartbeat now tells the client they are out of the room
    let response = app.post_as("/status", "Alice").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // And the name is free to take again
    app.register("Alice").await.unwrap();
}
