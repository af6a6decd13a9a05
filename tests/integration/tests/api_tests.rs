//! API Integration Tests
//!
//! These tests require:
//! - Running MySQL instance
//! - Environment variables: MYSQL_HOST, MYSQL_USER, MYSQL_PASSWORD (optionally MYSQL_DATABASE)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Movie Tests
// ============================================================================

#[tokio::test]
async fn test_movie_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Create
    let request = CreateMovie {
        year: Some(2021),
        ..CreateMovie::titled("Dune")
    };
    let response = server.post("/movies", &request).await.unwrap();
    let created: Movie = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.title, "Dune");
    assert_eq!(created.genre, None);
    assert_eq!(created.id.len(), 36);

    let path = format!("/movies/{}", created.id);

    // Get
    let response = server.get(&path).await.unwrap();
    let fetched: Movie = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);

    // Partial update
    let response = server.put(&path, &json!({ "rating": 9.0 })).await.unwrap();
    let updated: Movie = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Dune");
    assert_eq!(updated.year, Some(2021));
    assert_eq!(updated.rating, Some(9.0));

    // Delete
    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_movie_without_title() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMovie {
        year: Some(1999),
        ..CreateMovie::default()
    };

    let response = server.post("/movies", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "title is required");
    assert_eq!(body.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_without_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/movies", &CreateMovie::unique()).await.unwrap();
    let created: Movie = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/movies/{}", created.id);

    let response = server.put(&path, &json!({})).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error, "no fields to update");

    let response = server.get(&path).await.unwrap();
    let fetched: Movie = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created);

    server.delete(&path).await.unwrap();
}

#[tokio::test]
async fn test_list_movies_ordered_by_title() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let prefix = format!("Order {} {}", std::process::id(), unique_suffix());

    let mut ids = Vec::new();
    for suffix in ["Zeta", "Alpha", "Mid"] {
        let request = CreateMovie::titled(format!("{prefix} {suffix}"));
        let response = server.post("/movies", &request).await.unwrap();
        let created: Movie = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(created.id);
    }

    let response = server.get("/movies").await.unwrap();
    let movies: Vec<Movie> = assert_json(response, StatusCode::OK).await.unwrap();
    let titles: Vec<_> = movies
        .iter()
        .filter(|m| m.title.starts_with(&prefix))
        .map(|m| m.title.trim_start_matches(&prefix).trim().to_string())
        .collect();
    assert_eq!(titles, ["Alpha", "Mid", "Zeta"]);

    for id in ids {
        server.delete(&format!("/movies/{id}")).await.unwrap();
    }
}

#[tokio::test]
async fn test_unknown_movie() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/movies/does-not-exist").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put("/movies/does-not-exist", &json!({ "year": 2000 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
