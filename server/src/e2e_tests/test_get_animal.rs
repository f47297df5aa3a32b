//! Test fetching a single animal by id.

use crate::e2e_tests::helpers::*;
use crate::types::Animal;
use axum::http::StatusCode;

#[tokio::test]
async fn test_get_existing_animal() {
    let (server, _memory) = TestServer::seeded();

    let response = server.get("/api/animals/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    let animal: Animal = response.json();
    assert_eq!(animal.name, "Raksha");
    assert_eq!(animal.id, "1");
}

#[tokio::test]
async fn test_get_missing_animal_is_404_without_body() {
    let (server, _memory) = TestServer::seeded();

    let response = server.get("/api/animals/42").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_get_from_empty_collection() {
    let (server, _memory) = TestServer::empty();

    let response = server.get("/api/animals/0").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_ignores_query_string() {
    let (server, _memory) = TestServer::seeded();

    let response = server.get("/api/animals/2?species=tiger").await;

    assert_eq!(response.status, StatusCode::OK);
    let animal: Animal = response.json();
    assert_eq!(animal.name, "Noel");
}
