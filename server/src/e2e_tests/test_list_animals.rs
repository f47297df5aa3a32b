//! Test listing animals without filters.

use crate::e2e_tests::helpers::*;
use crate::testing::sample_animals;
use crate::types::Animal;
use axum::http::StatusCode;

#[tokio::test]
async fn test_list_returns_every_animal_in_order() {
    let (server, _memory) = TestServer::seeded();

    let response = server.get("/api/animals").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    let animals: Vec<Animal> = response.json();
    assert_eq!(animals, sample_animals());
}

#[tokio::test]
async fn test_list_empty_collection() {
    let (server, _memory) = TestServer::empty();

    let response = server.get("/api/animals").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_list_uses_camel_case_keys() {
    let (server, _memory) = TestServer::seeded();

    let response = server.get("/api/animals").await;

    let value: serde_json::Value = response.json();
    assert_eq!(value[0]["personalityTraits"][0], "quirky");
    assert!(value[0].get("personality_traits").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (server, _memory) = TestServer::seeded();

    let response = server.get("/api/zookeepers").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
