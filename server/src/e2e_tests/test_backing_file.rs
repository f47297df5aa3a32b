//! Test write-through to the JSON backing file.

use crate::e2e_tests::helpers::*;
use crate::storage::{AnimalStore, JsonFile, Persistence};
use crate::testing::sample_animals;
use crate::types::Animal;
use axum::http::StatusCode;

#[tokio::test]
async fn test_insert_rewrites_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    let mut seed = JsonFile::new(&path);
    seed.save(&sample_animals()).unwrap();

    let server = TestServer::new(AnimalStore::open(JsonFile::new(&path)).unwrap());
    let response = server.post_json("/api/animals", REX).await;
    assert_eq!(response.status, StatusCode::OK);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let animals: Vec<Animal> = serde_json::from_value(on_disk["animals"].clone()).unwrap();
    assert_eq!(animals.len(), 7);
    assert_eq!(animals[6].name, "Rex");
    assert_eq!(animals[6].id, "6");
    assert_eq!(animals, server.animals());
}

#[tokio::test]
async fn test_restart_sees_previous_inserts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("animals.json");

    let first = TestServer::new(AnimalStore::open(JsonFile::new(&path)).unwrap());
    assert_eq!(first.post_json("/api/animals", REX).await.status, StatusCode::OK);
    drop(first);

    let second = TestServer::new(AnimalStore::open(JsonFile::new(&path)).unwrap());
    let response = second.get("/api/animals/0").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Animal>().name, "Rex");
}

#[tokio::test]
async fn test_rejected_insert_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");

    let server = TestServer::new(AnimalStore::open(JsonFile::new(&path)).unwrap());
    let response = server.post_json("/api/animals", "{}").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!path.exists());
}
