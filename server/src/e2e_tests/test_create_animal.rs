//! Test creating animals.

use crate::e2e_tests::helpers::*;
use crate::types::Animal;
use axum::body::Body;
use axum::http::{Request, StatusCode};

#[tokio::test]
async fn test_create_into_empty_collection() {
    let (server, memory) = TestServer::empty();

    let response = server.post_json("/api/animals", REX).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.is_json());
    assert_eq!(
        response.text(),
        r#"{"name":"Rex","species":"dog","diet":"omnivore","personalityTraits":["loyal"],"id":"0"}"#
    );
    assert_eq!(memory.save_count(), 1);
    assert_eq!(memory.snapshot(), server.animals());
}

#[tokio::test]
async fn test_create_assigns_collection_length_as_id() {
    let (server, _memory) = TestServer::seeded();

    let response = server.post_json("/api/animals", REX).await;

    let animal: Animal = response.json();
    assert_eq!(animal.id, "6");
    assert_eq!(server.animals().len(), 7);

    let response = server.get("/api/animals/6").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Animal>(), animal);
}

#[tokio::test]
async fn test_created_animals_appear_in_listing() {
    let (server, _memory) = TestServer::empty();

    for name in ["Rex", "Fido", "Spot"] {
        let body = format!(
            r#"{{"name":"{name}","species":"dog","diet":"omnivore","personalityTraits":[]}}"#
        );
        let response = server.post_json("/api/animals", &body).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let animals: Vec<Animal> = server.get("/api/animals?species=dog").await.json();
    assert_eq!(ids(&animals), vec!["0", "1", "2"]);
    let names: Vec<&str> = animals.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Rex", "Fido", "Spot"]);
}

#[tokio::test]
async fn test_client_supplied_id_is_replaced() {
    let (server, _memory) = TestServer::seeded();

    let response = server
        .post_json(
            "/api/animals",
            r#"{"id":"99","name":"Rex","species":"dog","diet":"omnivore","personalityTraits":[]}"#,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Animal>().id, "6");
    assert_eq!(
        server.get("/api/animals/99").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_create_without_content_type() {
    let (server, _memory) = TestServer::empty();

    let request = Request::builder()
        .method("POST")
        .uri("/api/animals")
        .body(Body::from(REX))
        .unwrap();
    let response = server.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Animal>().id, "0");
}

#[tokio::test]
async fn test_create_from_form_body() {
    let (server, memory) = TestServer::empty();

    let response = server
        .post_form(
            "/api/animals",
            "name=Rex&species=dog&diet=omnivore&personalityTraits%5B%5D=loyal",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.text(),
        r#"{"name":"Rex","species":"dog","diet":"omnivore","personalityTraits":["loyal"],"id":"0"}"#
    );
    assert_eq!(memory.snapshot(), server.animals());
}

#[tokio::test]
async fn test_create_from_form_with_repeated_traits() {
    let (server, _memory) = TestServer::seeded();

    let response = server
        .post_form(
            "/api/animals",
            "name=Rex&species=dog&diet=omnivore&personalityTraits=loyal&personalityTraits=brave",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let animal: Animal = response.json();
    assert_eq!(animal.id, "6");
    assert_eq!(animal.personality_traits, vec!["loyal", "brave"]);
}

#[tokio::test]
async fn test_form_with_single_bare_trait_is_rejected() {
    let (server, memory) = TestServer::empty();

    let response = server
        .post_form(
            "/api/animals",
            "name=Rex&species=dog&diet=omnivore&personalityTraits=loyal",
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "The animal is not properly formatted.");
    assert_eq!(memory.save_count(), 0);
}
