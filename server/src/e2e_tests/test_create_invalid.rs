//! Test that malformed animals are rejected without touching the store.

use crate::e2e_tests::helpers::*;
use crate::routes::INVALID_ANIMAL_MESSAGE;
use axum::http::StatusCode;

async fn assert_rejected(body: &str) {
    let (server, memory) = TestServer::seeded();
    let before = server.animals();

    let response = server.post_json("/api/animals", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
    assert_eq!(response.text(), "The animal is not properly formatted.");
    assert_eq!(response.text(), INVALID_ANIMAL_MESSAGE);
    assert!(
        response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/plain"))
    );
    assert_eq!(server.animals(), before);
    assert_eq!(memory.save_count(), 0);
}

#[tokio::test]
async fn test_missing_traits() {
    assert_rejected(r#"{"name":"Rex","species":"dog","diet":"omnivore"}"#).await;
}

#[tokio::test]
async fn test_traits_not_an_array() {
    assert_rejected(
        r#"{"name":"Rex","species":"dog","diet":"omnivore","personalityTraits":"loyal"}"#,
    )
    .await;
}

#[tokio::test]
async fn test_diet_not_a_string() {
    assert_rejected(r#"{"name":"Rex","species":"dog","diet":42,"personalityTraits":[]}"#).await;
}

#[tokio::test]
async fn test_empty_name() {
    assert_rejected(r#"{"name":"","species":"dog","diet":"omnivore","personalityTraits":[]}"#)
        .await;
}

#[tokio::test]
async fn test_missing_species() {
    assert_rejected(r#"{"name":"Rex","diet":"omnivore","personalityTraits":[]}"#).await;
}

#[tokio::test]
async fn test_empty_object() {
    assert_rejected("{}").await;
}

#[tokio::test]
async fn test_not_an_object() {
    assert_rejected(r#"["Rex","dog","omnivore"]"#).await;
}

#[tokio::test]
async fn test_malformed_json() {
    assert_rejected(r#"{"name":"Rex","#).await;
}

#[tokio::test]
async fn test_empty_body() {
    assert_rejected("").await;
}
