//! Test that a failed write leaves the collection unchanged.

use crate::e2e_tests::helpers::*;
use crate::routes::SAVE_FAILED_MESSAGE;
use crate::types::Animal;
use axum::http::StatusCode;

#[tokio::test]
async fn test_failed_save_returns_500_and_rolls_back() {
    let (server, memory) = TestServer::seeded();
    let before = server.animals();
    memory.fail_writes(true);

    let response = server.post_json("/api/animals", REX).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), SAVE_FAILED_MESSAGE);
    assert_eq!(server.animals(), before);
    assert_eq!(
        server.get("/api/animals/6").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_insert_after_recovered_save_reuses_id() {
    let (server, memory) = TestServer::seeded();
    memory.fail_writes(true);
    let failed = server.post_json("/api/animals", REX).await;
    assert_eq!(failed.status, StatusCode::INTERNAL_SERVER_ERROR);

    memory.fail_writes(false);
    let response = server.post_json("/api/animals", REX).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Animal>().id, "6");
    assert_eq!(memory.snapshot(), server.animals());
}
