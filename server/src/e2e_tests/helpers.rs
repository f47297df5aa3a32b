//! Common helpers for end-to-end tests.

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::routes::{AppState, router};
use crate::storage::{AnimalStore, InMemory};
use crate::testing::sample_animals;
use crate::types::Animal;

/// Upper bound on response bodies read by tests.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A router wired to a store, plus the state it shares with the handlers.
pub struct TestServer {
    app: Router,
    pub state: AppState,
}

impl TestServer {
    pub fn new(store: AnimalStore) -> Self {
        let state = AppState::new(store);
        let app = router(state.clone());
        Self { app, state }
    }

    /// A server holding the sample animals, backed by in-memory persistence.
    pub fn seeded() -> (Self, InMemory) {
        let memory = InMemory::with_animals(sample_animals());
        let store = AnimalStore::open(memory.clone()).unwrap();
        (Self::new(store), memory)
    }

    /// A server with no animals, backed by in-memory persistence.
    pub fn empty() -> (Self, InMemory) {
        let memory = InMemory::new();
        let store = AnimalStore::open(memory.clone()).unwrap();
        (Self::new(store), memory)
    }

    /// Current contents of the store.
    pub fn animals(&self) -> Vec<Animal> {
        self.state.store.read().unwrap().animals().to_vec()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a JSON body.
    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST a form-encoded body.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .unwrap();
        TestResponse {
            status,
            content_type,
            body,
        }
    }
}

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    }
}

/// Ids of the animals in a listing response, in order.
pub fn ids(animals: &[Animal]) -> Vec<&str> {
    animals.iter().map(|a| a.id.as_str()).collect()
}

/// A conforming POST body.
pub const REX: &str =
    r#"{"name":"Rex","species":"dog","diet":"omnivore","personalityTraits":["loyal"]}"#;
