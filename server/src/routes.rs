//! HTTP routes for the animal API.
//!
//! | Method | Path                | Handler         |
//! |--------|---------------------|-----------------|
//! | GET    | `/api/animals`      | `list_animals`  |
//! | GET    | `/api/animals/{id}` | `get_animal`    |
//! | POST   | `/api/animals`      | `create_animal` |

use std::sync::{Arc, RwLock};

use axum::{
    Form, Json, Router,
    body::Bytes,
    extract::{FromRequest, Path, Query, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;

use crate::storage::{AnimalStore, StoreError};
use crate::types::{Animal, FilterCriteria};
use crate::validation::{FieldError, Validation, candidate_from_form, validate_animal};

/// Body sent with a 400 when a posted animal fails validation.
pub const INVALID_ANIMAL_MESSAGE: &str = "The animal is not properly formatted.";
/// Body sent with a 500 when the collection could not be saved.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save the animal.";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shared state for the animal handlers.
#[derive(Clone)]
pub struct AppState {
    /// The animal collection. Reads share the lock; inserts hold it
    /// exclusively until the backing file has been written.
    pub store: Arc<RwLock<AnimalStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: AnimalStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Errors a handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// No animal has the requested id.
    NotFound,
    /// The posted animal failed validation.
    InvalidInput(Vec<FieldError>),
    /// The store could not persist an insert.
    Store(StoreError),
    /// A handler panicked while holding the store lock.
    LockPoisoned,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::InvalidInput(errors) => {
                let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                tracing::debug!("rejected animal: {}", reasons.join(", "));
                (StatusCode::BAD_REQUEST, INVALID_ANIMAL_MESSAGE).into_response()
            }
            Self::Store(e) => {
                tracing::error!("failed to save animal: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED_MESSAGE).into_response()
            }
            Self::LockPoisoned => {
                tracing::error!("animal store lock poisoned");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Build the router for the animal API.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/animals", get(list_animals).post(create_animal))
        .route("/api/animals/{id}", get(get_animal))
        .with_state(state)
}

/// List animals, filtered by any recognized query parameters.
///
/// Query decoding is lossy, so every query string yields some criteria.
async fn list_animals(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let criteria = FilterCriteria::from_pairs(pairs);

    let store = state.store.read().map_err(|_| ApiError::LockPoisoned)?;
    let results: Vec<Animal> = store.list(&criteria).into_iter().cloned().collect();
    drop(store);

    Ok(Json(results))
}

async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, ApiError> {
    let store = state.store.read().map_err(|_| ApiError::LockPoisoned)?;
    let animal = store.get(&id).cloned().ok_or(ApiError::NotFound)?;
    drop(store);

    Ok(Json(animal))
}

/// Validate and append a posted animal.
///
/// Form-encoded bodies are grouped into a JSON candidate; any other body is
/// parsed as JSON. Anything that is not a conforming animal is rejected
/// with a 400.
async fn create_animal(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Animal>, ApiError> {
    let candidate = read_candidate(request).await;

    let new_animal = match validate_animal(&candidate) {
        Validation::Valid(new_animal) => new_animal,
        Validation::Invalid(errors) => return Err(ApiError::InvalidInput(errors)),
    };

    let mut store = state.store.write().map_err(|_| ApiError::LockPoisoned)?;
    let animal = store.append(new_animal)?;
    drop(store);

    tracing::info!("Added animal {} ({}) with id {}", animal.name, animal.species, animal.id);
    Ok(Json(animal))
}

/// Decode the request body into an untyped candidate; `Null` if unreadable.
async fn read_candidate(request: Request) -> Value {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with(FORM_CONTENT_TYPE));

    if is_form {
        match Form::<Vec<(String, String)>>::from_request(request, &()).await {
            Ok(Form(pairs)) => candidate_from_form(pairs),
            Err(e) => {
                tracing::debug!("undecodable form body: {e}");
                Value::Null
            }
        }
    } else {
        match Bytes::from_request(request, &()).await {
            Ok(body) => serde_json::from_slice(&body).unwrap_or(Value::Null),
            Err(e) => {
                tracing::debug!("unreadable request body: {e}");
                Value::Null
            }
        }
    }
}
