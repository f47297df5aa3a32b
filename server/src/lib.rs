// Test code is allowed to use unwrap() for convenience.
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Life of a request:
// 1. axum routes the request to a handler in `routes`
// 2. Query strings are normalized into `FilterCriteria`;
//    posted bodies are validated into a `NewAnimal`
// 3. Reads go through the query engine over the store's collection;
//    inserts append to the store, which rewrites the backing file
// 4. The handler responds with JSON or a plain-text error
//
// System components:
//  - Query engine (pure filtering and lookup)
//  - Validation
//  - Animal store + persistence

pub mod config;
pub mod query;
pub mod routes;
pub mod storage;
pub mod types;
pub mod validation;

mod e2e_tests;
#[cfg(test)]
mod testing;

pub use routes::{AppState, router};
pub use storage::AnimalStore;
