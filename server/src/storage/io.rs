//! Persistence abstraction for the animal collection.
//!
//! The store never touches the filesystem directly. It hands the full
//! collection to a `Persistence` implementation after every append, which
//! lets the server use a JSON file in production and an in-memory mirror in
//! tests.
//!
//! # Implementation Notes
//!
//! Implementations must ensure:
//! - `save` replaces everything previously saved with the given collection
//! - `load` returns the last successfully saved collection, or an empty one
//!   if nothing has been saved yet

use crate::types::Animal;

/// Errors that can occur while saving or loading the collection.
#[derive(Debug)]
pub enum PersistenceError {
    /// I/O error.
    Io(std::io::Error),
    /// The collection could not be encoded.
    Serialize(serde_json::Error),
    /// The stored data is not a valid collection.
    Deserialize(serde_json::Error),
    /// Injected fault for testing.
    InjectedFault(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Serialize(e) => write!(f, "failed to encode animals: {e}"),
            Self::Deserialize(e) => write!(f, "failed to decode animals: {e}"),
            Self::InjectedFault(msg) => write!(f, "injected fault: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialize(e) | Self::Deserialize(e) => Some(e),
            Self::InjectedFault(_) => None,
        }
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Durable mirror of the animal collection.
///
/// Shared across request handlers behind a lock, hence `Send + Sync`.
pub trait Persistence: Send + Sync {
    /// Load the saved collection.
    fn load(&self) -> Result<Vec<Animal>, PersistenceError>;

    /// Replace the saved collection with `animals`.
    ///
    /// Must complete before returning; callers treat a returned `Ok` as durable.
    fn save(&mut self, animals: &[Animal]) -> Result<(), PersistenceError>;
}
