//! The animal store.
//!
//! Owns the in-memory collection and the persistence that mirrors it. The
//! collection is append-only: there is no update or delete.

use crate::query::{filter_by_query, find_by_id};
use crate::storage::io::{Persistence, PersistenceError};
use crate::types::{Animal, FilterCriteria, NewAnimal};

/// In-memory animal collection with write-through persistence.
///
/// # Invariants
///
/// - After every successful `append`, the persistence holds exactly `animals()`.
/// - The id of an appended animal is its index in the collection.
pub struct AnimalStore {
    animals: Vec<Animal>,
    persistence: Box<dyn Persistence>,
}

impl AnimalStore {
    /// Create a store over an existing collection.
    ///
    /// The collection is trusted as-is and not written back until the next
    /// append.
    #[must_use]
    pub fn new(animals: Vec<Animal>, persistence: impl Persistence + 'static) -> Self {
        Self {
            animals,
            persistence: Box::new(persistence),
        }
    }

    /// Load the collection from `persistence` and wrap it in a store.
    pub fn open(persistence: impl Persistence + 'static) -> Result<Self, StoreError> {
        let animals = persistence.load()?;
        Ok(Self::new(animals, persistence))
    }

    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Animals matching `criteria`, in collection order.
    #[must_use]
    pub fn list(&self, criteria: &FilterCriteria) -> Vec<&Animal> {
        filter_by_query(criteria, &self.animals)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Animal> {
        find_by_id(id, &self.animals)
    }

    /// Append a validated animal and persist the whole collection.
    ///
    /// The new animal's id is the collection length before the append.
    /// If persisting fails the append is undone and the store is unchanged.
    pub fn append(&mut self, candidate: NewAnimal) -> Result<Animal, StoreError> {
        let animal = candidate.into_animal(self.animals.len().to_string());
        self.animals.push(animal.clone());

        if let Err(e) = self.persistence.save(&self.animals) {
            self.animals.pop();
            return Err(StoreError::Persistence(e));
        }

        Ok(animal)
    }
}

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Loading or saving the collection failed.
    Persistence(PersistenceError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence(e) => write!(f, "persistence error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence(e) => Some(e),
        }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(e: PersistenceError) -> Self {
        Self::Persistence(e)
    }
}
