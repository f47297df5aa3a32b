//! In-memory persistence for tests.
//!
//! `InMemory` is a cheap handle: clones share the same saved snapshot, so a
//! test can hand one clone to the store and inspect the other. Writes can be
//! made to fail on demand to exercise error paths.

use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::io::{Persistence, PersistenceError};
use crate::types::Animal;

#[derive(Debug, Default)]
struct InMemoryState {
    snapshot: Vec<Animal>,
    save_count: u64,
    fail_writes: bool,
}

/// Persistence that keeps the last saved collection in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `animals` already saved, as if loaded from a seed file.
    #[must_use]
    pub fn with_animals(animals: Vec<Animal>) -> Self {
        let memory = Self::new();
        memory.lock().snapshot = animals;
        memory
    }

    /// The last successfully saved collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Animal> {
        self.lock().snapshot.clone()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> u64 {
        self.lock().save_count
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    // Every write replaces the whole state, so poisoning is ignored.
    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Persistence for InMemory {
    fn load(&self) -> Result<Vec<Animal>, PersistenceError> {
        Ok(self.snapshot())
    }

    fn save(&mut self, animals: &[Animal]) -> Result<(), PersistenceError> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(PersistenceError::InjectedFault(
                "in-memory writes disabled".to_string(),
            ));
        }
        state.snapshot = animals.to_vec();
        state.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_animals;

    #[test]
    fn test_clones_share_snapshot() {
        let memory = InMemory::new();
        let mut handle = memory.clone();

        handle.save(&sample_animals()).unwrap();

        assert_eq!(memory.snapshot(), sample_animals());
        assert_eq!(memory.save_count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_snapshot() {
        let mut memory = InMemory::with_animals(sample_animals());
        memory.fail_writes(true);

        let err = memory.save(&[]).unwrap_err();

        assert!(matches!(err, PersistenceError::InjectedFault(_)));
        assert_eq!(memory.load().unwrap().len(), sample_animals().len());
        assert_eq!(memory.save_count(), 0);
    }
}
