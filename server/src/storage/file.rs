//! JSON file persistence.
//!
//! The file holds `{ "animals": [...] }`, pretty-printed, and is rewritten in
//! full on every save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::io::{Persistence, PersistenceError};
use crate::types::Animal;

/// On-disk document shape.
#[derive(Serialize)]
struct AnimalsDocument<'a> {
    animals: &'a [Animal],
}

#[derive(Deserialize)]
struct OwnedAnimalsDocument {
    animals: Vec<Animal>,
}

/// A backing JSON file for the collection.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFile {
    /// Read the collection from disk.
    ///
    /// A missing file is an empty collection; the file is created on the
    /// first save.
    fn load(&self) -> Result<Vec<Animal>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "No data file at {}, starting with an empty collection",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(PersistenceError::Io(e)),
        };

        let document: OwnedAnimalsDocument =
            serde_json::from_slice(&bytes).map_err(PersistenceError::Deserialize)?;
        Ok(document.animals)
    }

    fn save(&mut self, animals: &[Animal]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&AnimalsDocument { animals })
            .map_err(PersistenceError::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;

        tracing::debug!("Wrote {} animals to {}", animals.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_animals;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("animals.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonFile::new(dir.path().join("nested").join("animals.json"));
        let animals = sample_animals();

        file.save(&animals).unwrap();

        assert_eq!(file.load().unwrap(), animals);
    }

    #[test]
    fn test_save_writes_pretty_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonFile::new(dir.path().join("animals.json"));
        let animals = sample_animals();

        file.save(&animals[..1]).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("{\n  \"animals\": [\n    {\n      \"name\": \"Sarah\""));
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["animals"][0]["personalityTraits"][1], "rash");
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonFile::new(dir.path().join("animals.json"));
        let animals = sample_animals();

        file.save(&animals).unwrap();
        file.save(&animals[..2]).unwrap();

        assert_eq!(file.load().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animals.json");
        fs::write(&path, "{\"animals\": [{\"name\": 1}]}").unwrap();

        let err = JsonFile::new(path).load().unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialize(_)));
    }

    #[test]
    fn test_shipped_seed_data_is_valid() {
        let seed = include_str!("../../../data/animals.json");
        let document: OwnedAnimalsDocument = serde_json::from_str(seed).unwrap();
        assert!(!document.animals.is_empty());
        for (index, animal) in document.animals.iter().enumerate() {
            assert_eq!(animal.id, index.to_string());
        }
    }
}
