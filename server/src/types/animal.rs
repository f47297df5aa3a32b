//! Animal records.
//!
//! `Animal` is the stored record. `NewAnimal` is a candidate that has passed
//! validation but has not been assigned an id yet.
//!
//! # Invariants
//!
//! - `name`, `species` and `diet` are never empty for records created at runtime.
//! - `id` is the decimal index the record was appended at.

use serde::{Deserialize, Serialize};

/// A single animal in the collection.
///
/// Field order matches the JSON the server has always produced:
/// `name, species, diet, personalityTraits, id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
    pub id: String,
}

impl Animal {
    /// Whether this animal has the given trait (exact match).
    #[must_use]
    pub fn has_trait(&self, personality_trait: &str) -> bool {
        self.personality_traits.iter().any(|t| t == personality_trait)
    }
}

/// A validated animal waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl NewAnimal {
    /// Attach an id, producing the stored record.
    #[must_use]
    pub fn into_animal(self, id: String) -> Animal {
        Animal {
            name: self.name,
            species: self.species,
            diet: self.diet,
            personality_traits: self.personality_traits,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> NewAnimal {
        NewAnimal {
            name: "Rex".to_string(),
            species: "dog".to_string(),
            diet: "omnivore".to_string(),
            personality_traits: vec!["loyal".to_string()],
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys_in_order() {
        let animal = rex().into_animal("0".to_string());
        let json = serde_json::to_string(&animal).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Rex","species":"dog","diet":"omnivore","personalityTraits":["loyal"],"id":"0"}"#
        );
    }

    #[test]
    fn test_deserializes_regardless_of_key_order() {
        let json = r#"{"id":"7","personalityTraits":[],"diet":"herbivore","species":"cow","name":"Bess"}"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.id, "7");
        assert_eq!(animal.name, "Bess");
        assert!(animal.personality_traits.is_empty());
    }

    #[test]
    fn test_has_trait_is_exact() {
        let animal = rex().into_animal("0".to_string());
        assert!(animal.has_trait("loyal"));
        assert!(!animal.has_trait("Loyal"));
        assert!(!animal.has_trait("loy"));
    }
}
