//! Query engine implementation.
//!
//! Filtering runs in stages: personality traits, then diet, species and name.
//! Each stage narrows the surviving set, so the order only affects how much
//! work later stages do, never the result.

use crate::types::{Animal, FilterCriteria};

/// Return the animals matching every supplied criterion, in input order.
///
/// Absent criteria impose no constraint, so empty criteria return every
/// animal.
#[must_use]
pub fn filter_by_query<'a>(criteria: &FilterCriteria, animals: &'a [Animal]) -> Vec<&'a Animal> {
    let mut results: Vec<&Animal> = animals.iter().collect();

    // Each trait narrows the set further: survivors have all of them.
    for personality_trait in &criteria.personality_traits {
        results.retain(|animal| animal.has_trait(personality_trait));
        if results.is_empty() {
            return results;
        }
    }

    if let Some(diet) = &criteria.diet {
        results.retain(|animal| &animal.diet == diet);
    }
    if let Some(species) = &criteria.species {
        results.retain(|animal| &animal.species == species);
    }
    if let Some(name) = &criteria.name {
        results.retain(|animal| &animal.name == name);
    }

    results
}

/// Find the first animal with the given id.
#[must_use]
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == id)
}
