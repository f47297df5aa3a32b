//! Filter criteria for listing animals.
//!
//! Query strings arrive as loose `key=value` pairs. A trait filter may be a
//! single value or repeated, and clients using form encoding send it as
//! `personalityTraits[]`. [`FilterCriteria::from_pairs`] normalizes all of
//! those shapes before the query engine sees them.
//!
//! # Normalization rules
//!
//! - Empty values are treated as absent.
//! - A scalar key given more than once is malformed and treated as absent.
//! - Unknown keys are ignored.

/// Query key for the trait filter.
pub const PERSONALITY_TRAITS_KEY: &str = "personalityTraits";
/// Bracketed form of the trait filter key.
const PERSONALITY_TRAITS_ARRAY_KEY: &str = "personalityTraits[]";

/// Normalized filter for the animal listing.
///
/// Every field is optional. An empty `personality_traits` imposes no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Traits every matching animal must have.
    pub personality_traits: Vec<String>,
    pub diet: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from decoded query-string pairs, preserving pair order.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::new();
        let mut diets = Vec::new();
        let mut species = Vec::new();
        let mut names = Vec::new();

        for (key, value) in pairs {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                PERSONALITY_TRAITS_KEY | PERSONALITY_TRAITS_ARRAY_KEY => {
                    criteria.personality_traits.push(value);
                }
                "diet" => diets.push(value),
                "species" => species.push(value),
                "name" => names.push(value),
                _ => {}
            }
        }

        criteria.diet = single_value(diets);
        criteria.species = single_value(species);
        criteria.name = single_value(names);
        criteria
    }

    /// Require the given trait.
    #[must_use]
    pub fn with_trait(mut self, personality_trait: impl Into<String>) -> Self {
        self.personality_traits.push(personality_trait.into());
        self
    }

    #[must_use]
    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    #[must_use]
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }
}

/// The value of a scalar key, or `None` unless it was given exactly once.
fn single_value(mut values: Vec<String>) -> Option<String> {
    if values.len() == 1 {
        values.pop()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pairs_is_empty() {
        let criteria = FilterCriteria::from_pairs(Vec::<(String, String)>::new());
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_single_trait_becomes_sequence() {
        let criteria = FilterCriteria::from_pairs([("personalityTraits", "brave")]);
        assert_eq!(criteria.personality_traits, vec!["brave"]);
    }

    #[test]
    fn test_repeated_and_bracketed_traits_normalize_alike() {
        let repeated = FilterCriteria::from_pairs([
            ("personalityTraits", "brave"),
            ("personalityTraits", "loyal"),
        ]);
        let bracketed = FilterCriteria::from_pairs([
            ("personalityTraits[]", "brave"),
            ("personalityTraits[]", "loyal"),
        ]);
        assert_eq!(repeated, bracketed);
        assert_eq!(repeated.personality_traits, vec!["brave", "loyal"]);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let criteria = FilterCriteria::from_pairs([
            ("diet", ""),
            ("personalityTraits", ""),
            ("name", ""),
        ]);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_repeated_scalar_is_absent() {
        let criteria = FilterCriteria::from_pairs([
            ("species", "tiger"),
            ("species", "bear"),
            ("diet", "carnivore"),
        ]);
        assert_eq!(criteria, FilterCriteria::new().with_diet("carnivore"));
    }

    #[test]
    fn test_empty_repeat_does_not_conflict() {
        let criteria = FilterCriteria::from_pairs([("species", ""), ("species", "bear")]);
        assert_eq!(criteria.species.as_deref(), Some("bear"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let criteria = FilterCriteria::from_pairs([("color", "brown"), ("diet", "omnivore")]);
        assert_eq!(criteria, FilterCriteria::new().with_diet("omnivore"));
    }
}
