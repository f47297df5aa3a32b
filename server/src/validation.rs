//! Validation of incoming animal payloads.
//!
//! Request bodies are untyped JSON. [`validate_animal`] checks each required
//! field and either produces a [`NewAnimal`] or the list of fields that failed.
//!
//! # Rules
//!
//! - `name`, `species`, `diet`: present, a string, non-empty.
//! - `personalityTraits`: present, an array of strings (may be empty).
//! - `null` counts as missing.
//! - Other keys, including any client-supplied `id`, are ignored.
//!
//! Form-encoded bodies are first grouped into the same JSON shape by
//! [`candidate_from_form`].

use std::fmt;

use serde_json::{Map, Value, map::Entry};

use crate::types::NewAnimal;

/// What was wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    /// The field is absent or `null`.
    Missing,
    /// The field has the wrong JSON type.
    WrongType { expected: &'static str },
    /// The field is an empty string.
    Empty,
}

/// A validation failure for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::WrongType { expected } => {
                write!(f, "{} must be {expected}", self.field)
            }
            FieldProblem::Empty => write!(f, "{} must not be empty", self.field),
        }
    }
}

/// Outcome of validating a candidate animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(NewAnimal),
    /// Field errors in the order name, species, diet, personalityTraits.
    Invalid(Vec<FieldError>),
}

impl Validation {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Validate an untyped candidate.
#[must_use]
pub fn validate_animal(candidate: &Value) -> Validation {
    let empty = Map::new();
    let fields = candidate.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    let name = required_string(fields, "name", &mut errors);
    let species = required_string(fields, "species", &mut errors);
    let diet = required_string(fields, "diet", &mut errors);
    let personality_traits = required_string_array(fields, "personalityTraits", &mut errors);

    match (name, species, diet, personality_traits) {
        (Some(name), Some(species), Some(diet), Some(personality_traits)) => {
            Validation::Valid(NewAnimal {
                name,
                species,
                diet,
                personality_traits,
            })
        }
        _ => Validation::Invalid(errors),
    }
}

/// Group decoded form pairs into a JSON candidate.
///
/// A key sent once stays a string. A key sent more than once, or with a
/// `[]` suffix, becomes an array of its values in order. Only the array form
/// of `personalityTraits` passes validation.
#[must_use]
pub fn candidate_from_form<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: AsRef<str>,
    V: Into<String>,
{
    let mut fields = Map::new();
    for (key, value) in pairs {
        let key = key.as_ref();
        let value = Value::String(value.into());
        let (key, force_array) = key
            .strip_suffix("[]")
            .map_or((key, false), |stripped| (stripped, true));

        match fields.entry(key) {
            Entry::Occupied(mut entry) => match entry.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
            Entry::Vacant(entry) => {
                entry.insert(if force_array {
                    Value::Array(vec![value])
                } else {
                    value
                });
            }
        }
    }
    Value::Object(fields)
}

fn required_string(
    fields: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let problem = match fields.get(field) {
        None | Some(Value::Null) => FieldProblem::Missing,
        Some(Value::String(s)) if s.is_empty() => FieldProblem::Empty,
        Some(Value::String(s)) => return Some(s.clone()),
        Some(_) => FieldProblem::WrongType {
            expected: "a string",
        },
    };
    errors.push(FieldError { field, problem });
    None
}

fn required_string_array(
    fields: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<String>> {
    let problem = match fields.get(field) {
        None | Some(Value::Null) => FieldProblem::Missing,
        Some(Value::Array(items)) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect();
            match strings {
                Some(strings) => return Some(strings),
                None => FieldProblem::WrongType {
                    expected: "an array of strings",
                },
            }
        }
        Some(_) => FieldProblem::WrongType {
            expected: "an array",
        },
    };
    errors.push(FieldError { field, problem });
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rex() -> Value {
        json!({
            "name": "Rex",
            "species": "dog",
            "diet": "omnivore",
            "personalityTraits": ["loyal"]
        })
    }

    fn errors_of(validation: Validation) -> Vec<FieldError> {
        match validation {
            Validation::Invalid(errors) => errors,
            Validation::Valid(animal) => panic!("expected invalid, got {animal:?}"),
        }
    }

    #[test]
    fn test_accepts_conforming_candidate() {
        let validation = validate_animal(&rex());
        assert!(validation.is_valid());
        assert_eq!(
            validation,
            Validation::Valid(NewAnimal {
                name: "Rex".to_string(),
                species: "dog".to_string(),
                diet: "omnivore".to_string(),
                personality_traits: vec!["loyal".to_string()],
            })
        );
    }

    #[test]
    fn test_accepts_empty_traits() {
        let mut candidate = rex();
        candidate["personalityTraits"] = json!([]);
        assert!(validate_animal(&candidate).is_valid());
    }

    #[test]
    fn test_ignores_extra_fields_and_client_id() {
        let mut candidate = rex();
        candidate["id"] = json!("42");
        candidate["color"] = json!("brown");
        assert!(validate_animal(&candidate).is_valid());
    }

    #[test]
    fn test_rejects_missing_traits() {
        let mut candidate = rex();
        candidate.as_object_mut().unwrap().remove("personalityTraits");
        assert_eq!(
            errors_of(validate_animal(&candidate)),
            vec![FieldError {
                field: "personalityTraits",
                problem: FieldProblem::Missing,
            }]
        );
    }

    #[test]
    fn test_rejects_traits_that_are_not_an_array() {
        let mut candidate = rex();
        candidate["personalityTraits"] = json!("loyal");
        let errors = errors_of(validate_animal(&candidate));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].problem,
            FieldProblem::WrongType {
                expected: "an array"
            }
        );
    }

    #[test]
    fn test_rejects_traits_with_non_string_items() {
        let mut candidate = rex();
        candidate["personalityTraits"] = json!(["loyal", 3]);
        assert!(!validate_animal(&candidate).is_valid());
    }

    #[test]
    fn test_rejects_non_string_diet() {
        let mut candidate = rex();
        candidate["diet"] = json!(7);
        let errors = errors_of(validate_animal(&candidate));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "diet");
        assert_eq!(errors[0].to_string(), "diet must be a string");
    }

    #[test]
    fn test_rejects_empty_and_null_strings() {
        let mut candidate = rex();
        candidate["name"] = json!("");
        candidate["species"] = Value::Null;
        let errors = errors_of(validate_animal(&candidate));
        assert_eq!(
            errors,
            vec![
                FieldError {
                    field: "name",
                    problem: FieldProblem::Empty,
                },
                FieldError {
                    field: "species",
                    problem: FieldProblem::Missing,
                },
            ]
        );
    }

    #[test]
    fn test_form_groups_bracketed_and_repeated_keys() {
        let candidate = candidate_from_form([
            ("name", "Rex"),
            ("personalityTraits[]", "loyal"),
            ("personalityTraits[]", "brave"),
            ("tags", "a"),
            ("tags", "b"),
        ]);
        assert_eq!(
            candidate,
            json!({
                "name": "Rex",
                "personalityTraits": ["loyal", "brave"],
                "tags": ["a", "b"]
            })
        );
    }

    #[test]
    fn test_form_candidate_validates() {
        let candidate = candidate_from_form([
            ("name", "Rex"),
            ("species", "dog"),
            ("diet", "omnivore"),
            ("personalityTraits[]", "loyal"),
        ]);
        assert!(validate_animal(&candidate).is_valid());
    }

    #[test]
    fn test_form_single_bare_trait_stays_a_string() {
        let candidate = candidate_from_form([
            ("name", "Rex"),
            ("species", "dog"),
            ("diet", "omnivore"),
            ("personalityTraits", "loyal"),
        ]);
        assert_eq!(candidate["personalityTraits"], json!("loyal"));
        let errors = errors_of(validate_animal(&candidate));
        assert_eq!(errors[0].field, "personalityTraits");
    }

    #[test]
    fn test_form_repeated_scalar_is_not_a_string() {
        let candidate = candidate_from_form([
            ("name", "Rex"),
            ("name", "Max"),
            ("species", "dog"),
            ("diet", "omnivore"),
            ("personalityTraits[]", "loyal"),
        ]);
        let errors = errors_of(validate_animal(&candidate));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_non_object_reports_every_field_missing() {
        for candidate in [Value::Null, json!([]), json!("Rex"), json!(1)] {
            let errors = errors_of(validate_animal(&candidate));
            let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec!["name", "species", "diet", "personalityTraits"]);
            assert!(errors.iter().all(|e| e.problem == FieldProblem::Missing));
        }
    }
}
