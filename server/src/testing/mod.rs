use crate::types::{Animal, NewAnimal};

/// Build an animal record.
pub fn animal(id: &str, name: &str, species: &str, diet: &str, traits: &[&str]) -> Animal {
    Animal {
        name: name.to_string(),
        species: species.to_string(),
        diet: diet.to_string(),
        personality_traits: traits.iter().map(|t| (*t).to_string()).collect(),
        id: id.to_string(),
    }
}

/// Build a validated candidate.
pub fn new_animal(name: &str, species: &str, diet: &str, traits: &[&str]) -> NewAnimal {
    NewAnimal {
        name: name.to_string(),
        species: species.to_string(),
        diet: diet.to_string(),
        personality_traits: traits.iter().map(|t| (*t).to_string()).collect(),
    }
}

/// The same six animals shipped in `data/animals.json`.
pub fn sample_animals() -> Vec<Animal> {
    vec![
        animal("0", "Sarah", "bear", "omnivore", &["quirky", "rash"]),
        animal("1", "Raksha", "tiger", "carnivore", &["loyal", "brave", "protective"]),
        animal("2", "Noel", "gorilla", "herbivore", &["impish", "sassy", "brave"]),
        animal("3", "Erica", "gorilla", "omnivore", &["quirky", "loyal", "hungry"]),
        animal("4", "Jacqueline", "penguin", "carnivore", &["silly", "brave", "loyal"]),
        animal("5", "Mako", "shark", "carnivore", &["aloof", "hungry"]),
    ]
}
