pub mod animal;
pub mod criteria;

pub use animal::{Animal, NewAnimal};
pub use criteria::FilterCriteria;
