//! Query engine for the animal collection.
//!
//! Pure functions over a slice of animals: no state, no I/O. The store and
//! the HTTP handlers call into this module.
//!
//! ```ignore
//! use zoo_server::query::{filter_by_query, find_by_id};
//! use zoo_server::types::FilterCriteria;
//!
//! let criteria = FilterCriteria::new().with_trait("brave").with_diet("carnivore");
//! for animal in filter_by_query(&criteria, store.animals()) {
//!     println!("{}", animal.name);
//! }
//! ```

pub mod engine;

pub use engine::{filter_by_query, find_by_id};
