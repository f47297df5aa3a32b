//! Animal storage.
//!
//! The collection lives in memory inside an [`AnimalStore`] and is mirrored
//! to durable storage on every append through the [`Persistence`] trait.
//!
//! # File Format
//!
//! [`JsonFile`] stores the whole collection as one pretty-printed document:
//!
//! ```json
//! {
//!   "animals": [
//!     { "name": "Sarah", "species": "bear", "diet": "omnivore",
//!       "personalityTraits": ["quirky", "rash"], "id": "0" }
//!   ]
//! }
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use storage::{AnimalStore, JsonFile};
//!
//! let mut store = AnimalStore::open(JsonFile::new("./data/animals.json"))?;
//! let rex = store.append(candidate)?;
//! assert_eq!(store.get(&rex.id), Some(&rex));
//! ```

mod database;
mod file;
mod io;
mod memory;

pub use database::{AnimalStore, StoreError};
pub use file::JsonFile;
pub use io::{Persistence, PersistenceError};
pub use memory::InMemory;
