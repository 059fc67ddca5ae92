//! Storage layer for divvy
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod categories;
pub mod file_io;

pub use categories::CategoryStore;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::DivvyPaths;

/// Open the category store at its configured location
pub fn open_store(paths: &DivvyPaths) -> CategoryStore {
    CategoryStore::open(paths.categories_file())
}
