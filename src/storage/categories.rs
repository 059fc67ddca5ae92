//! Category store backed by a single JSON file
//!
//! The whole ordered category list is serialized under one file and rewritten
//! atomically on every mutation. Insertion order is the display order, so the
//! backing collection is a Vec rather than a map. All mutation happens on the
//! single UI thread; absent ids and invalid input degrade to no-ops.

use std::path::PathBuf;

use crate::error::DivvyError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Ordered category collection with persist-on-mutation semantics
pub struct CategoryStore {
    path: PathBuf,
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Create a store and load whatever is on disk.
    ///
    /// An absent or malformed file yields an empty collection, never an error.
    pub fn open(path: PathBuf) -> Self {
        let categories = read_json(&path).unwrap_or_default();
        Self { path, categories }
    }

    /// The ordered category list
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by id
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Append a new category with percentage 0.
    ///
    /// The name is trimmed; an empty or whitespace-only name is a no-op and
    /// returns None.
    pub fn add(&mut self, name: &str) -> Result<Option<CategoryId>, DivvyError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let category = Category::new(name);
        let id = category.id;
        self.categories.push(category);
        self.persist()?;
        Ok(Some(id))
    }

    /// Rename a category. Absent id is a no-op.
    pub fn rename(&mut self, id: CategoryId, name: &str) -> Result<(), DivvyError> {
        if let Some(category) = self.categories.iter_mut().find(|c| c.id == id) {
            category.name = name.to_string();
            self.persist()?;
        }
        Ok(())
    }

    /// Set a category's percentage (decimal fraction). Absent id is a no-op.
    pub fn set_percentage(&mut self, id: CategoryId, fraction: f64) -> Result<(), DivvyError> {
        if let Some(category) = self.categories.iter_mut().find(|c| c.id == id) {
            category.percentage = if fraction.is_finite() { fraction } else { 0.0 };
            self.persist()?;
        }
        Ok(())
    }

    /// Remove a category by id, preserving the order of the rest.
    /// Absent id is a no-op.
    pub fn remove(&mut self, id: CategoryId) -> Result<bool, DivvyError> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replace the whole collection
    pub fn replace_all(&mut self, categories: Vec<Category>) -> Result<(), DivvyError> {
        self.categories = categories;
        self.persist()
    }

    /// Sum of all category percentages (decimal fraction)
    pub fn total_percentage(&self) -> f64 {
        self.categories.iter().map(|c| c.percentage).sum()
    }

    fn persist(&self) -> Result<(), DivvyError> {
        write_json_atomic(&self.path, &self.categories)
    }
}
