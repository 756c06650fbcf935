//! Category service
//!
//! Creates, deletes and lists user-defined categories.

use crate::error::{SaverError, SaverResult};
use crate::models::Category;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new category, returning its position
    ///
    /// Names are not required to be unique.
    pub fn create(&mut self, name: &str, description: &str) -> SaverResult<(usize, Category)> {
        let category = Category::with_description(name.trim(), description.trim());

        category
            .validate()
            .map_err(|e| SaverError::Validation(e.to_string()))?;

        let position = self.storage.categories.add(category.clone());
        log::debug!("created category #{}: {}", position, category.name);

        Ok((position, category))
    }

    /// Delete the category at `position`
    ///
    /// Transactions labelled with the category keep their label.
    pub fn delete(&mut self, position: usize) -> SaverResult<Category> {
        let removed = self.storage.categories.remove(position)?;
        log::debug!("deleted category #{}: {}", position, removed.name);
        Ok(removed)
    }

    /// List all categories in insertion order
    pub fn list(&self) -> &[Category] {
        self.storage.categories.all()
    }

    /// Check whether a category with this name exists
    pub fn exists(&self, name: &str) -> bool {
        self.storage.categories.find_by_name(name).is_some()
    }
}
