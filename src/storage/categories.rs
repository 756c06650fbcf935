//! In-memory category list

use crate::error::{SaverError, SaverResult};
use crate::models::Category;

/// Insertion-ordered list of categories, addressed by 1-based position
#[derive(Debug, Default)]
pub struct CategoryList {
    categories: Vec<Category>,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category and return its position
    pub fn add(&mut self, category: Category) -> usize {
        self.categories.push(category);
        self.categories.len()
    }

    /// Remove the category at `position`
    pub fn remove(&mut self, position: usize) -> SaverResult<Category> {
        if position == 0 || position > self.categories.len() {
            return Err(SaverError::invalid_category_index(position));
        }
        Ok(self.categories.remove(position - 1))
    }

    /// Find a category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let mut list = CategoryList::new();
        list.add(Category::new("Food"));
        list.add(Category::new("Transport"));
        list.add(Category::new("Rent"));

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name, "Food");
        assert_eq!(list.all()[0].name, "Transport");
        assert_eq!(list.all()[1].name, "Rent");
    }

    #[test]
    fn test_remove_invalid_position() {
        let mut list = CategoryList::new();
        list.add(Category::new("Food"));

        let err = list.remove(5).unwrap_err();
        assert_eq!(err.to_string(), "Invalid category index: 5");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut list = CategoryList::new();
        list.add(Category::new("Food"));
        list.add(Category::new("Food"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_find_by_name() {
        let mut list = CategoryList::new();
        list.add(Category::with_description("Food", "meals"));

        assert_eq!(list.find_by_name("food").unwrap().description, "meals");
        assert!(list.find_by_name("Rent").is_none());
    }
}
