//! Category model
//!
//! A user-defined label with a free-form description. Transactions refer to
//! categories by name only.

use std::fmt;

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Notes about this category
    pub description: String,
}

impl Category {
    /// Create a new category without a description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Create a new category with a description
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.description)
        }
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name is required."),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50).", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food");
        assert_eq!(category.name, "Food");
        assert!(category.description.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::new("Food").to_string(), "Food");
        assert_eq!(
            Category::with_description("Food", "meals and snacks").to_string(),
            "Food: meals and snacks"
        );
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Valid");
        assert!(category.validate().is_ok());

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        );
    }
}
