//! Category display formatting

use crate::models::Category;

/// Format categories as a numbered list
pub fn format_category_list(categories: &[Category]) -> Vec<String> {
    if categories.is_empty() {
        return vec!["No categories found. Add one with add-category NAME.".to_string()];
    }

    categories
        .iter()
        .enumerate()
        .map(|(i, category)| format!("{}. {}", i + 1, category))
        .collect()
}
