//! Storage layer for uNivUSaver
//!
//! Everything lives in memory for the lifetime of the process; nothing is
//! written to disk.

pub mod categories;
pub mod transactions;

pub use categories::CategoryList;
pub use transactions::TransactionList;

/// Coordinator that owns every list the commands operate on
#[derive(Debug, Default)]
pub struct Storage {
    pub transactions: TransactionList,
    pub categories: CategoryList,
}

impl Storage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_creation() {
        let storage = Storage::new();
        assert!(storage.transactions.is_empty());
        assert!(storage.categories.is_empty());
    }
}
