//! Service layer for uNivUSaver
//!
//! The service layer provides business logic on top of the in-memory
//! storage: validation, filtering and aggregation.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::{
    CreateTransactionInput, Positioned, Totals, TransactionFilter, TransactionService,
};
