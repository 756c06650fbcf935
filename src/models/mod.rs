//! Core data models for uNivUSaver
//!
//! Plain data holders for money amounts, transactions and categories.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
