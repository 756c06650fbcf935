//! Display formatting for terminal output
//!
//! Every formatter returns the feedback lines a command hands back to the
//! REPL; none of them print directly.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::format_totals;
pub use transaction::{format_transaction_line, format_transaction_table};
