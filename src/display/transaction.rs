//! Transaction display formatting
//!
//! Renders transactions as feedback lines: a one-line summary for add and
//! delete confirmations, and a table for listings.

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;
use crate::services::Positioned;

/// Table row for a transaction listing
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

fn format_timestamp(txn: &Transaction, settings: &Settings) -> String {
    txn.timestamp
        .format(&settings.timestamp_format())
        .to_string()
}

/// Format a single transaction on one line
pub fn format_transaction_line(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "[{}] {} {} ({}) on {}",
        txn.kind,
        txn.description,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.category.as_deref().unwrap_or("Uncategorized"),
        format_timestamp(txn, settings)
    )
}

/// Format transactions as a table, one output line per table line
pub fn format_transaction_table(transactions: &[Positioned<'_>], settings: &Settings) -> Vec<String> {
    if transactions.is_empty() {
        return vec!["No transactions found.".to_string()];
    }

    let rows = transactions.iter().map(|(position, txn)| TransactionRow {
        position: *position,
        kind: txn.kind.to_string(),
        description: txn.description.clone(),
        amount: txn.amount.format_with_symbol(&settings.currency_symbol),
        category: txn.category.clone().unwrap_or_else(|| "-".to_string()),
        date: format_timestamp(txn, settings),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    table.to_string().lines().map(String::from).collect()
}
