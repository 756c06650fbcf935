//! Totals display formatting

use crate::config::Settings;
use crate::services::Totals;

/// Format income, expense and net balance lines
pub fn format_totals(totals: &Totals, settings: &Settings) -> Vec<String> {
    let symbol = settings.currency_symbol.as_str();
    vec![
        format!(
            "Total income:  {} ({} {})",
            totals.income.format_with_symbol(symbol),
            totals.income_count,
            plural(totals.income_count)
        ),
        format!(
            "Total expense: {} ({} {})",
            totals.expense.format_with_symbol(symbol),
            totals.expense_count,
            plural(totals.expense_count)
        ),
        format!("Net balance:   {}", totals.net().format_with_symbol(symbol)),
    ]
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "transaction"
    } else {
        "transactions"
    }
}
