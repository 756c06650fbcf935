//! Read-only views: `view-income`, `view-expense`, `view-total`, `history`

use crate::display::{format_totals, format_transaction_table};
use crate::error::SaverResult;
use crate::models::TransactionType;
use crate::parser::Arguments;
use crate::services::TransactionService;
use crate::session::Session;

use super::{date_range_filter, Command, CATEGORY_KEY, FROM_KEY, TO_KEY};

/// `view-income` / `view-expense [c/ CATEGORY] [f/ FROM] [t/ TO]`
#[derive(Debug)]
pub struct ViewTransactionsCommand {
    kind: TransactionType,
}

impl ViewTransactionsCommand {
    pub fn new(kind: TransactionType) -> Self {
        Self { kind }
    }

    fn noun(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => "income",
            TransactionType::Expense => "expenses",
        }
    }
}

impl Command for ViewTransactionsCommand {
    fn name(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => "view-income",
            TransactionType::Expense => "view-expense",
        }
    }

    fn usage(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => "view-income [c/ CATEGORY] [f/ FROM] [t/ TO]",
            TransactionType::Expense => "view-expense [c/ CATEGORY] [f/ FROM] [t/ TO]",
        }
    }

    fn description(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => "List income, optionally by category and date range.",
            TransactionType::Expense => "List expenses, optionally by category and date range.",
        }
    }

    fn argument_keys(&self) -> &'static [&'static str] {
        &[CATEGORY_KEY, FROM_KEY, TO_KEY]
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let mut filter = date_range_filter(arguments, session)?.kind(self.kind);
        if let Some(category) = arguments.get(CATEGORY_KEY) {
            filter = filter.category(category);
        }

        let service = TransactionService::new(&mut session.storage);
        let transactions = service.list(&filter)?;
        if transactions.is_empty() {
            return Ok(vec![format!("No {} found.", self.noun())]);
        }

        let total = service.totals(&filter)?.of_kind(self.kind);

        let mut lines = vec![format!("Here are your {}:", self.noun())];
        lines.extend(format_transaction_table(&transactions, &session.settings));
        lines.push(format!(
            "Total: {}",
            total.format_with_symbol(&session.settings.currency_symbol)
        ));
        Ok(lines)
    }
}

/// `view-total [f/ FROM] [t/ TO]`
#[derive(Debug)]
pub struct ViewTotalCommand;

impl Command for ViewTotalCommand {
    fn name(&self) -> &'static str {
        "view-total"
    }

    fn usage(&self) -> &'static str {
        "view-total [f/ FROM] [t/ TO]"
    }

    fn description(&self) -> &'static str {
        "Show total income, total expense and net balance."
    }

    fn argument_keys(&self) -> &'static [&'static str] {
        &[FROM_KEY, TO_KEY]
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let filter = date_range_filter(arguments, session)?;
        let totals = TransactionService::new(&mut session.storage).totals(&filter)?;

        let mut lines = vec!["Here is your summary:".to_string()];
        lines.extend(format_totals(&totals, &session.settings));
        Ok(lines)
    }
}

/// `history [f/ FROM] [t/ TO]`
#[derive(Debug)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn usage(&self) -> &'static str {
        "history [f/ FROM] [t/ TO]"
    }

    fn description(&self) -> &'static str {
        "List all transactions from oldest to newest."
    }

    fn argument_keys(&self) -> &'static [&'static str] {
        &[FROM_KEY, TO_KEY]
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let filter = date_range_filter(arguments, session)?;

        let service = TransactionService::new(&mut session.storage);
        let transactions = service.history(&filter)?;
        if transactions.is_empty() {
            return Ok(vec!["No transactions found.".to_string()]);
        }

        let mut lines = vec!["Here is your transaction history:".to_string()];
        lines.extend(format_transaction_table(&transactions, &session.settings));
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AddTransactionCommand;
    use crate::parser;

    fn run(command: &dyn Command, text: &str, session: &mut Session) -> SaverResult<Vec<String>> {
        let arguments = parser::extract_arguments(text, command.argument_keys());
        command.execute(&arguments, session)
    }

    fn seeded() -> Session {
        let mut session = Session::default();
        let income = AddTransactionCommand::new(TransactionType::Income);
        let expense = AddTransactionCommand::new(TransactionType::Expense);

        run(&income, "Allowance a/500 d/2024-10-01 c/Family", &mut session).unwrap();
        run(&expense, "Textbook a/45.90 d/2024-10-05 c/School", &mut session).unwrap();
        run(&expense, "Bubble tea a/4.20 d/2024-10-03 c/Food", &mut session).unwrap();
        run(&income, "Part-time a/120 d/2024-10-20 c/Work", &mut session).unwrap();
        session
    }

    #[test]
    fn test_view_expense() {
        let mut session = seeded();
        let view = ViewTransactionsCommand::new(TransactionType::Expense);

        let lines = run(&view, "", &mut session).unwrap();
        assert_eq!(lines[0], "Here are your expenses:");
        assert!(lines.iter().any(|l| l.contains("Textbook")));
        assert!(lines.iter().any(|l| l.contains("Bubble tea")));
        assert!(!lines.iter().any(|l| l.contains("Allowance")));
        assert_eq!(lines.last().unwrap(), "Total: $50.10");
    }

    #[test]
    fn test_view_expense_by_category() {
        let mut session = seeded();
        let view = ViewTransactionsCommand::new(TransactionType::Expense);

        let lines = run(&view, "c/ food", &mut session).unwrap();
        assert!(lines.iter().any(|l| l.contains("Bubble tea")));
        assert!(!lines.iter().any(|l| l.contains("Textbook")));

        let lines = run(&view, "c/ Rent", &mut session).unwrap();
        assert_eq!(lines, vec!["No expenses found."]);
    }

    #[test]
    fn test_view_income_in_range() {
        let mut session = seeded();
        let view = ViewTransactionsCommand::new(TransactionType::Income);

        let lines = run(&view, "f/2024-10-10", &mut session).unwrap();
        assert!(lines.iter().any(|l| l.contains("Part-time")));
        assert!(!lines.iter().any(|l| l.contains("Allowance")));
        assert_eq!(lines.last().unwrap(), "Total: $120.00");
    }

    #[test]
    fn test_view_rejects_unrepresentable_total() {
        let mut session = Session::default();
        let at = chrono::NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        for _ in 0..2 {
            session.storage.transactions.add(crate::models::Transaction::expense(
                "Yacht",
                crate::models::Money::from_cents(i64::MAX / 2 + 1),
                at,
            ));
        }
        let view = ViewTransactionsCommand::new(TransactionType::Expense);

        assert!(run(&view, "", &mut session).unwrap_err().is_validation());
        assert!(run(&ViewTotalCommand, "", &mut session).unwrap_err().is_validation());
    }

    #[test]
    fn test_view_total() {
        let mut session = seeded();

        let lines = run(&ViewTotalCommand, "", &mut session).unwrap();
        assert_eq!(
            lines,
            vec![
                "Here is your summary:",
                "Total income:  $620.00 (2 transactions)",
                "Total expense: $50.10 (2 transactions)",
                "Net balance:   $569.90",
            ]
        );

        let lines = run(&ViewTotalCommand, "t/2024-10-04", &mut session).unwrap();
        assert_eq!(lines[1], "Total income:  $500.00 (1 transaction)");
        assert_eq!(lines[2], "Total expense: $4.20 (1 transaction)");
    }

    #[test]
    fn test_history_is_chronological() {
        let mut session = seeded();

        let lines = run(&HistoryCommand, "", &mut session).unwrap();
        let order: Vec<_> = ["Allowance", "Bubble tea", "Textbook", "Part-time"]
            .iter()
            .map(|name| lines.iter().position(|l| l.contains(name)).unwrap())
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_history_empty_and_bad_range() {
        let mut session = Session::default();
        let lines = run(&HistoryCommand, "", &mut session).unwrap();
        assert_eq!(lines, vec!["No transactions found."]);

        let err = run(&HistoryCommand, "f/2024-10-10 t/2024-10-01", &mut session).unwrap_err();
        assert!(err.is_validation());
    }
}
