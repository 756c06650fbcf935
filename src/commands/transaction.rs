//! Transaction commands: `add-income`, `add-expense`, `delete-transaction`

use crate::display::format_transaction_line;
use crate::error::SaverResult;
use crate::models::TransactionType;
use crate::parser::{self, Arguments};
use crate::services::{CategoryService, CreateTransactionInput, TransactionService};
use crate::session::Session;

use super::{Command, AMOUNT_KEY, CATEGORY_KEY, DATE_KEY};

/// `add-income` / `add-expense DESCRIPTION a/ AMOUNT [d/ DATE] [c/ CATEGORY]`
#[derive(Debug)]
pub struct AddTransactionCommand {
    kind: TransactionType,
}

impl AddTransactionCommand {
    pub fn new(kind: TransactionType) -> Self {
        Self { kind }
    }
}

impl Command for AddTransactionCommand {
    fn name(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => "add-income",
            TransactionType::Expense => "add-expense",
        }
    }

    fn usage(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => {
                "add-income DESCRIPTION a/ AMOUNT [d/ DATE] [c/ CATEGORY]"
            }
            TransactionType::Expense => {
                "add-expense DESCRIPTION a/ AMOUNT [d/ DATE] [c/ CATEGORY]"
            }
        }
    }

    fn description(&self) -> &'static str {
        match self.kind {
            TransactionType::Income => "Record money received. DATE defaults to now.",
            TransactionType::Expense => "Record money spent. DATE defaults to now.",
        }
    }

    fn argument_keys(&self) -> &'static [&'static str] {
        &[AMOUNT_KEY, DATE_KEY, CATEGORY_KEY]
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let description = arguments.require_main("Description")?;
        let amount = parser::parse_amount(arguments.require(AMOUNT_KEY, "Amount")?)?;
        let timestamp = match arguments.get(DATE_KEY) {
            Some(date) => parser::parse_timestamp(date, &session.settings)?,
            None => session.now(),
        };
        let category = arguments.get(CATEGORY_KEY).map(str::to_string);

        let unknown_category = category
            .as_deref()
            .filter(|name| !CategoryService::new(&mut session.storage).exists(name))
            .map(str::to_string);

        let (position, txn) = TransactionService::new(&mut session.storage).create(
            CreateTransactionInput {
                kind: self.kind,
                description: description.to_string(),
                amount,
                category,
                timestamp,
            },
        )?;

        let mut lines = vec![
            format!("{} added:", self.kind),
            format!("{}. {}", position, format_transaction_line(&txn, &session.settings)),
        ];
        if let Some(name) = unknown_category {
            lines.push(format!(
                "Note: '{}' is not in your category list. Add it with add-category.",
                name
            ));
        }
        Ok(lines)
    }
}

/// `delete-transaction INDEX`
#[derive(Debug)]
pub struct DeleteTransactionCommand;

impl Command for DeleteTransactionCommand {
    fn name(&self) -> &'static str {
        "delete-transaction"
    }

    fn usage(&self) -> &'static str {
        "delete-transaction INDEX"
    }

    fn description(&self) -> &'static str {
        "Delete the transaction at INDEX (as shown by history)."
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let position = parser::parse_position(arguments.require_main("Transaction index")?)?;

        let removed = TransactionService::new(&mut session.storage).delete(position)?;

        Ok(vec![
            "Transaction removed:".to_string(),
            format_transaction_line(&removed, &session.settings),
        ])
    }
}
