//! Commands available in the interactive loop
//!
//! Every command implements [`Command`] and is registered once in a
//! [`CommandRegistry`] under its keyword. Dispatch is a lookup by keyword
//! followed by a call through the trait object.

pub mod bye;
pub mod category;
pub mod help;
pub mod search;
pub mod transaction;
pub mod view;

pub use bye::ByeCommand;
pub use category::{AddCategoryCommand, DeleteCategoryCommand, ViewCategoryCommand};
pub use help::{HelpCommand, HelpEntry};
pub use search::SearchCommand;
pub use transaction::{AddTransactionCommand, DeleteTransactionCommand};
pub use view::{HistoryCommand, ViewTotalCommand, ViewTransactionsCommand};

use crate::error::SaverResult;
use crate::models::TransactionType;
use crate::parser::{self, Arguments};
use crate::services::TransactionFilter;
use crate::session::Session;

/// Key for the start of a date range
pub const FROM_KEY: &str = "f/";
/// Key for the end of a date range
pub const TO_KEY: &str = "t/";
/// Key for a category label
pub const CATEGORY_KEY: &str = "c/";
/// Key for an amount
pub const AMOUNT_KEY: &str = "a/";
/// Key for a date or timestamp
pub const DATE_KEY: &str = "d/";
/// Key for a category description
pub const DESCRIPTION_KEY: &str = "d/";
/// Key for search keywords
pub const KEYWORDS_KEY: &str = "k/";

/// A unit of user-invokable behaviour mapped from a keyword
pub trait Command {
    /// Keyword that selects this command
    fn name(&self) -> &'static str;

    /// One-line usage shown by `help`
    fn usage(&self) -> &'static str;

    /// Short description shown by `help`
    fn description(&self) -> &'static str;

    /// Keys this command reads from its argument text
    fn argument_keys(&self) -> &'static [&'static str] {
        &[]
    }

    /// Run the command and return the feedback lines to print
    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>>;
}

/// Keyword to command lookup table
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in command
    pub fn with_defaults() -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(AddCategoryCommand),
            Box::new(AddTransactionCommand::new(TransactionType::Income)),
            Box::new(AddTransactionCommand::new(TransactionType::Expense)),
            Box::new(DeleteCategoryCommand),
            Box::new(DeleteTransactionCommand),
            Box::new(ViewCategoryCommand),
            Box::new(ViewTransactionsCommand::new(TransactionType::Expense)),
            Box::new(ViewTransactionsCommand::new(TransactionType::Income)),
            Box::new(ViewTotalCommand),
            Box::new(HistoryCommand),
            Box::new(SearchCommand),
            Box::new(ByeCommand),
        ];

        let mut entries = vec![HelpEntry::of(&HelpCommand::default())];
        entries.extend(commands.iter().map(|c| HelpEntry::of(&**c)));

        let mut registry = Self::new();
        registry.register(Box::new(HelpCommand::new(entries)));
        for command in commands {
            registry.register(command);
        }

        log::debug!("registered {} commands", registry.len());
        registry
    }

    /// Add a command; when two share a keyword the first one wins
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Find a command by keyword (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .map(|c| &**c)
    }

    /// All registered commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build a filter from the optional `f/` and `t/` date arguments
pub(crate) fn date_range_filter(
    arguments: &Arguments,
    session: &Session,
) -> SaverResult<TransactionFilter> {
    let mut filter = TransactionFilter::new();
    if let Some(from) = arguments.get(FROM_KEY) {
        filter = filter.from(parser::parse_date(from, &session.settings)?);
    }
    if let Some(to) = arguments.get(TO_KEY) {
        filter = filter.to(parser::parse_date(to, &session.settings)?);
    }
    Ok(filter)
}
