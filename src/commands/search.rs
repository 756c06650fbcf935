//! `search` command

use crate::display::format_transaction_table;
use crate::error::{SaverError, SaverResult};
use crate::parser::Arguments;
use crate::services::TransactionService;
use crate::session::Session;

use super::{Command, KEYWORDS_KEY};

/// `search k/ KEYWORDS`
///
/// Keywords may also be given without the `k/` key; bare keywords and
/// `k/` keywords are searched together.
#[derive(Debug)]
pub struct SearchCommand;

impl Command for SearchCommand {
    fn name(&self) -> &'static str {
        "search"
    }

    fn usage(&self) -> &'static str {
        "search k/ KEYWORDS"
    }

    fn description(&self) -> &'static str {
        "Find transactions whose description or category contains any keyword."
    }

    fn argument_keys(&self) -> &'static [&'static str] {
        &[KEYWORDS_KEY]
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let keywords: Vec<&str> = arguments
            .main()
            .split_whitespace()
            .chain(arguments.get(KEYWORDS_KEY).unwrap_or_default().split_whitespace())
            .collect();
        if keywords.is_empty() {
            return Err(SaverError::Validation(
                "Please provide at least one keyword (k/KEYWORDS).".into(),
            ));
        }

        let service = TransactionService::new(&mut session.storage);
        let matches = service.search(&keywords)?;
        if matches.is_empty() {
            return Ok(vec![format!("No transactions match: {}", keywords.join(", "))]);
        }

        let mut lines = vec![format!(
            "Found {} matching transaction(s) for: {}",
            matches.len(),
            keywords.join(", ")
        )];
        lines.extend(format_transaction_table(&matches, &session.settings));
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::parser;
    use chrono::NaiveDate;

    fn session_with(descriptions: &[&str]) -> Session {
        let mut session = Session::default();
        let at = NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        for description in descriptions {
            session
                .storage
                .transactions
                .add(Transaction::expense(*description, Money::from_cents(300), at));
        }
        session
    }

    fn run(text: &str, session: &mut Session) -> SaverResult<Vec<String>> {
        let arguments = parser::extract_arguments(text, SearchCommand.argument_keys());
        SearchCommand.execute(&arguments, session)
    }

    #[test]
    fn test_search_with_key() {
        let mut session = session_with(&["Iced coffee", "Bus fare", "Coffee beans"]);

        let lines = run("k/ COFFEE", &mut session).unwrap();
        assert_eq!(lines[0], "Found 2 matching transaction(s) for: COFFEE");
        assert!(lines.iter().any(|l| l.contains("Iced coffee")));
        assert!(lines.iter().any(|l| l.contains("Coffee beans")));
        assert!(!lines.iter().any(|l| l.contains("Bus fare")));
    }

    #[test]
    fn test_search_without_key() {
        let mut session = session_with(&["Iced coffee", "Bus fare"]);

        let lines = run("bus tea", &mut session).unwrap();
        assert_eq!(lines[0], "Found 1 matching transaction(s) for: bus, tea");
    }

    #[test]
    fn test_search_merges_bare_and_keyed_keywords() {
        let mut session = session_with(&["Iced coffee", "Bus fare", "Movie night"]);

        let lines = run("bus k/ movie", &mut session).unwrap();
        assert_eq!(lines[0], "Found 2 matching transaction(s) for: bus, movie");
        assert!(lines.iter().any(|l| l.contains("Bus fare")));
        assert!(lines.iter().any(|l| l.contains("Movie night")));
    }

    #[test]
    fn test_search_no_match() {
        let mut session = session_with(&["Bus fare"]);
        let lines = run("k/ movie", &mut session).unwrap();
        assert_eq!(lines, vec!["No transactions match: movie"]);
    }

    #[test]
    fn test_search_requires_keyword() {
        let mut session = session_with(&["Bus fare"]);
        assert!(run("", &mut session).unwrap_err().is_validation());
    }
}
