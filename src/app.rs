//! The interactive command loop
//!
//! Reads one line at a time, dispatches it through the [`CommandRegistry`]
//! and prints each result between separator lines. Failures never end the
//! loop; only `bye` or end of input does.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::commands::CommandRegistry;
use crate::config::Settings;
use crate::error::SaverResult;
use crate::parser;
use crate::session::Session;

pub const GREETING: &str = "Hello, uNivUSaver is willing to help!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Session state plus the commands that act on it
pub struct App {
    pub session: Session,
    registry: CommandRegistry,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(settings),
            registry: CommandRegistry::with_defaults(),
        }
    }

    /// Run until `bye` or end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> SaverResult<()> {
        log::info!("Starting with {} commands", self.registry.len());
        writeln!(output, "{}{}", self.session.settings.prefix, GREETING)?;
        output.flush()?;

        let mut buffer = Vec::new();
        while self.session.is_running() {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                log::debug!("End of input");
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            if let Cow::Owned(_) = line {
                log::warn!("Replaced invalid UTF-8 in input line");
            }
            if line.trim().is_empty() {
                continue;
            }

            let feedback = self.handle_line(&line);
            self.print(&mut output, &feedback)?;
        }

        log::info!(
            "Stopping with {} transactions and {} categories",
            self.session.storage.transactions.len(),
            self.session.storage.categories.len()
        );
        Ok(())
    }

    /// Execute a single input line and return the feedback to show
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let Some((keyword, rest)) = parser::split_command(line) else {
            return Vec::new();
        };

        let Some(command) = self.registry.find(keyword) else {
            log::debug!("Unknown command keyword: {}", keyword);
            return vec![INVALID_COMMAND.to_string()];
        };

        let arguments = parser::extract_arguments(rest, command.argument_keys());
        match command.execute(&arguments, &mut self.session) {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("{} failed: {}", command.name(), e);
                vec![e.to_string()]
            }
        }
    }

    fn print<W: Write>(&self, output: &mut W, lines: &[String]) -> SaverResult<()> {
        let settings = &self.session.settings;
        writeln!(output, "{}{}", settings.prefix, settings.separator)?;
        for line in lines {
            writeln!(output, "{}{}", settings.prefix, line)?;
        }
        writeln!(output, "{}{}", settings.prefix, settings.separator)?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (App, String) {
        let mut app = App::new(Settings::default());
        let mut output = Vec::new();
        app.run(Cursor::new(script), &mut output).unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_greeting_is_first_line() {
        let (_, output) = run_script("");
        assert_eq!(output, format!("\t{}\n", GREETING));
    }

    #[test]
    fn test_result_is_bracketed_by_separators() {
        let (_, output) = run_script("bye\n");
        let lines: Vec<_> = output.lines().collect();
        let separator = format!("\t{}", Settings::default().separator);
        assert_eq!(lines[1], separator);
        assert_eq!(lines[2], "\tBye. Hope to see you again soon!");
        assert_eq!(lines[3], separator);
    }

    #[test]
    fn test_bye_stops_reading() {
        let (app, output) = run_script("bye\nadd-expense Lunch a/5\n");
        assert!(!app.session.is_running());
        assert!(app.session.storage.transactions.is_empty());
        assert!(!output.contains("Expense added"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (app, _) = run_script("add-income Allowance a/50\n");
        assert!(app.session.is_running());
        assert_eq!(app.session.storage.transactions.len(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (_, output) = run_script("\n   \n");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_loop() {
        let mut app = App::new(Settings::default());
        let mut output = Vec::new();
        let script = b"add-expense Lunch a/5\nadd-expense Caf\xe9 a/3\r\nadd-expense Bus a/2\nbye\n";
        app.run(Cursor::new(script.to_vec()), &mut output).unwrap();

        let descriptions: Vec<_> = app
            .session
            .storage
            .transactions
            .all()
            .iter()
            .map(|t| t.description.clone())
            .collect();
        assert_eq!(descriptions, vec!["Lunch", "Caf\u{FFFD}", "Bus"]);
        assert!(!app.session.is_running());
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let mut app = App::new(Settings::default());
        let lines = app.handle_line("add-income A a/92233720368547758");
        assert!(lines[0].starts_with("Amount cannot exceed"));

        app.handle_line("add-income A a/10000000000");
        app.handle_line("add-income B a/10000000000");
        let lines = app.handle_line("view-total");
        assert_eq!(lines[1], "Total income:  $20000000000.00 (2 transactions)");
    }

    #[test]
    fn test_unknown_keyword() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.handle_line("dance now"), vec![INVALID_COMMAND]);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let mut app = App::new(Settings::default());
        let lines = app.handle_line("ADD-CATEGORY Food");
        assert_eq!(lines[0], "Category added:");
    }

    #[test]
    fn test_errors_become_feedback() {
        let mut app = App::new(Settings::default());
        app.handle_line("add-expense Lunch a/5");

        let lines = app.handle_line("delete-transaction 9");
        assert_eq!(lines, vec!["Invalid transaction index: 9"]);
        assert_eq!(app.session.storage.transactions.len(), 1);

        let lines = app.handle_line("add-expense Lunch");
        assert_eq!(lines, vec!["Amount is required (a/AMOUNT)."]);
    }

    #[test]
    fn test_custom_prefix() {
        let settings = Settings {
            prefix: "> ".into(),
            ..Settings::default()
        };
        let mut app = App::new(settings);
        let mut output = Vec::new();
        app.run(Cursor::new("view-category\n"), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.lines().all(|l| l.starts_with("> ")));
    }
}
