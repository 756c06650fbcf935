//! `help` command

use crate::error::SaverResult;
use crate::parser::Arguments;
use crate::session::Session;

use super::Command;

/// Usage and description of one command, captured at registration time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

impl HelpEntry {
    pub fn of(command: &dyn Command) -> Self {
        Self {
            usage: command.usage(),
            description: command.description(),
        }
    }
}

/// Lists every registered command
#[derive(Debug, Default)]
pub struct HelpCommand {
    entries: Vec<HelpEntry>,
}

impl HelpCommand {
    pub fn new(entries: Vec<HelpEntry>) -> Self {
        Self { entries }
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands."
    }

    fn execute(&self, _arguments: &Arguments, _session: &mut Session) -> SaverResult<Vec<String>> {
        let mut lines = vec!["Here are all the commands you can use:".to_string()];
        for entry in &self.entries {
            lines.push(entry.usage.to_string());
            lines.push(format!("    {}", entry.description));
        }
        Ok(lines)
    }
}
