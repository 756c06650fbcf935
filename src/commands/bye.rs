//! `bye` command

use crate::error::SaverResult;
use crate::parser::Arguments;
use crate::session::Session;

use super::Command;

/// Stops the command loop
#[derive(Debug)]
pub struct ByeCommand;

impl Command for ByeCommand {
    fn name(&self) -> &'static str {
        "bye"
    }

    fn usage(&self) -> &'static str {
        "bye"
    }

    fn description(&self) -> &'static str {
        "Exit the program."
    }

    fn execute(&self, _arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        session.stop();
        Ok(vec!["Bye. Hope to see you again soon!".to_string()])
    }
}
