//! Session commands: help and exit. Neither touches the roster; they only
//! raise the UI-mode flags on the result.

use crate::{Command, CommandResult, Model, Result};

pub struct HelpCommand;

impl Command for HelpCommand {
  fn execute(&self, _model: &mut Model) -> Result<CommandResult> {
    Ok(CommandResult {
      feedback:  "Opened help window.".to_owned(),
      show_help: true,
      exit:      false,
    })
  }
}

pub struct ExitCommand;

impl Command for ExitCommand {
  fn execute(&self, _model: &mut Model) -> Result<CommandResult> {
    Ok(CommandResult {
      feedback:  "Exiting Rollbook as requested ...".to_owned(),
      show_help: false,
      exit:      true,
    })
  }
}
