//! List everyone, and clear the roster.

use crate::{Command, CommandResult, Model, Result};

// ─── List ─────────────────────────────────────────────────────────────────────

/// Reset the filter and render every entry, one line each, in insertion
/// order.
pub struct ListCommand;

impl Command for ListCommand {
  fn execute(&self, model: &mut Model) -> Result<CommandResult> {
    model.reset_filter();
    let mut feedback = String::from("Listed all persons");
    for person in model.filtered() {
      feedback.push('\n');
      feedback.push_str(&person.to_string());
    }
    Ok(CommandResult::with_feedback(feedback))
  }
}

// ─── Clear ────────────────────────────────────────────────────────────────────

/// Empty the roster entirely.
pub struct ClearCommand;

impl Command for ClearCommand {
  fn execute(&self, model: &mut Model) -> Result<CommandResult> {
    model.roster_mut().clear();
    model.reset_filter();
    tracing::debug!("cleared roster");
    Ok(CommandResult::with_feedback("Roster has been cleared!"))
  }
}
