//! Delete the person at an index of the current filtered view.

use crate::{Command, CommandResult, Model, Result};

pub struct DeleteCommand {
  /// One-based, resolved against the filtered view at execution time.
  index: usize,
}

impl DeleteCommand {
  pub fn new(index: usize) -> Self { Self { index } }
}

impl Command for DeleteCommand {
  fn execute(&self, model: &mut Model) -> Result<CommandResult> {
    let target = model.person_at(self.index)?;
    model.roster_mut().remove(&target)?;
    tracing::debug!(index = self.index, "deleted person");
    Ok(CommandResult::with_feedback(format!("Deleted Person: {target}")))
  }
}
