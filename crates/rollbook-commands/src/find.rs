//! Narrow the filtered view; never mutates the roster.

use rollbook_core::filter::PersonFilter;

use crate::{Command, CommandResult, Model, Result};

pub struct FindCommand {
  filter: PersonFilter,
}

impl FindCommand {
  pub fn new(filter: PersonFilter) -> Self { Self { filter } }
}

impl Command for FindCommand {
  fn execute(&self, model: &mut Model) -> Result<CommandResult> {
    model.set_filter(self.filter.clone());
    // An empty result is a valid success, not an error.
    let listed = model.filtered().len();
    tracing::debug!(listed, "installed find filter");
    Ok(CommandResult::with_feedback(format!("{listed} persons listed!")))
  }
}
