//! Edit the person at an index of the current filtered view.

use rollbook_core::descriptor::{EditDescriptor, create_edited_person};

use crate::{Command, CommandResult, Model, Result};

pub struct EditCommand {
  /// One-based, resolved against the filtered view at execution time.
  index:      usize,
  descriptor: EditDescriptor,
}

impl EditCommand {
  pub fn new(index: usize, descriptor: EditDescriptor) -> Self {
    Self { index, descriptor }
  }
}

impl Command for EditCommand {
  fn execute(&self, model: &mut Model) -> Result<CommandResult> {
    let target = model.person_at(self.index)?;
    // An empty descriptor resolves every field to the original, so the
    // replacement below is a successful no-op rather than a failure.
    let edited = create_edited_person(&target, &self.descriptor);
    model.roster_mut().set_person(&target, edited.clone())?;
    tracing::debug!(
      index = self.index,
      edited = self.descriptor.is_any_field_edited(),
      "edited person"
    );
    Ok(CommandResult::with_feedback(format!("Edited Person: {edited}")))
  }
}
