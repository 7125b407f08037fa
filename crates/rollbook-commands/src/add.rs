//! Add a person (of any variant) to the roster.

use rollbook_core::person::Person;

use crate::{Command, CommandResult, Model, Result};

pub struct AddCommand {
  person: Person,
}

impl AddCommand {
  pub fn new(person: Person) -> Self { Self { person } }
}

impl Command for AddCommand {
  fn execute(&self, model: &mut Model) -> Result<CommandResult> {
    model.roster_mut().add(self.person.clone())?;
    tracing::debug!(kind = self.person.type_tag(), "added person");
    Ok(CommandResult::with_feedback(format!(
      "New {} added: {}",
      self.person.role_name(),
      self.person
    )))
  }
}
