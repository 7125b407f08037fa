//! Command layer for Rollbook.
//!
//! Each command is a stateless request object holding already-validated
//! value objects (built by the parsing layer) plus one `execute` method.
//! Every execution is an atomic, synchronous request/response against the
//! [`Model`]; failures surface once, verbatim, as user-facing messages.

pub mod add;
pub mod delete;
pub mod edit;
pub mod error;
pub mod find;
pub mod list;
pub mod model;
pub mod session;


pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use error::{Error, Result};
pub use find::FindCommand;
pub use list::{ClearCommand, ListCommand};
pub use model::Model;
pub use session::{ExitCommand, HelpCommand};

// ─── Result of a command ─────────────────────────────────────────────────────

/// What a successful execution hands back to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
  /// The display message.
  pub feedback:  String,
  /// The UI should show its help surface.
  pub show_help: bool,
  /// The UI should terminate the session.
  pub exit:      bool,
}

impl CommandResult {
  pub fn with_feedback(feedback: impl Into<String>) -> Self {
    Self {
      feedback:  feedback.into(),
      show_help: false,
      exit:      false,
    }
  }
}

// ─── Command trait ────────────────────────────────────────────────────────────

/// A single executable operation against the roster model.
pub trait Command {
  fn execute(&self, model: &mut Model) -> Result<CommandResult>;
}
