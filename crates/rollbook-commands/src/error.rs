//! Error types for `rollbook-commands`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The requested index falls outside the current filtered view.
  #[error("the person index provided is invalid")]
  InvalidIndex,

  /// Domain failures propagate unrecovered; their messages are rendered
  /// verbatim to the user.
  #[error(transparent)]
  Core(#[from] rollbook_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
