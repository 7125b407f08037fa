//! Error types for `rollbook-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A raw field value failed its format contract. Raised at value-object
  /// construction, never deferred.
  #[error("invalid {field}: {constraint}")]
  Validation {
    field:      &'static str,
    constraint: &'static str,
  },

  #[error("this person already exists in the roster")]
  DuplicatePerson,

  #[error("person not found in the roster")]
  PersonNotFound,

  /// A role-specific mandatory field was absent at construction, e.g. a
  /// professor built without a module code.
  #[error("a {role} requires a {field}")]
  MissingField {
    role:  &'static str,
    field: &'static str,
  },

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
