//! Core domain types for the Rollbook roster.
//!
//! This crate is deliberately free of I/O and UI dependencies: validated
//! field value objects, the role-typed person model, the sparse edit
//! descriptor, the in-memory roster, and the filter predicates. The command
//! and CLI crates depend on it; it depends on nothing heavier than serde.

pub mod descriptor;
pub mod error;
pub mod field;
pub mod filter;
pub mod person;
pub mod roster;

pub use error::{Error, Result};
