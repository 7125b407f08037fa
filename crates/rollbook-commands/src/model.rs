//! The model a command executes against: the roster plus the live filter.

use rollbook_core::{filter::PersonFilter, person::Person, roster::Roster};

use crate::{Error, Result};

/// Exclusively owned by the single execution context; one command runs to
/// completion before the next is accepted, so no locking exists here.
#[derive(Debug, Default)]
pub struct Model {
  roster: Roster,
  filter: PersonFilter,
}

impl Model {
  pub fn new(roster: Roster) -> Self {
    Self { roster, filter: PersonFilter::All }
  }

  pub fn roster(&self) -> &Roster { &self.roster }

  pub fn roster_mut(&mut self) -> &mut Roster { &mut self.roster }

  pub fn into_roster(self) -> Roster { self.roster }

  /// The current filtered view, recomputed from live roster state.
  pub fn filtered(&self) -> Vec<&Person> {
    self.roster.filtered_view(|p| self.filter.matches(p)).collect()
  }

  /// Resolve a one-based index against the filtered view.
  pub fn person_at(&self, one_based: usize) -> Result<Person> {
    if one_based == 0 {
      return Err(Error::InvalidIndex);
    }
    self
      .filtered()
      .get(one_based - 1)
      .map(|p| (*p).clone())
      .ok_or(Error::InvalidIndex)
  }

  pub fn filter(&self) -> &PersonFilter { &self.filter }

  pub fn set_filter(&mut self, filter: PersonFilter) {
    self.filter = filter;
  }

  pub fn reset_filter(&mut self) { self.filter = PersonFilter::All; }
}
