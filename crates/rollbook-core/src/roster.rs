//! The roster — the single in-memory collection of persons.
//!
//! Insertion order is preserved for display only. Uniqueness is enforced by
//! [`Person::same_identity`]; no two entries may share an identity.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, person::Person};

/// An ordered, duplicate-free sequence of persons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
  persons: Vec<Person>,
}

impl Roster {
  /// True iff an entry with the same identity as `person` exists.
  pub fn has(&self, person: &Person) -> bool {
    self.persons.iter().any(|p| p.same_identity(person))
  }

  /// Append `person`, rejecting identity collisions.
  pub fn add(&mut self, person: Person) -> Result<()> {
    if self.has(&person) {
      return Err(Error::DuplicatePerson);
    }
    self.persons.push(person);
    Ok(())
  }

  /// Remove the entry sharing `person`'s identity.
  pub fn remove(&mut self, person: &Person) -> Result<()> {
    let idx = self
      .persons
      .iter()
      .position(|p| p.same_identity(person))
      .ok_or(Error::PersonNotFound)?;
    self.persons.remove(idx);
    Ok(())
  }

  /// Replace the entry sharing `old`'s identity with `new`, in place.
  ///
  /// Fails with [`Error::DuplicatePerson`] if `new` collides with any entry
  /// other than the one being replaced.
  pub fn set_person(&mut self, old: &Person, new: Person) -> Result<()> {
    let idx = self
      .persons
      .iter()
      .position(|p| p.same_identity(old))
      .ok_or(Error::PersonNotFound)?;
    let collides = self
      .persons
      .iter()
      .enumerate()
      .any(|(i, p)| i != idx && p.same_identity(&new));
    if collides {
      return Err(Error::DuplicatePerson);
    }
    self.persons[idx] = new;
    Ok(())
  }

  /// Remove every entry.
  pub fn clear(&mut self) { self.persons.clear(); }

  /// A lazy, restartable view over the live roster state; not a snapshot.
  pub fn filtered_view<'a, F>(
    &'a self,
    predicate: F,
  ) -> impl Iterator<Item = &'a Person>
  where
    F: Fn(&Person) -> bool + 'a,
  {
    self.persons.iter().filter(move |p| predicate(p))
  }

  pub fn iter(&self) -> impl Iterator<Item = &Person> {
    self.persons.iter()
  }

  pub fn len(&self) -> usize { self.persons.len() }

  pub fn is_empty(&self) -> bool { self.persons.is_empty() }

  // ── Snapshot boundary ─────────────────────────────────────────────────

  /// Rebuild a roster from an external list-of-records snapshot, applying
  /// the same duplicate rules as interactive adds.
  pub fn from_records(records: Vec<Person>) -> Result<Self> {
    let mut roster = Self::default();
    for person in records {
      roster.add(person)?;
    }
    Ok(roster)
  }

  /// The roster as a plain list of records, in insertion order.
  pub fn to_records(&self) -> Vec<Person> { self.persons.clone() }

  /// Decode a roster from a JSON snapshot.
  pub fn from_json(bytes: &[u8]) -> Result<Self> {
    let records: Vec<Person> = serde_json::from_slice(bytes)?;
    Self::from_records(records)
  }

  /// Encode the roster as a JSON snapshot.
  pub fn to_json(&self) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&self.persons)?)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
