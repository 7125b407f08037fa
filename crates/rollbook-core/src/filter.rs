//! Filter predicates — the multi-criteria matchers installed by a find.

use std::collections::BTreeSet;

use crate::person::Person;

/// A predicate over persons. Closed so that matching stays a total function
/// over both the filter and the person variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
  /// Matches everyone; the state a list command restores.
  #[default]
  All,
  /// Any keyword equals a whole word of the name, case-insensitively.
  NameContainsKeywords(Vec<String>),
  /// Any queried tag equals one of the person's tags, case-insensitively.
  HasAnyTag(Vec<String>),
  /// Delegates to [`Person::matches_modules`].
  ModulesMatch {
    modules:     BTreeSet<String>,
    require_all: bool,
  },
}

impl PersonFilter {
  pub fn matches(&self, person: &Person) -> bool {
    match self {
      Self::All => true,
      Self::NameContainsKeywords(keywords) => person
        .data()
        .name
        .as_str()
        .split_whitespace()
        .any(|word| {
          keywords.iter().any(|kw| kw.eq_ignore_ascii_case(word))
        }),
      Self::HasAnyTag(queried) => person.data().tags.iter().any(|tag| {
        queried.iter().any(|q| q.eq_ignore_ascii_case(tag.as_str()))
      }),
      Self::ModulesMatch { modules, require_all } => {
        person.matches_modules(modules, *require_all)
      }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    field::{
      Email, Gender, GithubUsername, Location, ModuleCode, Name, Phone, Tag,
    },
    person::PersonData,
  };

  fn student(name: &str, codes: &[&str], tags: &[&str]) -> Person {
    Person::student(
      PersonData {
        name:     Name::new(name).unwrap(),
        phone:    Phone::new("91234567").unwrap(),
        email:    Email::new("x@example.com").unwrap(),
        gender:   Gender::new("M").unwrap(),
        tags:     tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        location: Location::new("COM1").unwrap(),
        username: GithubUsername::absent(),
      },
      codes.iter().map(|c| ModuleCode::new(c).unwrap()).collect(),
    )
  }

  #[test]
  fn all_matches_everyone() {
    assert!(PersonFilter::All.matches(&student("Amy", &[], &[])));
  }

  #[test]
  fn name_keywords_match_whole_words_any_case() {
    let p = student("John Doe", &[], &[]);
    let f = PersonFilter::NameContainsKeywords(vec!["john".into()]);
    assert!(f.matches(&p));
    let f = PersonFilter::NameContainsKeywords(vec!["Jo".into()]);
    assert!(!f.matches(&p));
  }

  #[test]
  fn tag_filter_ignores_case() {
    let p = student("John Doe", &[], &["owesMoney"]);
    let f = PersonFilter::HasAnyTag(vec!["OWESMONEY".into()]);
    assert!(f.matches(&p));
    let f = PersonFilter::HasAnyTag(vec!["friends".into()]);
    assert!(!f.matches(&p));
  }

  #[test]
  fn module_filter_delegates_to_person_matching() {
    let p = student("John Doe", &["CS1101S", "CS4226"], &[]);
    let f = PersonFilter::ModulesMatch {
      modules:     BTreeSet::from(["cs1101s".to_owned()]),
      require_all: false,
    };
    assert!(f.matches(&p));
    let f = PersonFilter::ModulesMatch {
      modules:     BTreeSet::from(["cs1101s".to_owned()]),
      require_all: true,
    };
    assert!(!f.matches(&p));
  }
}
