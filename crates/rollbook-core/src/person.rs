//! The person variant model — a closed set of role-typed contacts.
//!
//! A person is an immutable value record: one of three role variants over a
//! shared common payload. Editing never mutates in place; it produces a new
//! instance (see [`crate::descriptor`]). The variant tag is fixed at
//! construction and survives every edit.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{
    Email, Gender, GithubUsername, Location, ModuleCode, Name, OfficeHour,
    Phone, Rating, Specialisation, Tag, Year,
  },
};

// ─── Common payload ──────────────────────────────────────────────────────────

/// The fields every person carries regardless of role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
  pub name:     Name,
  pub phone:    Phone,
  pub email:    Email,
  pub gender:   Gender,
  /// Semantically unordered; kept sorted so rendering is deterministic.
  pub tags:     BTreeSet<Tag>,
  pub location: Location,
  pub username: GithubUsername,
}

// ─── Variants ────────────────────────────────────────────────────────────────

/// A student, enrolled in zero or more modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  #[serde(flatten)]
  pub data:         PersonData,
  pub module_codes: BTreeSet<ModuleCode>,
}

/// A professor, teaching exactly one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
  #[serde(flatten)]
  pub data:           PersonData,
  pub module_code:    ModuleCode,
  pub rating:         Rating,
  pub specialisation: Specialisation,
}

/// A teaching assistant, assisting for exactly one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingAssistant {
  #[serde(flatten)]
  pub data:        PersonData,
  pub module_code: ModuleCode,
  pub rating:      Rating,
  pub office_hour: OfficeHour,
  pub year:        Year,
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A roster entry. The serde tag doubles as the persisted type tag, so each
/// variant round-trips through `"type"` plus its full field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Person {
  #[serde(rename = "stu")]
  Student(Student),
  #[serde(rename = "prof")]
  Professor(Professor),
  #[serde(rename = "ta")]
  TeachingAssistant(TeachingAssistant),
}

impl Person {
  /// Assemble a student. A student's module set may be empty.
  pub fn student(
    data: PersonData,
    module_codes: BTreeSet<ModuleCode>,
  ) -> Self {
    Self::Student(Student { data, module_codes })
  }

  /// Assemble a professor. The module code is mandatory for this role;
  /// rating and specialisation may be absent.
  pub fn professor(
    data: PersonData,
    module_code: Option<ModuleCode>,
    rating: Rating,
    specialisation: Specialisation,
  ) -> Result<Self> {
    let module_code = module_code.ok_or(Error::MissingField {
      role:  "professor",
      field: "module code",
    })?;
    Ok(Self::Professor(Professor {
      data,
      module_code,
      rating,
      specialisation,
    }))
  }

  /// Assemble a teaching assistant. The module code is mandatory for this
  /// role; rating, office hour, and year may be absent.
  pub fn teaching_assistant(
    data: PersonData,
    module_code: Option<ModuleCode>,
    rating: Rating,
    office_hour: OfficeHour,
    year: Year,
  ) -> Result<Self> {
    let module_code = module_code.ok_or(Error::MissingField {
      role:  "teaching assistant",
      field: "module code",
    })?;
    Ok(Self::TeachingAssistant(TeachingAssistant {
      data,
      module_code,
      rating,
      office_hour,
      year,
    }))
  }

  /// The stable short code persisted with each record. Display and
  /// persistence only; callers dispatch through the operations below, never
  /// by inspecting the tag.
  pub fn type_tag(&self) -> &'static str {
    match self {
      Self::Student(_) => "stu",
      Self::Professor(_) => "prof",
      Self::TeachingAssistant(_) => "ta",
    }
  }

  /// The role name used in user-facing messages.
  pub fn role_name(&self) -> &'static str {
    match self {
      Self::Student(_) => "Student",
      Self::Professor(_) => "Professor",
      Self::TeachingAssistant(_) => "Teaching Assistant",
    }
  }

  /// The common payload shared by every variant.
  pub fn data(&self) -> &PersonData {
    match self {
      Self::Student(s) => &s.data,
      Self::Professor(p) => &p.data,
      Self::TeachingAssistant(t) => &t.data,
    }
  }

  /// This person's module codes folded to lowercase for matching. A student
  /// contributes its full set; a professor or TA contributes a singleton.
  pub fn module_codes_folded(&self) -> BTreeSet<String> {
    match self {
      Self::Student(s) => {
        s.module_codes.iter().map(ModuleCode::folded).collect()
      }
      Self::Professor(p) => BTreeSet::from([p.module_code.folded()]),
      Self::TeachingAssistant(t) => BTreeSet::from([t.module_code.folded()]),
    }
  }

  /// Module matching: set equality when `require_all`, otherwise a
  /// non-empty intersection. Both sides are folded to lowercase first.
  pub fn matches_modules(
    &self,
    requested: &BTreeSet<String>,
    require_all: bool,
  ) -> bool {
    let mine = self.module_codes_folded();
    let requested: BTreeSet<String> =
      requested.iter().map(|m| m.to_ascii_lowercase()).collect();
    if require_all {
      mine == requested
    } else {
      mine.intersection(&requested).next().is_some()
    }
  }

  /// Duplicate detection. Professors and TAs are keyed by name and the
  /// module they are tied to; students are keyed by name alone. The
  /// asymmetry is a domain rule, not an oversight.
  pub fn same_identity(&self, other: &Person) -> bool {
    match (self, other) {
      (Self::Student(a), Self::Student(b)) => {
        a.data.name.matches_ignore_case(&b.data.name)
      }
      (Self::Professor(a), Self::Professor(b)) => {
        a.data.name.matches_ignore_case(&b.data.name)
          && a.module_code == b.module_code
      }
      (Self::TeachingAssistant(a), Self::TeachingAssistant(b)) => {
        a.data.name.matches_ignore_case(&b.data.name)
          && a.module_code == b.module_code
      }
      _ => false,
    }
  }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

/// One deterministic human-readable line per person, in a fixed field order:
/// name, module info, role extras, phone, email, gender, username if
/// present, location, tags if any. Absent optional fields are omitted
/// entirely, never rendered as placeholders.
impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let data = self.data();
    write!(f, "{}", data.name)?;

    match self {
      Self::Student(s) => {
        if !s.module_codes.is_empty() {
          let codes: Vec<&str> =
            s.module_codes.iter().map(ModuleCode::as_str).collect();
          write!(f, "; Module Codes: {}", codes.join(" "))?;
        }
      }
      Self::Professor(p) => {
        write!(f, "; Module Code: {}", p.module_code)?;
        if p.rating.is_present() {
          write!(f, "; Rating: {}", p.rating)?;
        }
        if p.specialisation.is_present() {
          write!(f, "; Specialisation: {}", p.specialisation)?;
        }
      }
      Self::TeachingAssistant(t) => {
        write!(f, "; Module Code: {}", t.module_code)?;
        if t.rating.is_present() {
          write!(f, "; Rating: {}", t.rating)?;
        }
        if t.office_hour.is_present() {
          write!(f, "; Office Hour: {}", t.office_hour)?;
        }
        if t.year.is_present() {
          write!(f, "; Year: {}", t.year)?;
        }
      }
    }

    write!(
      f,
      "; Phone: {}; Email: {}; Gender: {}",
      data.phone, data.email, data.gender
    )?;
    if data.username.is_present() {
      write!(f, "; Github Username: {}", data.username)?;
    }
    write!(f, "; Location: {}", data.location)?;
    if !data.tags.is_empty() {
      write!(f, "; Tags: ")?;
      for tag in &data.tags {
        write!(f, "{tag}")?;
      }
    }
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
