//! Field value objects — the validated building blocks of a person record.
//!
//! Every type here wraps a single raw value and enforces its format at
//! construction; a value that exists is a value that passed validation.
//! Several types additionally carry an explicit absent state (a person may
//! simply not have a rating), which is distinct from a present-but-empty
//! value and never compares equal to one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Name ────────────────────────────────────────────────────────────────────

/// A person's name. First character alphanumeric, the rest alphanumeric or
/// spaces, never blank.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
  pub fn new(raw: &str) -> Result<Self> {
    if is_valid_name(raw) {
      Ok(Self(raw.to_owned()))
    } else {
      Err(Error::Validation {
        field:      "name",
        constraint: "names should be alphanumeric words separated by spaces",
      })
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// Case-insensitive comparison; identity checks normalise casing.
  pub fn matches_ignore_case(&self, other: &Name) -> bool {
    self.0.eq_ignore_ascii_case(&other.0)
  }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

fn is_valid_name(s: &str) -> bool {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphanumeric() => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A phone number: ASCII digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
  pub fn new(raw: &str) -> Result<Self> {
    let valid = raw.len() >= 3 && raw.chars().all(|c| c.is_ascii_digit());
    if valid {
      Ok(Self(raw.to_owned()))
    } else {
      Err(Error::Validation {
        field:      "phone",
        constraint: "phone numbers should be at least 3 digits",
      })
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// An email address of the form `local@domain`.
///
/// The local part allows alphanumerics and `+_.-`; the domain is dot-joined
/// labels of alphanumerics with inner hyphens, the last label at least two
/// characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
  pub fn new(raw: &str) -> Result<Self> {
    if is_valid_email(raw) {
      Ok(Self(raw.to_owned()))
    } else {
      Err(Error::Validation {
        field:      "email",
        constraint: "emails should be of the form local-part@domain",
      })
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

fn is_valid_email(s: &str) -> bool {
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  if !local
    .chars()
    .all(|c| c.is_ascii_alphanumeric() || "+_.-".contains(c))
  {
    return false;
  }
  let labels: Vec<&str> = domain.split('.').collect();
  match labels.last() {
    Some(last) if last.len() >= 2 => {}
    _ => return false,
  }
  labels.iter().all(|label| {
    !label.is_empty()
      && !label.starts_with('-')
      && !label.ends_with('-')
      && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
  })
}

// ─── Gender ──────────────────────────────────────────────────────────────────

/// `M` or `F`, accepted in any casing and stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gender(String);

impl Gender {
  pub fn new(raw: &str) -> Result<Self> {
    if raw.eq_ignore_ascii_case("m") || raw.eq_ignore_ascii_case("f") {
      Ok(Self(raw.to_ascii_uppercase()))
    } else {
      Err(Error::Validation {
        field:      "gender",
        constraint: "gender should be M or F",
      })
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// A free-text location; the only constraint is that it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
  pub fn new(raw: &str) -> Result<Self> {
    if raw.trim().is_empty() {
      Err(Error::Validation {
        field:      "location",
        constraint: "locations should not be blank",
      })
    } else {
      Ok(Self(raw.to_owned()))
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── ModuleCode ──────────────────────────────────────────────────────────────

/// A module code: 2–4 letter prefix, 4 digits, up to 2 trailing letters
/// (e.g. `CS1101S`, `GEQ1000`). Stored uppercase so equality is
/// case-normalised; matching folds to lowercase.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ModuleCode(String);

impl ModuleCode {
  pub fn new(raw: &str) -> Result<Self> {
    if is_valid_module_code(raw) {
      Ok(Self(raw.to_ascii_uppercase()))
    } else {
      Err(Error::Validation {
        field:      "module code",
        constraint: "module codes should be 2-4 letters, 4 digits, and up \
                     to 2 trailing letters",
      })
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// The lowercase form used for module matching.
  pub fn folded(&self) -> String { self.0.to_ascii_lowercase() }
}

impl fmt::Display for ModuleCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

fn is_valid_module_code(s: &str) -> bool {
  let prefix = s.chars().take_while(|c| c.is_ascii_alphabetic()).count();
  if !(2..=4).contains(&prefix) {
    return false;
  }
  // The matched prefix is ASCII, so char counts are byte offsets.
  let rest = &s[prefix..];
  let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
  if digits != 4 {
    return false;
  }
  let suffix = &rest[digits..];
  suffix.len() <= 2 && suffix.chars().all(|c| c.is_ascii_alphabetic())
}

// ─── Tag ─────────────────────────────────────────────────────────────────────

/// A single alphanumeric word attached to a person.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
  pub fn new(raw: &str) -> Result<Self> {
    let valid = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
      Ok(Self(raw.to_owned()))
    } else {
      Err(Error::Validation {
        field:      "tag",
        constraint: "tags should be a single alphanumeric word",
      })
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.0)
  }
}

// ─── GithubUsername ──────────────────────────────────────────────────────────

/// A GitHub username, or the explicit absence of one.
///
/// Absent usernames are omitted from rendering and never equal a present
/// username, even an oddly-empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GithubUsername {
  value:   String,
  present: bool,
}

impl GithubUsername {
  pub fn new(raw: &str) -> Result<Self> {
    let valid = !raw.is_empty()
      && !raw.starts_with('-')
      && !raw.ends_with('-')
      && !raw.contains("--")
      && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
      Ok(Self { value: raw.to_owned(), present: true })
    } else {
      Err(Error::Validation {
        field:      "github username",
        constraint: "usernames should be alphanumeric with non-consecutive \
                     inner hyphens",
      })
    }
  }

  pub fn absent() -> Self {
    Self { value: String::new(), present: false }
  }

  pub fn is_present(&self) -> bool { self.present }

  pub fn as_str(&self) -> &str { &self.value }
}

impl fmt::Display for GithubUsername {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// A teaching rating from 0 to 5, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rating {
  value:   String,
  present: bool,
}

impl Rating {
  pub fn new(raw: &str) -> Result<Self> {
    let valid = matches!(raw.parse::<u8>(), Ok(n) if n <= 5)
      && raw.chars().all(|c| c.is_ascii_digit());
    if valid {
      Ok(Self { value: raw.to_owned(), present: true })
    } else {
      Err(Error::Validation {
        field:      "rating",
        constraint: "ratings should be an integer from 0 to 5",
      })
    }
  }

  pub fn absent() -> Self {
    Self { value: String::new(), present: false }
  }

  pub fn is_present(&self) -> bool { self.present }

  pub fn as_str(&self) -> &str { &self.value }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

// ─── Year ────────────────────────────────────────────────────────────────────

/// An undergraduate year of study, 1 to 4, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year {
  value:   String,
  present: bool,
}

impl Year {
  pub fn new(raw: &str) -> Result<Self> {
    let valid = matches!(raw.parse::<u8>(), Ok(n) if (1..=4).contains(&n))
      && raw.chars().all(|c| c.is_ascii_digit());
    if valid {
      Ok(Self { value: raw.to_owned(), present: true })
    } else {
      Err(Error::Validation {
        field:      "year",
        constraint: "years should be an integer from 1 to 4",
      })
    }
  }

  pub fn absent() -> Self {
    Self { value: String::new(), present: false }
  }

  pub fn is_present(&self) -> bool { self.present }

  pub fn as_str(&self) -> &str { &self.value }
}

impl fmt::Display for Year {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

// ─── Specialisation ──────────────────────────────────────────────────────────

/// A professor's field of specialisation: free text, not blank, or absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specialisation {
  value:   String,
  present: bool,
}

impl Specialisation {
  pub fn new(raw: &str) -> Result<Self> {
    if raw.trim().is_empty() {
      Err(Error::Validation {
        field:      "specialisation",
        constraint: "specialisations should not be blank",
      })
    } else {
      Ok(Self { value: raw.to_owned(), present: true })
    }
  }

  pub fn absent() -> Self {
    Self { value: String::new(), present: false }
  }

  pub fn is_present(&self) -> bool { self.present }

  pub fn as_str(&self) -> &str { &self.value }
}

impl fmt::Display for Specialisation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

// ─── OfficeHour ──────────────────────────────────────────────────────────────

/// A weekly office hour slot of the form `DAY, HH:MM - HH:MM` (24-hour
/// times, weekdays only), or absent. The day is stored title-cased and the
/// times zero-padded, so the rendered form is canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfficeHour {
  value:   String,
  present: bool,
}

const WEEKDAYS: [&str; 5] =
  ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

impl OfficeHour {
  pub fn new(raw: &str) -> Result<Self> {
    match normalize_office_hour(raw) {
      Some(value) => Ok(Self { value, present: true }),
      None => Err(Error::Validation {
        field:      "office hour",
        constraint: "office hours should be WEEKDAY, HH:MM - HH:MM in \
                     24-hour time",
      }),
    }
  }

  pub fn absent() -> Self {
    Self { value: String::new(), present: false }
  }

  pub fn is_present(&self) -> bool { self.present }

  pub fn as_str(&self) -> &str { &self.value }
}

impl fmt::Display for OfficeHour {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

fn normalize_office_hour(raw: &str) -> Option<String> {
  let (day_part, time_part) = raw.split_once(',')?;
  let day = WEEKDAYS
    .iter()
    .find(|d| d.eq_ignore_ascii_case(day_part.trim()))?;
  let (start, end) = time_part.split_once('-')?;
  let start = normalize_hhmm(start.trim())?;
  let end = normalize_hhmm(end.trim())?;
  Some(format!("{day}, {start} - {end}"))
}

fn normalize_hhmm(s: &str) -> Option<String> {
  let (h, m) = s.split_once(':')?;
  if !h.chars().all(|c| c.is_ascii_digit())
    || !m.chars().all(|c| c.is_ascii_digit())
    || h.is_empty()
    || m.len() != 2
  {
    return None;
  }
  let h: u8 = h.parse().ok()?;
  let m: u8 = m.parse().ok()?;
  (h < 24 && m < 60).then(|| format!("{h:02}:{m:02}"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_accepts_alphanumeric_words() {
    assert!(Name::new("John Doe").is_ok());
    assert!(Name::new("Capital Tan 2nd").is_ok());
    assert!(Name::new("").is_err());
    assert!(Name::new(" leading space").is_err());
    assert!(Name::new("O'Brien").is_err());
  }

  #[test]
  fn phone_digits_only() {
    assert!(Phone::new("98765432").is_ok());
    assert!(Phone::new("123").is_ok());
    assert!(Phone::new("12").is_err());
    assert!(Phone::new("9876 5432").is_err());
    assert!(Phone::new("+6598765432").is_err());
  }

  #[test]
  fn email_shape() {
    assert!(Email::new("JohnD@example.com").is_ok());
    assert!(Email::new("a+b_c.d@sub-domain.example.io").is_ok());
    assert!(Email::new("no-at-sign").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("x@domain.c").is_err());
    assert!(Email::new("x@-bad.com").is_err());
    assert!(Email::new("two@@ats.com").is_err());
  }

  #[test]
  fn gender_normalises_case() {
    assert_eq!(Gender::new("m").unwrap().as_str(), "M");
    assert_eq!(Gender::new("F").unwrap().as_str(), "F");
    assert!(Gender::new("male").is_err());
  }

  #[test]
  fn module_code_shape_and_normalisation() {
    assert_eq!(ModuleCode::new("cs1101s").unwrap().as_str(), "CS1101S");
    assert!(ModuleCode::new("CS4226").is_ok());
    assert!(ModuleCode::new("GEQ1000").is_ok());
    assert!(ModuleCode::new("DSAIT1000XY").is_err()); // 5-letter prefix
    assert!(ModuleCode::new("CS110").is_err()); // 3 digits
    assert!(ModuleCode::new("1101CS").is_err());
    assert!(ModuleCode::new("CS1101SXY").is_err()); // 3 trailing letters
  }

  #[test]
  fn module_code_roundtrips_through_its_rendered_form() {
    let original = ModuleCode::new("cs1101s").unwrap();
    let reparsed = ModuleCode::new(original.as_str()).unwrap();
    assert_eq!(original, reparsed);
  }

  #[test]
  fn tag_single_word() {
    assert!(Tag::new("owesMoney").is_ok());
    assert!(Tag::new("two words").is_err());
    assert!(Tag::new("").is_err());
  }

  #[test]
  fn github_username_hyphen_rules() {
    assert!(GithubUsername::new("john-doe").is_ok());
    assert!(GithubUsername::new("-john").is_err());
    assert!(GithubUsername::new("john-").is_err());
    assert!(GithubUsername::new("jo--hn").is_err());
    assert!(GithubUsername::new("").is_err());
  }

  #[test]
  fn absent_never_equals_present_empty() {
    // A validly-constructed username is never empty, so compare against a
    // hand-rolled present-empty value via the absent constructor's fields.
    assert!(!GithubUsername::absent().is_present());
    assert_ne!(
      GithubUsername::absent(),
      GithubUsername::new("x").unwrap()
    );
    assert_ne!(Rating::absent(), Rating::new("0").unwrap());
    assert_ne!(Year::absent(), Year::new("1").unwrap());
  }

  #[test]
  fn rating_range() {
    assert!(Rating::new("0").is_ok());
    assert!(Rating::new("5").is_ok());
    assert!(Rating::new("6").is_err());
    assert!(Rating::new("-1").is_err());
    assert!(Rating::new("four").is_err());
  }

  #[test]
  fn year_range() {
    assert!(Year::new("1").is_ok());
    assert!(Year::new("4").is_ok());
    assert!(Year::new("0").is_err());
    assert!(Year::new("5").is_err());
  }

  #[test]
  fn office_hour_normalisation() {
    let oh = OfficeHour::new("monday, 9:00 - 11:00").unwrap();
    assert_eq!(oh.as_str(), "Monday, 09:00 - 11:00");
    assert!(OfficeHour::new("Saturday, 09:00 - 11:00").is_err());
    assert!(OfficeHour::new("Monday 09:00 - 11:00").is_err());
    assert!(OfficeHour::new("Monday, 25:00 - 26:00").is_err());
    assert!(OfficeHour::new("Monday, 09:60 - 11:00").is_err());
  }
}
