//! Edit descriptors — sparse, per-field update requests.
//!
//! A descriptor spans the union of fields across every person variant. An
//! edit resolves each field to the descriptor's value when present and falls
//! back to the original person's value otherwise; fields that belong to a
//! different variant than the target are silently ignored, so one generic
//! descriptor can be applied to any person.

use std::collections::BTreeSet;

use crate::{
  field::{
    Email, Gender, GithubUsername, Location, ModuleCode, Name, OfficeHour,
    Phone, Rating, Specialisation, Tag, Year,
  },
  person::{Person, PersonData, Professor, Student, TeachingAssistant},
};

// ─── EditDescriptor ──────────────────────────────────────────────────────────

/// A bag of optional replacement values. Built empty or seeded from an
/// existing person, extended with the consuming `with_*` builders, and read
/// exactly once by [`create_edited_person`]. It never aliases its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
  // Common fields, meaningful for every variant.
  pub name:     Option<Name>,
  pub phone:    Option<Phone>,
  pub email:    Option<Email>,
  pub gender:   Option<Gender>,
  pub tags:     Option<BTreeSet<Tag>>,
  pub location: Option<Location>,
  pub username: Option<GithubUsername>,

  // Role-specific fields, ignored unless the target variant carries them.
  pub module_codes:   Option<BTreeSet<ModuleCode>>,
  pub module_code:    Option<ModuleCode>,
  pub rating:         Option<Rating>,
  pub specialisation: Option<Specialisation>,
  pub office_hour:    Option<OfficeHour>,
  pub year:           Option<Year>,
}

impl EditDescriptor {
  /// A descriptor carrying `person`'s common fields plus its module
  /// code(s). Editing a different entry into this shape reproduces the
  /// duplicate-collision scenarios exactly.
  pub fn from_person(person: &Person) -> Self {
    let data = person.data();
    let base = Self {
      name: Some(data.name.clone()),
      phone: Some(data.phone.clone()),
      email: Some(data.email.clone()),
      gender: Some(data.gender.clone()),
      tags: Some(data.tags.clone()),
      location: Some(data.location.clone()),
      username: Some(data.username.clone()),
      ..Self::default()
    };
    match person {
      Person::Student(s) => Self {
        module_codes: Some(s.module_codes.clone()),
        ..base
      },
      Person::Professor(p) => Self {
        module_code: Some(p.module_code.clone()),
        ..base
      },
      Person::TeachingAssistant(t) => Self {
        module_code: Some(t.module_code.clone()),
        ..base
      },
    }
  }

  /// True iff at least one field is present. Commands use this to treat an
  /// empty edit as a plain no-op success.
  pub fn is_any_field_edited(&self) -> bool {
    self.name.is_some()
      || self.phone.is_some()
      || self.email.is_some()
      || self.gender.is_some()
      || self.tags.is_some()
      || self.location.is_some()
      || self.username.is_some()
      || self.module_codes.is_some()
      || self.module_code.is_some()
      || self.rating.is_some()
      || self.specialisation.is_some()
      || self.office_hour.is_some()
      || self.year.is_some()
  }

  // ── Builders ──────────────────────────────────────────────────────────

  pub fn with_name(mut self, name: Name) -> Self {
    self.name = Some(name);
    self
  }

  pub fn with_phone(mut self, phone: Phone) -> Self {
    self.phone = Some(phone);
    self
  }

  pub fn with_email(mut self, email: Email) -> Self {
    self.email = Some(email);
    self
  }

  pub fn with_gender(mut self, gender: Gender) -> Self {
    self.gender = Some(gender);
    self
  }

  pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
    self.tags = Some(tags);
    self
  }

  pub fn with_location(mut self, location: Location) -> Self {
    self.location = Some(location);
    self
  }

  pub fn with_username(mut self, username: GithubUsername) -> Self {
    self.username = Some(username);
    self
  }

  pub fn with_module_codes(mut self, codes: BTreeSet<ModuleCode>) -> Self {
    self.module_codes = Some(codes);
    self
  }

  pub fn with_module_code(mut self, code: ModuleCode) -> Self {
    self.module_code = Some(code);
    self
  }

  pub fn with_rating(mut self, rating: Rating) -> Self {
    self.rating = Some(rating);
    self
  }

  pub fn with_specialisation(mut self, spec: Specialisation) -> Self {
    self.specialisation = Some(spec);
    self
  }

  pub fn with_office_hour(mut self, office_hour: OfficeHour) -> Self {
    self.office_hour = Some(office_hour);
    self
  }

  pub fn with_year(mut self, year: Year) -> Self {
    self.year = Some(year);
    self
  }
}

// ─── Edit operation ──────────────────────────────────────────────────────────

/// Compute the edited copy of `original` under `descriptor`.
///
/// Pure: neither argument is mutated. The result is always the same variant
/// as `original`; every field resolves to the descriptor's value when
/// present and the original's otherwise. Descriptor fields belonging to
/// other variants are ignored without error.
pub fn create_edited_person(
  original: &Person,
  descriptor: &EditDescriptor,
) -> Person {
  let old = original.data();
  let data = PersonData {
    name:     descriptor.name.clone().unwrap_or_else(|| old.name.clone()),
    phone:    descriptor.phone.clone().unwrap_or_else(|| old.phone.clone()),
    email:    descriptor.email.clone().unwrap_or_else(|| old.email.clone()),
    gender:   descriptor
      .gender
      .clone()
      .unwrap_or_else(|| old.gender.clone()),
    tags:     descriptor.tags.clone().unwrap_or_else(|| old.tags.clone()),
    location: descriptor
      .location
      .clone()
      .unwrap_or_else(|| old.location.clone()),
    username: descriptor
      .username
      .clone()
      .unwrap_or_else(|| old.username.clone()),
  };

  match original {
    Person::Student(s) => Person::Student(Student {
      data,
      module_codes: descriptor
        .module_codes
        .clone()
        .unwrap_or_else(|| s.module_codes.clone()),
    }),
    Person::Professor(p) => Person::Professor(Professor {
      data,
      module_code: descriptor
        .module_code
        .clone()
        .unwrap_or_else(|| p.module_code.clone()),
      rating: descriptor
        .rating
        .clone()
        .unwrap_or_else(|| p.rating.clone()),
      specialisation: descriptor
        .specialisation
        .clone()
        .unwrap_or_else(|| p.specialisation.clone()),
    }),
    Person::TeachingAssistant(t) => {
      Person::TeachingAssistant(TeachingAssistant {
        data,
        module_code: descriptor
          .module_code
          .clone()
          .unwrap_or_else(|| t.module_code.clone()),
        rating: descriptor
          .rating
          .clone()
          .unwrap_or_else(|| t.rating.clone()),
        office_hour: descriptor
          .office_hour
          .clone()
          .unwrap_or_else(|| t.office_hour.clone()),
        year: descriptor.year.clone().unwrap_or_else(|| t.year.clone()),
      })
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn data(name: &str) -> PersonData {
    PersonData {
      name:     Name::new(name).unwrap(),
      phone:    Phone::new("91234567").unwrap(),
      email:    Email::new("amy@example.com").unwrap(),
      gender:   Gender::new("F").unwrap(),
      tags:     BTreeSet::from([Tag::new("friends").unwrap()]),
      location: Location::new("COM2").unwrap(),
      username: GithubUsername::new("amy-bee").unwrap(),
    }
  }

  fn sample_student() -> Person {
    Person::student(
      data("Amy Bee"),
      BTreeSet::from([ModuleCode::new("CS2030").unwrap()]),
    )
  }

  fn sample_professor() -> Person {
    Person::professor(
      data("Bob Choo"),
      Some(ModuleCode::new("CS2103T").unwrap()),
      Rating::new("4").unwrap(),
      Specialisation::new("Software Engineering").unwrap(),
    )
    .unwrap()
  }

  fn sample_ta() -> Person {
    Person::teaching_assistant(
      data("Carl Kurz"),
      Some(ModuleCode::new("CS2100").unwrap()),
      Rating::new("3").unwrap(),
      OfficeHour::new("Tuesday, 14:00 - 16:00").unwrap(),
      Year::new("2").unwrap(),
    )
    .unwrap()
  }

  #[test]
  fn empty_descriptor_has_no_edits() {
    assert!(!EditDescriptor::default().is_any_field_edited());
    let d = EditDescriptor::default().with_phone(Phone::new("999").unwrap());
    assert!(d.is_any_field_edited());
  }

  #[test]
  fn empty_descriptor_edit_is_identity_for_every_variant() {
    let empty = EditDescriptor::default();
    for person in [sample_student(), sample_professor(), sample_ta()] {
      assert_eq!(create_edited_person(&person, &empty), person);
    }
  }

  #[test]
  fn edit_never_changes_the_variant_tag() {
    // A descriptor stuffed with every field across all variants.
    let d = EditDescriptor::from_person(&sample_ta())
      .with_module_codes(BTreeSet::from([ModuleCode::new("MA1521").unwrap()]))
      .with_rating(Rating::new("1").unwrap())
      .with_specialisation(Specialisation::new("Databases").unwrap())
      .with_office_hour(OfficeHour::new("Monday, 09:00 - 10:00").unwrap())
      .with_year(Year::new("1").unwrap());

    for person in [sample_student(), sample_professor(), sample_ta()] {
      let edited = create_edited_person(&person, &d);
      assert_eq!(edited.type_tag(), person.type_tag());
    }
  }

  #[test]
  fn partial_descriptor_overrides_only_named_fields() {
    let d = EditDescriptor::default()
      .with_name(Name::new("Amy Lee").unwrap())
      .with_phone(Phone::new("88887777").unwrap());

    let Person::Student(edited) =
      create_edited_person(&sample_student(), &d)
    else {
      panic!("variant changed");
    };

    assert_eq!(edited.data.name.as_str(), "Amy Lee");
    assert_eq!(edited.data.phone.as_str(), "88887777");
    // Everything else falls back to the original.
    assert_eq!(edited.data.email.as_str(), "amy@example.com");
    assert_eq!(edited.data.location.as_str(), "COM2");
    assert_eq!(edited.module_codes.len(), 1);
  }

  #[test]
  fn other_variant_fields_are_silently_ignored() {
    // Office hour and year belong to TAs; applying them to a professor
    // leaves the professor untouched apart from the shared rating.
    let d = EditDescriptor::default()
      .with_office_hour(OfficeHour::new("Monday, 09:00 - 10:00").unwrap())
      .with_year(Year::new("1").unwrap())
      .with_rating(Rating::new("5").unwrap());

    let Person::Professor(edited) =
      create_edited_person(&sample_professor(), &d)
    else {
      panic!("variant changed");
    };
    assert_eq!(edited.rating.as_str(), "5");
    assert_eq!(edited.specialisation.as_str(), "Software Engineering");
  }

  #[test]
  fn student_module_set_replaced_wholesale() {
    let replacement: BTreeSet<ModuleCode> = ["CS3230", "CS4234"]
      .iter()
      .map(|c| ModuleCode::new(c).unwrap())
      .collect();
    let d =
      EditDescriptor::default().with_module_codes(replacement.clone());

    let Person::Student(edited) =
      create_edited_person(&sample_student(), &d)
    else {
      panic!("variant changed");
    };
    assert_eq!(edited.module_codes, replacement);
  }

  #[test]
  fn descriptor_arguments_are_not_mutated() {
    let original = sample_professor();
    let d = EditDescriptor::default().with_name(Name::new("Zed").unwrap());
    let before = (original.clone(), d.clone());
    let _ = create_edited_person(&original, &d);
    assert_eq!(before, (original, d));
  }

  #[test]
  fn from_person_seeds_common_fields_and_module_info() {
    let d = EditDescriptor::from_person(&sample_professor());
    assert!(d.name.is_some());
    assert!(d.module_code.is_some());
    assert!(d.module_codes.is_none());
    assert!(d.rating.is_none());

    let d = EditDescriptor::from_person(&sample_student());
    assert!(d.module_codes.is_some());
    assert!(d.module_code.is_none());
  }
}
