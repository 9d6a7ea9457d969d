//! The `Person` entity — the single record type of the roster.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Gender ──────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
  Male,
  Female,
  Other,
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// A single failed field check, keyed by the form field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   &'static str,
  pub message: String,
}

impl FieldError {
  pub fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }

  fn required(field: &'static str, label: &str) -> Self {
    Self::new(field, format!("{label} is required."))
  }
}

/// Collapse field errors into a single [`Error::Validation`].
pub fn into_validation_error(errors: &[FieldError]) -> Error {
  let joined = errors
    .iter()
    .map(|e| e.message.as_str())
    .collect::<Vec<_>>()
    .join("; ");
  Error::Validation(joined)
}

/// Report every required text field that is blank or whitespace-only.
pub fn check_required_text(
  first_name: &str,
  last_name: &str,
  phone_number: &str,
  birth_place: &str,
) -> Vec<FieldError> {
  [
    ("first_name", "First name", first_name),
    ("last_name", "Last name", last_name),
    ("phone_number", "Phone number", phone_number),
    ("birth_place", "Birth place", birth_place),
  ]
  .into_iter()
  .filter(|(_, _, value)| value.trim().is_empty())
  .map(|(field, label, _)| FieldError::required(field, label))
  .collect()
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A persisted member of the roster. `id` is assigned by the store and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:            Uuid,
  pub first_name:    String,
  pub last_name:     String,
  pub gender:        Gender,
  pub date_of_birth: NaiveDate,
  pub phone_number:  String,
  pub birth_place:   String,
  pub is_graduated:  bool,
}

impl Person {
  pub fn birth_year(&self) -> i32 { self.date_of_birth.year() }

  pub fn field_errors(&self) -> Vec<FieldError> {
    check_required_text(
      &self.first_name,
      &self.last_name,
      &self.phone_number,
      &self.birth_place,
    )
  }

  /// Reject the record if any required field is blank.
  pub fn validate(&self) -> Result<()> {
    let errors = self.field_errors();
    if errors.is_empty() {
      Ok(())
    } else {
      Err(into_validation_error(&errors))
    }
  }
}

// ─── NewPerson ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::PersonStore::create_person`].
/// The id is always generated by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  pub first_name:    String,
  pub last_name:     String,
  pub gender:        Gender,
  pub date_of_birth: NaiveDate,
  pub phone_number:  String,
  pub birth_place:   String,
  pub is_graduated:  bool,
}

impl NewPerson {
  pub fn field_errors(&self) -> Vec<FieldError> {
    check_required_text(
      &self.first_name,
      &self.last_name,
      &self.phone_number,
      &self.birth_place,
    )
  }

  pub fn validate(&self) -> Result<()> {
    let errors = self.field_errors();
    if errors.is_empty() {
      Ok(())
    } else {
      Err(into_validation_error(&errors))
    }
  }

  /// Attach an identifier, producing the persisted form.
  pub fn with_id(self, id: Uuid) -> Person {
    Person {
      id,
      first_name: self.first_name,
      last_name: self.last_name,
      gender: self.gender,
      date_of_birth: self.date_of_birth,
      phone_number: self.phone_number,
      birth_place: self.birth_place,
      is_graduated: self.is_graduated,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn john() -> NewPerson {
    NewPerson {
      first_name:    "John".into(),
      last_name:     "Doe".into(),
      gender:        Gender::Male,
      date_of_birth: NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
      phone_number:  "123-456-7890".into(),
      birth_place:   "City A".into(),
      is_graduated:  false,
    }
  }

  #[test]
  fn complete_person_is_valid() {
    assert!(john().validate().is_ok());
  }

  #[test]
  fn blank_fields_are_reported_individually() {
    let mut p = john();
    p.first_name = "   ".into();
    p.birth_place = String::new();

    let errors = p.field_errors();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, ["first_name", "birth_place"]);

    match p.validate() {
      Err(Error::Validation(msg)) => {
        assert!(msg.contains("First name is required."), "msg: {msg}");
        assert!(msg.contains("Birth place is required."), "msg: {msg}");
      }
      other => panic!("expected validation error, got {other:?}"),
    }
  }

  #[test]
  fn gender_parses_case_insensitively() {
    assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
    assert!("robot".parse::<Gender>().is_err());
    assert_eq!(Gender::Other.to_string(), "Other");
  }

  #[test]
  fn with_id_keeps_every_field() {
    let id = Uuid::new_v4();
    let person = john().with_id(id);
    assert_eq!(person.id, id);
    assert_eq!(person.first_name, "John");
    assert_eq!(person.birth_year(), 1995);
  }
}
