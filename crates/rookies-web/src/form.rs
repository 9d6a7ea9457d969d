//! The member form: submitted values, their parsing, and the form view
//! re-rendered when a submission is rejected.

use axum::{
  Json,
  response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rookies_core::{
  Gender, NewPerson, Person,
  person::{FieldError, check_required_text},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw url-encoded form values, kept as submitted so a rejected form can be
/// echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonForm {
  pub first_name:    String,
  pub last_name:     String,
  pub gender:        String,
  /// `YYYY-MM-DD`
  pub date_of_birth: String,
  pub phone_number:  String,
  pub birth_place:   String,
  /// Checkbox value; `true`, `on` or `yes` mean checked.
  pub is_graduated:  String,
}

impl PersonForm {
  /// Populate the form from a stored person.
  pub fn from_person(p: &Person) -> Self {
    Self {
      first_name:    p.first_name.clone(),
      last_name:     p.last_name.clone(),
      gender:        p.gender.to_string(),
      date_of_birth: p.date_of_birth.format(DATE_FORMAT).to_string(),
      phone_number:  p.phone_number.clone(),
      birth_place:   p.birth_place.clone(),
      is_graduated:  p.is_graduated.to_string(),
    }
  }

  /// Parse and validate every field, reporting all failures at once.
  pub fn parse(&self) -> Result<NewPerson, Vec<FieldError>> {
    let mut errors = check_required_text(
      &self.first_name,
      &self.last_name,
      &self.phone_number,
      &self.birth_place,
    );

    let gender = match self.gender.trim() {
      "" => {
        errors.push(FieldError::new("gender", "Gender is required."));
        None
      }
      raw => raw.parse::<Gender>().ok().or_else(|| {
        errors.push(FieldError::new(
          "gender",
          "Gender must be one of Male, Female or Other.",
        ));
        None
      }),
    };

    let date_of_birth = match self.date_of_birth.trim() {
      "" => {
        errors.push(FieldError::new("date_of_birth", "Date of birth is required."));
        None
      }
      raw => NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().or_else(|| {
        errors.push(FieldError::new(
          "date_of_birth",
          "Date of birth must be a date in YYYY-MM-DD format.",
        ));
        None
      }),
    };

    match (gender, date_of_birth) {
      (Some(gender), Some(date_of_birth)) if errors.is_empty() => Ok(NewPerson {
        first_name: self.first_name.trim().to_owned(),
        last_name: self.last_name.trim().to_owned(),
        gender,
        date_of_birth,
        phone_number: self.phone_number.trim().to_owned(),
        birth_place: self.birth_place.trim().to_owned(),
        is_graduated: is_checked(&self.is_graduated),
      }),
      _ => Err(errors),
    }
  }
}

fn is_checked(raw: &str) -> bool {
  ["true", "on", "yes"]
    .iter()
    .any(|v| raw.trim().eq_ignore_ascii_case(v))
}

// ─── View ─────────────────────────────────────────────────────────────────────

/// The create/edit form as rendered to the client.
///
/// Form-level errors (not tied to a field) carry an empty `field`.
#[derive(Debug, Serialize)]
pub struct FormView {
  /// Set when editing an existing member.
  pub id:     Option<Uuid>,
  pub form:   PersonForm,
  pub errors: Vec<FieldError>,
}

impl FormView {
  pub fn blank() -> Self {
    Self { id: None, form: PersonForm::default(), errors: Vec::new() }
  }

  pub fn for_person(p: &Person) -> Self {
    Self { id: Some(p.id), form: PersonForm::from_person(p), errors: Vec::new() }
  }

  pub fn rejected(id: Option<Uuid>, form: PersonForm, errors: Vec<FieldError>) -> Self {
    Self { id, form, errors }
  }

  /// Attach a form-level error message.
  pub fn with_error(id: Option<Uuid>, form: PersonForm, message: String) -> Self {
    Self::rejected(id, form, vec![FieldError::new("", message)])
  }
}

impl IntoResponse for FormView {
  fn into_response(self) -> Response { Json(self).into_response() }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled() -> PersonForm {
    PersonForm {
      first_name:    "John".into(),
      last_name:     "Doe".into(),
      gender:        "male".into(),
      date_of_birth: "1995-05-01".into(),
      phone_number:  "123-456-7890".into(),
      birth_place:   "City A".into(),
      is_graduated:  "on".into(),
    }
  }

  #[test]
  fn complete_form_parses() {
    let p = filled().parse().unwrap();
    assert_eq!(p.gender, Gender::Male);
    assert_eq!(p.date_of_birth, NaiveDate::from_ymd_opt(1995, 5, 1).unwrap());
    assert!(p.is_graduated);
  }

  #[test]
  fn unchecked_box_means_not_graduated() {
    let mut form = filled();
    form.is_graduated = String::new();
    assert!(!form.parse().unwrap().is_graduated);
  }

  #[test]
  fn only_true_on_yes_check_the_box() {
    for raw in ["true", "ON", " yes "] {
      assert!(is_checked(raw), "{raw:?}");
    }
    for raw in ["1", "false", "off", "no", ""] {
      assert!(!is_checked(raw), "{raw:?}");
    }
  }

  #[test]
  fn every_bad_field_is_reported() {
    let form = PersonForm {
      gender: "robot".into(),
      date_of_birth: "01/05/1995".into(),
      ..PersonForm::default()
    };
    let errors = form.parse().unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
      fields,
      ["first_name", "last_name", "phone_number", "birth_place", "gender", "date_of_birth"]
    );
  }

  #[test]
  fn from_person_prefills_values() {
    let person = filled().parse().unwrap().with_id(Uuid::new_v4());
    let form = PersonForm::from_person(&person);
    assert_eq!(form.gender, "Male");
    assert_eq!(form.date_of_birth, "1995-05-01");
    assert_eq!(form.is_graduated, "true");
  }
}
