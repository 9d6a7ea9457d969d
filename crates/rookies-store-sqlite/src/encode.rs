//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings, dates as `YYYY-MM-DD`,
//! gender as a lowercase word and booleans as integers.

use chrono::NaiveDate;
use rookies_core::{Gender, Person};
use uuid::Uuid;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

// ─── Gender ──────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str {
  match g {
    Gender::Male => "male",
    Gender::Female => "female",
    Gender::Other => "other",
  }
}

pub fn decode_gender(s: &str) -> Result<Gender> {
  match s {
    "male" => Ok(Gender::Male),
    "female" => Ok(Gender::Female),
    "other" => Ok(Gender::Other),
    other => Err(Error::Decode(format!("unknown gender: {other:?}"))),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `people` row.
pub struct RawPerson {
  pub person_id:     String,
  pub first_name:    String,
  pub last_name:     String,
  pub gender:        String,
  pub date_of_birth: String,
  pub phone_number:  String,
  pub birth_place:   String,
  pub is_graduated:  bool,
}

impl RawPerson {
  /// Read a row selected with [`crate::schema::PERSON_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      person_id:     row.get(0)?,
      first_name:    row.get(1)?,
      last_name:     row.get(2)?,
      gender:        row.get(3)?,
      date_of_birth: row.get(4)?,
      phone_number:  row.get(5)?,
      birth_place:   row.get(6)?,
      is_graduated:  row.get(7)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:            decode_uuid(&self.person_id)?,
      first_name:    self.first_name,
      last_name:     self.last_name,
      gender:        decode_gender(&self.gender)?,
      date_of_birth: decode_date(&self.date_of_birth)?,
      phone_number:  self.phone_number,
      birth_place:   self.birth_place,
      is_graduated:  self.is_graduated,
    })
  }
}

/// Column values for an `INSERT` or `UPDATE`, owned so they can move into
/// the connection closure.
pub struct PersonParams {
  pub person_id:     String,
  pub first_name:    String,
  pub last_name:     String,
  pub gender:        &'static str,
  pub date_of_birth: String,
  pub phone_number:  String,
  pub birth_place:   String,
  pub is_graduated:  bool,
}

impl From<&Person> for PersonParams {
  fn from(p: &Person) -> Self {
    Self {
      person_id:     encode_uuid(p.id),
      first_name:    p.first_name.clone(),
      last_name:     p.last_name.clone(),
      gender:        encode_gender(p.gender),
      date_of_birth: encode_date(p.date_of_birth),
      phone_number:  p.phone_number.clone(),
      birth_place:   p.birth_place.clone(),
      is_graduated:  p.is_graduated,
    }
  }
}
