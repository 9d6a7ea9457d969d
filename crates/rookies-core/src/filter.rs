//! Listing filters applied over the full roster.

use crate::person::{Gender, Person};

/// The pivot year for the birth-year comparisons.
pub const PIVOT_YEAR: i32 = 2000;

/// A selector over the person collection, chosen by the `filter` query
/// parameter of the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Filter {
  #[default]
  All,
  Male,
  /// The single person with the earliest date of birth.
  Oldest,
  Equals2000,
  Greaterthan2000,
  Lessthan2000,
}

impl Filter {
  /// Parse a raw query value. Missing or unrecognised values select
  /// everything.
  pub fn from_query(raw: Option<&str>) -> Self {
    raw
      .and_then(|s| s.trim().parse().ok())
      .unwrap_or_default()
  }

  /// Narrow `people` to the members selected by this filter, preserving
  /// their original order.
  ///
  /// For [`Filter::Oldest`], ties on the earliest birth date resolve to the
  /// first such person in `people`.
  pub fn apply(self, people: Vec<Person>) -> Vec<Person> {
    match self {
      Self::All => people,
      Self::Male => people
        .into_iter()
        .filter(|p| p.gender == Gender::Male)
        .collect(),
      Self::Oldest => people
        .into_iter()
        .min_by_key(|p| p.date_of_birth)
        .into_iter()
        .collect(),
      Self::Equals2000 => people
        .into_iter()
        .filter(|p| p.birth_year() == PIVOT_YEAR)
        .collect(),
      Self::Greaterthan2000 => people
        .into_iter()
        .filter(|p| p.birth_year() > PIVOT_YEAR)
        .collect(),
      Self::Lessthan2000 => people
        .into_iter()
        .filter(|p| p.birth_year() < PIVOT_YEAR)
        .collect(),
    }
  }
}
