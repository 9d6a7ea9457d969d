//! Sample roster loaded into an empty store on first start.

use chrono::NaiveDate;
use rookies_core::{Gender, NewPerson};
use uuid::Uuid;

use crate::{Result, SqliteStore};

/// `(first, last, gender, (year, month, day), phone, birth place, graduated)`
type SeedRow = (
  &'static str,
  &'static str,
  Gender,
  (i32, u32, u32),
  &'static str,
  &'static str,
  bool,
);

const SEED: [SeedRow; 6] = [
  ("Alice", "Smith", Gender::Female, (1995, 5, 21), "1234567890", "New York", true),
  ("Bob", "Johnson", Gender::Male, (1988, 10, 15), "2345678901", "Los Angeles", true),
  ("Charlie", "Brown", Gender::Male, (2000, 7, 8), "3456789012", "Chicago", false),
  ("Diana", "Williams", Gender::Female, (2000, 12, 25), "4567890123", "Houston", true),
  ("Ethan", "Davis", Gender::Male, (2005, 3, 12), "5678901234", "Miami", false),
  ("Fiona", "Garcia", Gender::Female, (2010, 6, 30), "6789012345", "Seattle", false),
];

fn seed_people() -> impl Iterator<Item = NewPerson> {
  SEED.into_iter().filter_map(
    |(first, last, gender, (y, m, d), phone, place, graduated)| {
      Some(NewPerson {
        first_name:    first.to_owned(),
        last_name:     last.to_owned(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(y, m, d)?,
        phone_number:  phone.to_owned(),
        birth_place:   place.to_owned(),
        is_graduated:  graduated,
      })
    },
  )
}

impl SqliteStore {
  /// Insert the sample roster if the `people` table is empty.
  ///
  /// Returns the number of rows inserted; zero when data already exists.
  pub async fn seed_if_empty(&self) -> Result<usize> {
    if self.count().await? > 0 {
      return Ok(0);
    }

    let mut inserted = 0;
    for input in seed_people() {
      input.validate()?;
      self.insert_person(&input.with_id(Uuid::new_v4())).await?;
      inserted += 1;
    }

    tracing::info!(inserted, "seeded empty roster");
    Ok(inserted)
  }
}
