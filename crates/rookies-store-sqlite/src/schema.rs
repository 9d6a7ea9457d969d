//! SQL schema for the Rookies SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS people (
    person_id     TEXT PRIMARY KEY,
    first_name    TEXT NOT NULL CHECK (length(trim(first_name)) > 0),
    last_name     TEXT NOT NULL CHECK (length(trim(last_name)) > 0),
    gender        TEXT NOT NULL,     -- 'male' | 'female' | 'other'
    date_of_birth TEXT NOT NULL,     -- YYYY-MM-DD
    phone_number  TEXT NOT NULL CHECK (length(trim(phone_number)) > 0),
    birth_place   TEXT NOT NULL CHECK (length(trim(birth_place)) > 0),
    is_graduated  INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS people_dob_idx ON people(date_of_birth);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT` against `people`, in the order
/// expected by [`crate::encode::RawPerson::from_row`].
pub const PERSON_COLUMNS: &str = "person_id, first_name, last_name, gender, \
                                  date_of_birth, phone_number, birth_place, \
                                  is_graduated";
