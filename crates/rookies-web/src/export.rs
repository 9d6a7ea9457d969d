//! Spreadsheet export of the full roster.

use rookies_core::Person;
use rust_xlsxwriter::{Workbook, XlsxError};

pub const XLSX_CONTENT_TYPE: &str =
  "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const FILE_NAME: &str = "Persons.xlsx";
pub const SHEET_NAME: &str = "Persons";

pub const HEADER: [&str; 7] = [
  "First Name",
  "Last Name",
  "Gender",
  "Date of Birth",
  "Phone Number",
  "Birth Place",
  "Is Graduated",
];

/// One spreadsheet row, in [`HEADER`] column order.
pub fn row_cells(p: &Person) -> [String; 7] {
  [
    p.first_name.clone(),
    p.last_name.clone(),
    p.gender.to_string(),
    p.date_of_birth.format("%Y-%m-%d").to_string(),
    p.phone_number.clone(),
    p.birth_place.clone(),
    if p.is_graduated { "Yes" } else { "No" }.to_owned(),
  ]
}

/// Encode `people` as an `.xlsx` workbook with a header row and one row per
/// person.
pub fn render_workbook(people: &[Person]) -> Result<Vec<u8>, XlsxError> {
  let mut workbook = Workbook::new();
  let sheet = workbook.add_worksheet();
  sheet.set_name(SHEET_NAME)?;

  for (col, title) in (0u16..).zip(HEADER) {
    sheet.write_string(0, col, title)?;
  }

  for (row, person) in (1u32..).zip(people) {
    for (col, cell) in (0u16..).zip(row_cells(person)) {
      sheet.write_string(row, col, cell.as_str())?;
    }
  }

  sheet.autofit();
  workbook.save_to_buffer()
}
