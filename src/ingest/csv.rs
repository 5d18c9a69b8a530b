//! Comma-separated text reader.

use csv::ReaderBuilder;

use crate::error::IngestError;
use crate::models::{RawTable, RawValue};

/// Reads comma-separated text with a header row.
///
/// Every cell is kept as text, with empty cells as [`RawValue::Empty`].
/// Ragged rows are accepted: short rows are padded and extra trailing
/// cells are dropped. Rows of blank cells are kept so row positions match
/// the file; completely empty lines are not data rows.
///
/// # Errors
///
/// [`IngestError::EmptyInput`] if there is no header row, or
/// [`IngestError::Csv`] if the text is not valid CSV (for example, not UTF-8).
///
/// # Example
///
/// ```
/// use productivity_engine::ingest::read_csv;
/// use productivity_engine::models::RawValue;
///
/// let table = read_csv(b"Employee_ID,Leave_Days\nEMP0001,\n").unwrap();
/// assert_eq!(table.rows[0]["Employee_ID"], RawValue::Text("EMP0001".to_string()));
/// assert_eq!(table.rows[0]["Leave_Days"], RawValue::Empty);
/// ```
pub fn read_csv(bytes: &[u8]) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(IngestError::EmptyInput);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<RawValue> = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    RawValue::Empty
                } else {
                    RawValue::Text(cell.to_string())
                }
            })
            .collect();
        rows.push(cells);
    }

    Ok(RawTable::from_rows(columns, rows))
}
