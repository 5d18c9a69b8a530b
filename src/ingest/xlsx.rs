//! Workbook reader for the first worksheet.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::IngestError;
use crate::models::{RawTable, RawValue};

/// Reads the first worksheet of a workbook.
///
/// Numeric cells become [`RawValue::Number`], text cells
/// [`RawValue::Text`] and blank cells [`RawValue::Empty`]. Other cell
/// kinds (booleans, dates, formula errors) are passed on as their text.
/// `.xlsx`, legacy `.xls` and OpenDocument workbooks are all accepted.
/// Blank rows inside the used range are kept so row positions match the sheet.
///
/// # Errors
///
/// [`IngestError::Workbook`] if the bytes are not a readable workbook, and
/// [`IngestError::EmptyInput`] if it has no worksheet or the first
/// worksheet has no header row.
pub fn read_xlsx(bytes: &[u8]) -> Result<RawTable, IngestError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Workbook {
            message: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::EmptyInput)?
        .map_err(|e| IngestError::Workbook {
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|cell| raw_value(cell).to_string()).collect(),
        None => return Err(IngestError::EmptyInput),
    };
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(IngestError::EmptyInput);
    }

    let rows = rows
        .map(|row| row.iter().map(raw_value).collect::<Vec<_>>())
        .collect();

    Ok(RawTable::from_rows(columns, rows))
}

fn raw_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::Int(n) => RawValue::Number(*n as f64),
        Data::Float(n) => RawValue::Number(*n),
        Data::String(s) => RawValue::Text(s.clone()),
        other => RawValue::Text(other.to_string()),
    }
}
