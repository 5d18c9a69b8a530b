//! Turning uploaded bytes into a [`RawTable`].
//!
//! The caller names the format; nothing here sniffs content. Both readers
//! take the first row as the header and keep every data row in source
//! order, blank ones included, so row positions line up with the upload.
//! Cell values are passed through untyped, and the validator decides what
//! they mean.

mod csv;
mod xlsx;

use crate::error::IngestError;
use crate::models::RawTable;

pub use self::csv::read_csv;
pub use self::xlsx::read_xlsx;

/// A supported upload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// Comma-separated text.
    Csv,
    /// A spreadsheet workbook (`.xlsx`, `.xls`).
    Xlsx,
}

impl InputFormat {
    /// Picks a format from an upload's file name, by extension.
    ///
    /// ```
    /// use productivity_engine::ingest::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_file_name("march.CSV"), Some(InputFormat::Csv));
    /// assert_eq!(InputFormat::from_file_name("march.xls"), Some(InputFormat::Xlsx));
    /// assert_eq!(InputFormat::from_file_name("march.txt"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(InputFormat::Csv),
            "xlsx" | "xls" => Some(InputFormat::Xlsx),
            _ => None,
        }
    }
}

/// Reads a table in the given format.
pub fn read_table(bytes: &[u8], format: InputFormat) -> Result<RawTable, IngestError> {
    match format {
        InputFormat::Csv => read_csv(bytes),
        InputFormat::Xlsx => read_xlsx(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_name_requires_extension() {
        assert_eq!(InputFormat::from_file_name("data"), None);
        assert_eq!(InputFormat::from_file_name(""), None);
        assert_eq!(
            InputFormat::from_file_name("employees.2026.xlsx"),
            Some(InputFormat::Xlsx)
        );
    }

    #[test]
    fn test_read_table_dispatches_csv() {
        let table = read_table(b"Employee_ID,Name\nEMP0001,Ann\n", InputFormat::Csv).unwrap();
        assert_eq!(table.columns, vec!["Employee_ID", "Name"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_read_table_rejects_csv_bytes_as_workbook() {
        let error = read_table(b"Employee_ID,Name\n", InputFormat::Xlsx).unwrap_err();
        assert!(matches!(error, IngestError::Workbook { .. }));
    }
}
