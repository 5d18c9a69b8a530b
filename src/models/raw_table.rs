//! Untyped tabular input.
//!
//! A [`RawTable`] is what a parser hands the validator: ordered column
//! headers and rows keyed by column name. Nothing past the validator reads it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell as produced by a parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric cell (spreadsheet numbers).
    Number(f64),
    /// A text cell.
    Text(String),
    /// A blank cell or a cell missing from a short row.
    Empty,
}

impl RawValue {
    /// Returns true for blank cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

impl fmt::Display for RawValue {
    /// Whole numbers render without a fractional part, so a spreadsheet
    /// id stored as `101.0` reads back as `101`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Empty => Ok(()),
        }
    }
}

/// One row, keyed by column header.
pub type RawRow = HashMap<String, RawValue>;

/// An already-parsed dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    /// Column headers in file order.
    pub columns: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Creates a table from headers and positional rows.
    ///
    /// Short rows are padded with [`RawValue::Empty`]; cells beyond the
    /// last header are dropped.
    ///
    /// ```
    /// use productivity_engine::models::{RawTable, RawValue};
    ///
    /// let table = RawTable::from_rows(
    ///     vec!["Employee_ID".to_string(), "Name".to_string()],
    ///     vec![vec![RawValue::Text("EMP0001".to_string())]],
    /// );
    /// assert_eq!(table.rows[0]["Name"], RawValue::Empty);
    /// ```
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<RawValue>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|cells| {
                let mut cells = cells.into_iter();
                columns
                    .iter()
                    .map(|column| (column.clone(), cells.next().unwrap_or(RawValue::Empty)))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Returns true if a column with exactly this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number_displays_without_fraction() {
        assert_eq!(RawValue::Number(101.0).to_string(), "101");
        assert_eq!(RawValue::Number(7.25).to_string(), "7.25");
    }

    #[test]
    fn test_blank_detection() {
        assert!(RawValue::Empty.is_blank());
        assert!(RawValue::Text("   ".to_string()).is_blank());
        assert!(!RawValue::Text("x".to_string()).is_blank());
        assert!(!RawValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_from_rows_pads_and_truncates() {
        let table = RawTable::from_rows(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![RawValue::Number(1.0)],
                vec![
                    RawValue::Number(1.0),
                    RawValue::Number(2.0),
                    RawValue::Number(3.0),
                ],
            ],
        );

        assert_eq!(table.rows[0]["B"], RawValue::Empty);
        assert_eq!(table.rows[1].len(), 2);
        assert_eq!(table.rows[1]["B"], RawValue::Number(2.0));
    }

    #[test]
    fn test_has_column_is_case_sensitive() {
        let table = RawTable::from_rows(vec!["Leave_Days".to_string()], vec![]);
        assert!(table.has_column("Leave_Days"));
        assert!(!table.has_column("leave_days"));
    }
}
