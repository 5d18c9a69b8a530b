//! Schema validation for incoming datasets.
//!
//! Validation is the only place raw rows are read. It runs in two stages:
//!
//! 1. Whole-table checks. A missing required column or an oversized
//!    dataset rejects the input with a [`SchemaError`] before any row is
//!    looked at.
//! 2. Per-row coercion. Each row is converted into an [`EmployeeRecord`]
//!    independently; a row that fails is dropped and reported as a
//!    [`RowError`] while the rest carry on.

mod row;
mod schema;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::AnalysisConfig;
use crate::error::{RowError, SchemaError};
use crate::models::{EmployeeRecord, RawTable, RawValue};

pub use row::coerce_row;
pub use schema::{
    ACTUAL_HOURS, DEPARTMENT, EMPLOYEE_ID, EMPLOYMENT_TYPE, LEAVE_DAYS, NAME, REQUIRED_COLUMNS,
    check_required_columns, check_row_limit,
};

/// The outcome of validating a dataset that passed the schema checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedBatch {
    /// Rows that coerced successfully, in input order.
    pub records: Vec<EmployeeRecord>,
    /// Rows that were dropped, in input order.
    pub row_errors: Vec<RowError>,
}

/// Validates a raw table against the required schema.
///
/// # Errors
///
/// Returns [`SchemaError::MissingColumns`] if any required column is
/// absent and [`SchemaError::TooManyRows`] if the table exceeds
/// `config.max_rows`. Row-level problems never fail the call.
///
/// Rows whose cells are all blank are skipped without an error. They
/// still count towards row positions, so `RowError::row_index` always
/// refers to the row's place in the table.
///
/// # Example
///
/// ```
/// use productivity_engine::config::AnalysisConfig;
/// use productivity_engine::models::{RawTable, RawValue};
/// use productivity_engine::validation::{validate, REQUIRED_COLUMNS};
///
/// let text = |s: &str| RawValue::Text(s.to_string());
/// let table = RawTable::from_rows(
///     REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
///     vec![
///         vec![text("EMP0001"), text("Ann"), text("Sales"), text("Full-Time"), text("180"), text("0")],
///         vec![text("EMP0002"), text("Bob"), text("Sales"), text("Contractor"), text("90"), text("0")],
///     ],
/// );
///
/// let batch = validate(&table, &AnalysisConfig::default()).unwrap();
/// assert_eq!(batch.records.len(), 1);
/// assert_eq!(batch.row_errors[0].row_index, 1);
/// ```
pub fn validate(table: &RawTable, config: &AnalysisConfig) -> Result<ValidatedBatch, SchemaError> {
    check_required_columns(table)?;
    check_row_limit(table, config.max_rows)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut row_errors = Vec::new();

    for (row_index, row) in table.rows.iter().enumerate() {
        if row.values().all(RawValue::is_blank) {
            continue;
        }
        match coerce_row(row_index, row) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(
                    row_index = error.row_index,
                    employee_id = error.employee_id.as_deref().unwrap_or(""),
                    reason = %error.reason,
                    "Row excluded from analysis"
                );
                row_errors.push(error);
            }
        }
    }

    Ok(ValidatedBatch {
        records,
        row_errors,
    })
}
