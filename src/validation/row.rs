//! Per-row coercion from raw cells to an [`EmployeeRecord`].

use crate::error::{RowError, RowErrorReason};
use crate::models::{EmployeeRecord, EmploymentType, RawRow, RawValue};

use super::schema::{ACTUAL_HOURS, DEPARTMENT, EMPLOYEE_ID, EMPLOYMENT_TYPE, LEAVE_DAYS, NAME};

/// Converts one raw row into a typed record.
///
/// Fields are checked in column order and the first failure is reported.
/// The employee id is attached to the error whenever it was usable.
pub fn coerce_row(row_index: usize, row: &RawRow) -> Result<EmployeeRecord, RowError> {
    let employee_id = text_field(row, EMPLOYEE_ID);
    let fail = |reason: RowErrorReason| RowError {
        row_index,
        employee_id: employee_id.as_ref().ok().cloned(),
        reason,
    };

    let employee_id_value = employee_id.clone().map_err(fail)?;
    let name = text_field(row, NAME).map_err(fail)?;
    let department = text_field(row, DEPARTMENT).map_err(fail)?;
    let employment_type = employment_type_field(row).map_err(fail)?;
    let actual_hours = non_negative_field(row, ACTUAL_HOURS).map_err(fail)?;
    let leave_days = non_negative_field(row, LEAVE_DAYS).map_err(fail)?;

    Ok(EmployeeRecord {
        employee_id: employee_id_value,
        name,
        department,
        employment_type,
        actual_hours,
        leave_days,
    })
}

static EMPTY: RawValue = RawValue::Empty;

fn cell<'a>(row: &'a RawRow, column: &str) -> &'a RawValue {
    row.get(column).unwrap_or(&EMPTY)
}

/// Reads a non-blank text cell, keeping its content verbatim.
fn text_field(row: &RawRow, column: &str) -> Result<String, RowErrorReason> {
    let value = cell(row, column);
    if value.is_blank() {
        return Err(RowErrorReason::MissingValue {
            column: column.to_string(),
        });
    }
    Ok(value.to_string())
}

fn employment_type_field(row: &RawRow) -> Result<EmploymentType, RowErrorReason> {
    let raw = text_field(row, EMPLOYMENT_TYPE)?;
    raw.trim()
        .parse()
        .map_err(|_| RowErrorReason::UnknownEmploymentType { value: raw })
}

/// Reads a finite, non-negative number from a numeric or text cell.
fn non_negative_field(row: &RawRow, column: &str) -> Result<f64, RowErrorReason> {
    let value = match cell(row, column) {
        RawValue::Empty => {
            return Err(RowErrorReason::MissingValue {
                column: column.to_string(),
            });
        }
        RawValue::Number(n) => *n,
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(RowErrorReason::MissingValue {
                    column: column.to_string(),
                });
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| RowErrorReason::InvalidNumber {
                    column: column.to_string(),
                    value: text.clone(),
                })?
        }
    };

    if !value.is_finite() {
        return Err(RowErrorReason::InvalidNumber {
            column: column.to_string(),
            value: cell(row, column).to_string(),
        });
    }
    if value < 0.0 {
        return Err(RowErrorReason::NegativeValue {
            column: column.to_string(),
            value,
        });
    }

    // Normalize -0.0 so it serializes and compares like 0.
    Ok(if value == 0.0 { 0.0 } else { value })
}
