//! Whole-table schema checks.

use crate::error::SchemaError;
use crate::models::RawTable;

/// Column header for the employee id.
pub const EMPLOYEE_ID: &str = "Employee_ID";
/// Column header for the employee name.
pub const NAME: &str = "Name";
/// Column header for the department.
pub const DEPARTMENT: &str = "Department";
/// Column header for the employment type.
pub const EMPLOYMENT_TYPE: &str = "Employment_Type";
/// Column header for hours worked.
pub const ACTUAL_HOURS: &str = "Actual_Hours";
/// Column header for leave days.
pub const LEAVE_DAYS: &str = "Leave_Days";

/// The columns every dataset must carry, matched exactly and case-sensitively.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    EMPLOYEE_ID,
    NAME,
    DEPARTMENT,
    EMPLOYMENT_TYPE,
    ACTUAL_HOURS,
    LEAVE_DAYS,
];

/// Fails with [`SchemaError::MissingColumns`] naming every absent required column.
pub fn check_required_columns(table: &RawTable) -> Result<(), SchemaError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingColumns { columns: missing })
    }
}

/// Fails with [`SchemaError::TooManyRows`] if the table exceeds `max_rows`.
pub fn check_row_limit(table: &RawTable, max_rows: usize) -> Result<(), SchemaError> {
    if table.rows.len() > max_rows {
        return Err(SchemaError::TooManyRows {
            count: table.rows.len(),
            max: max_rows,
        });
    }
    Ok(())
}
