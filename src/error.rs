//! Error types for the Productivity Analysis Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors are split by how far they reach:
//!
//! - [`SchemaError`] rejects a whole dataset before any row is processed.
//! - [`RowError`] is a value, not a failure: the row is dropped and the
//!   reason is returned alongside the successful results.
//! - [`ExportError`] fails one export call and leaves the analysis reusable.
//! - [`IngestError`] covers turning uploaded bytes into a raw table.
//!
//! [`EngineError`] wraps all of them for callers that want a single type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The dataset does not have the shape the validator requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more required columns are absent.
    #[error("Missing columns: {}", .columns.join(", "))]
    MissingColumns {
        /// The missing column names, in required-column order.
        columns: Vec<String>,
    },

    /// The dataset has more rows than the configured limit.
    #[error("Dataset has {count} rows, exceeding the limit of {max}")]
    TooManyRows {
        /// Number of data rows in the dataset.
        count: usize,
        /// The configured maximum.
        max: usize,
    },
}

/// Why a single row was excluded from analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowErrorReason {
    /// A required cell is empty or blank.
    #[error("{column} is empty")]
    MissingValue {
        /// The column with no value.
        column: String,
    },

    /// A numeric cell could not be parsed as a finite number.
    #[error("{column} is not a number: '{value}'")]
    InvalidNumber {
        /// The numeric column.
        column: String,
        /// The raw cell content.
        value: String,
    },

    /// A numeric cell holds a negative number.
    #[error("{column} must not be negative: {value}")]
    NegativeValue {
        /// The numeric column.
        column: String,
        /// The parsed value.
        value: f64,
    },

    /// The employment type is neither `Full-Time` nor `Part-Time`.
    #[error("Unknown employment type '{value}' (expected Full-Time or Part-Time)")]
    UnknownEmploymentType {
        /// The raw cell content.
        value: String,
    },
}

/// A non-fatal, per-row validation failure.
///
/// # Example
///
/// ```
/// use productivity_engine::error::{RowError, RowErrorReason};
///
/// let error = RowError {
///     row_index: 3,
///     employee_id: Some("EMP0004".to_string()),
///     reason: RowErrorReason::UnknownEmploymentType {
///         value: "Contractor".to_string(),
///     },
/// };
/// assert_eq!(
///     error.to_string(),
///     "Row 3 (EMP0004): Unknown employment type 'Contractor' (expected Full-Time or Part-Time)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("Row {row_index}{}: {reason}", .employee_id.as_ref().map(|id| format!(" ({id})")).unwrap_or_default())]
pub struct RowError {
    /// Zero-based index of the row among the data rows (header excluded).
    pub row_index: usize,
    /// The employee id, when the row had a usable one.
    pub employee_id: Option<String>,
    /// What was wrong with the row.
    pub reason: RowErrorReason,
}

/// An export call could not produce an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The analysis result disagrees with a fresh re-aggregation of its records.
    #[error("Inconsistent analysis result: {message}")]
    InconsistentResult {
        /// Which summary diverged and how.
        message: String,
    },

    /// The requested export target is not supported.
    #[error("Unsupported export target: {target}")]
    UnsupportedTarget {
        /// The requested target name.
        target: String,
    },

    /// The workbook writer failed.
    #[error("Spreadsheet export failed: {message}")]
    Spreadsheet {
        /// The writer's error message.
        message: String,
    },

    /// The PDF writer failed.
    #[error("PDF export failed: {message}")]
    Pdf {
        /// The writer's error message.
        message: String,
    },
}

/// Uploaded bytes could not be read as a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The CSV reader rejected the input.
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The workbook reader rejected the input.
    #[error("Failed to read workbook: {message}")]
    Workbook {
        /// The reader's error message.
        message: String,
    },

    /// The input has no header row.
    #[error("Input contains no header row")]
    EmptyInput,
}

/// The main error type for the Productivity Analysis Engine.
///
/// # Example
///
/// ```
/// use productivity_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/analysis.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/analysis.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The dataset was rejected as a whole.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// An export failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The uploaded bytes could not be read.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "hours_per_leave_day".to_string(),
            message: "must be a finite, non-negative number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'hours_per_leave_day': must be a finite, non-negative number"
        );
    }

    #[test]
    fn test_missing_columns_lists_every_column() {
        let error = SchemaError::MissingColumns {
            columns: vec!["Actual_Hours".to_string(), "Leave_Days".to_string()],
        };
        assert_eq!(error.to_string(), "Missing columns: Actual_Hours, Leave_Days");
    }

    #[test]
    fn test_too_many_rows_displays_count_and_limit() {
        let error = SchemaError::TooManyRows { count: 12, max: 10 };
        assert_eq!(
            error.to_string(),
            "Dataset has 12 rows, exceeding the limit of 10"
        );
    }

    #[test]
    fn test_row_error_without_employee_id() {
        let error = RowError {
            row_index: 0,
            employee_id: None,
            reason: RowErrorReason::MissingValue {
                column: "Employee_ID".to_string(),
            },
        };
        assert_eq!(error.to_string(), "Row 0: Employee_ID is empty");
    }

    #[test]
    fn test_row_error_reason_serializes_with_kind_tag() {
        let reason = RowErrorReason::InvalidNumber {
            column: "Actual_Hours".to_string(),
            value: "abc".to_string(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["kind"], "invalid_number");
        assert_eq!(json["column"], "Actual_Hours");
        assert_eq!(json["value"], "abc");
    }

    #[test]
    fn test_schema_error_is_transparent_in_engine_error() {
        let error: EngineError = SchemaError::MissingColumns {
            columns: vec!["Leave_Days".to_string()],
        }
        .into();
        assert_eq!(error.to_string(), "Missing columns: Leave_Days");
    }

    #[test]
    fn test_unsupported_target_displays_target() {
        let error = ExportError::UnsupportedTarget {
            target: "docx".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported export target: docx");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<SchemaError>();
        assert_error::<RowError>();
        assert_error::<ExportError>();
        assert_error::<IngestError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_schema_error() -> Result<(), SchemaError> {
            Err(SchemaError::TooManyRows { count: 2, max: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_schema_error()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::Schema(SchemaError::TooManyRows { .. }))
        ));
    }
}
