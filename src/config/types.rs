//! Configuration types for productivity analysis.
//!
//! This module contains the strongly-typed [`AnalysisConfig`] that is
//! deserialized from YAML and passed by reference into every analysis call.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentType;

/// Default monthly standard hours for full-time employees.
pub const DEFAULT_FULLTIME_STANDARD_HOURS: f64 = 200.0;

/// Default monthly standard hours for part-time employees.
pub const DEFAULT_PARTTIME_STANDARD_HOURS: f64 = 100.0;

/// Default number of hours deducted per day of leave.
pub const DEFAULT_HOURS_PER_LEAVE_DAY: f64 = 8.0;

/// Default productivity percentage at or above which an employee is productive.
pub const DEFAULT_PRODUCTIVITY_THRESHOLD_PCT: f64 = 90.0;

/// Default upper bound on the number of rows in one dataset.
pub const DEFAULT_MAX_ROWS: usize = 100_000;

/// The constants that drive one analysis run.
///
/// The value is immutable once built; concurrent runs share it by reference.
/// Every field is optional in YAML and falls back to its default.
///
/// # Example
///
/// ```
/// use productivity_engine::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.fulltime_standard_hours, 200.0);
/// assert_eq!(config.productivity_threshold_pct, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Standard monthly hours for a full-time employee.
    pub fulltime_standard_hours: f64,
    /// Standard monthly hours for a part-time employee.
    pub parttime_standard_hours: f64,
    /// Hours deducted from the standard for each leave day.
    pub hours_per_leave_day: f64,
    /// Inclusive productivity threshold, in percent.
    pub productivity_threshold_pct: f64,
    /// Maximum number of data rows accepted in one dataset.
    pub max_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fulltime_standard_hours: DEFAULT_FULLTIME_STANDARD_HOURS,
            parttime_standard_hours: DEFAULT_PARTTIME_STANDARD_HOURS,
            hours_per_leave_day: DEFAULT_HOURS_PER_LEAVE_DAY,
            productivity_threshold_pct: DEFAULT_PRODUCTIVITY_THRESHOLD_PCT,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl AnalysisConfig {
    /// Returns the standard hours for an employment type.
    pub fn standard_hours(&self, employment_type: EmploymentType) -> f64 {
        match employment_type {
            EmploymentType::FullTime => self.fulltime_standard_hours,
            EmploymentType::PartTime => self.parttime_standard_hours,
        }
    }

    /// Checks that every value is usable.
    ///
    /// Hour values and the threshold must be finite and non-negative;
    /// `max_rows` must be at least one.
    pub fn validate(&self) -> EngineResult<()> {
        let numeric_fields = [
            ("fulltime_standard_hours", self.fulltime_standard_hours),
            ("parttime_standard_hours", self.parttime_standard_hours),
            ("hours_per_leave_day", self.hours_per_leave_day),
            ("productivity_threshold_pct", self.productivity_threshold_pct),
        ];

        for (field, value) in numeric_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be a finite, non-negative number (got {})", value),
                });
            }
        }

        if self.max_rows == 0 {
            return Err(EngineError::InvalidConfig {
                field: "max_rows".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.fulltime_standard_hours, 200.0);
        assert_eq!(config.parttime_standard_hours, 100.0);
        assert_eq!(config.hours_per_leave_day, 8.0);
        assert_eq!(config.productivity_threshold_pct, 90.0);
        assert_eq!(config.max_rows, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_hours_by_employment_type() {
        let config = AnalysisConfig::default();
        assert_eq!(config.standard_hours(EmploymentType::FullTime), 200.0);
        assert_eq!(config.standard_hours(EmploymentType::PartTime), 100.0);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: AnalysisConfig =
            serde_yaml::from_str("productivity_threshold_pct: 85\n").unwrap();
        assert_eq!(config.productivity_threshold_pct, 85.0);
        assert_eq!(config.fulltime_standard_hours, 200.0);
        assert_eq!(config.max_rows, 100_000);
    }

    #[test]
    fn test_unknown_yaml_field_is_rejected() {
        let result: Result<AnalysisConfig, _> = serde_yaml::from_str("overtime_rate: 1.5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_hours_are_invalid() {
        let config = AnalysisConfig {
            hours_per_leave_day: -1.0,
            ..AnalysisConfig::default()
        };
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "hours_per_leave_day");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_threshold_is_invalid() {
        let config = AnalysisConfig {
            productivity_threshold_pct: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_rows_is_invalid() {
        let config = AnalysisConfig {
            max_rows: 0,
            ..AnalysisConfig::default()
        };
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "max_rows"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
