//! Expected hours calculation.
//!
//! Expected hours are the standard hours for an employment type less the
//! hours deducted for leave. They are the denominator of the productivity
//! ratio, so the result is classified into an explicit [`ExpectedHours`]
//! state: only a strictly positive value supports a ratio.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::models::EmployeeRecord;

/// Expected hours, classified by whether a ratio can be taken against them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "hours", rename_all = "snake_case")]
pub enum ExpectedHours {
    /// Strictly positive expected hours.
    Positive(f64),
    /// Leave met or exceeded the standard hours; holds the zero or negative value.
    Degenerate(f64),
}

impl ExpectedHours {
    /// Classifies a raw expected-hours value.
    pub fn classify(hours: f64) -> Self {
        if hours > 0.0 {
            ExpectedHours::Positive(hours)
        } else {
            ExpectedHours::Degenerate(hours)
        }
    }

    /// Returns the underlying hours, whatever the state.
    pub fn hours(&self) -> f64 {
        match *self {
            ExpectedHours::Positive(h) | ExpectedHours::Degenerate(h) => h,
        }
    }

    /// Returns true for [`ExpectedHours::Degenerate`].
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ExpectedHours::Degenerate(_))
    }
}

/// The hour components that lead to expected hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Standard hours for the employment type.
    pub standard_hours: f64,
    /// `leave_days * hours_per_leave_day`.
    pub leave_hours: f64,
    /// `standard_hours - leave_hours`, classified.
    pub expected: ExpectedHours,
}

/// Computes standard, leave and expected hours for a record.
///
/// # Examples
///
/// ```
/// use productivity_engine::calculation::{calculate_expected_hours, ExpectedHours};
/// use productivity_engine::config::AnalysisConfig;
/// use productivity_engine::models::{EmployeeRecord, EmploymentType};
///
/// let record = EmployeeRecord {
///     employee_id: "EMP0001".to_string(),
///     name: "Employee 1".to_string(),
///     department: "Engineering".to_string(),
///     employment_type: EmploymentType::FullTime,
///     actual_hours: 185.5,
///     leave_days: 2.0,
/// };
///
/// let breakdown = calculate_expected_hours(&record, &AnalysisConfig::default());
/// assert_eq!(breakdown.standard_hours, 200.0);
/// assert_eq!(breakdown.leave_hours, 16.0);
/// assert_eq!(breakdown.expected, ExpectedHours::Positive(184.0));
/// ```
pub fn calculate_expected_hours(record: &EmployeeRecord, config: &AnalysisConfig) -> HoursBreakdown {
    let standard_hours = config.standard_hours(record.employment_type);
    let leave_hours = record.leave_days * config.hours_per_leave_day;

    HoursBreakdown {
        standard_hours,
        leave_hours,
        expected: ExpectedHours::classify(standard_hours - leave_hours),
    }
}
