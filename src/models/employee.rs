//! Employee record model and related types.
//!
//! This module defines the [`EmployeeRecord`] struct and [`EmploymentType`]
//! enum representing one validated row of an attendance dataset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
///
/// Serialized using the same labels the input dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Full-time employment.
    #[serde(rename = "Full-Time")]
    FullTime,
    /// Part-time employment.
    #[serde(rename = "Part-Time")]
    PartTime,
}

impl EmploymentType {
    /// All employment types, in report order.
    pub const ALL: [EmploymentType; 2] = [EmploymentType::FullTime, EmploymentType::PartTime];

    /// Returns the dataset label for this employment type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-Time",
            EmploymentType::PartTime => "Part-Time",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not a known employment type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmploymentType(pub String);

impl FromStr for EmploymentType {
    type Err = UnknownEmploymentType;

    /// Parses a dataset label. Matching is exact and case-sensitive.
    ///
    /// ```
    /// use productivity_engine::models::EmploymentType;
    ///
    /// assert_eq!("Full-Time".parse(), Ok(EmploymentType::FullTime));
    /// assert!("full-time".parse::<EmploymentType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-Time" => Ok(EmploymentType::FullTime),
            "Part-Time" => Ok(EmploymentType::PartTime),
            other => Err(UnknownEmploymentType(other.to_string())),
        }
    }
}

/// One validated row of the attendance dataset.
///
/// Created by the validator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Identifier of the employee; uniqueness is advisory.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// Department name, used verbatim as a grouping key.
    pub department: String,
    /// The employment arrangement.
    pub employment_type: EmploymentType,
    /// Hours actually worked in the period.
    pub actual_hours: f64,
    /// Days of leave taken in the period; may be fractional.
    pub leave_days: f64,
}
