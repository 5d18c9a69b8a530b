//! Derived productivity metrics and analyzed records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EmployeeRecord, EmploymentType};

/// Productivity classification of one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductivityStatus {
    /// Productivity percent met or exceeded the threshold.
    Productive,
    /// Productivity percent fell below the threshold, or expected hours were degenerate.
    #[serde(rename = "Not Productive")]
    NotProductive,
}

impl ProductivityStatus {
    /// Returns the label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductivityStatus::Productive => "Productive",
            ProductivityStatus::NotProductive => "Not Productive",
        }
    }

    /// Returns true for [`ProductivityStatus::Productive`].
    pub fn is_productive(&self) -> bool {
        matches!(self, ProductivityStatus::Productive)
    }
}

impl fmt::Display for ProductivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics computed from one [`EmployeeRecord`].
///
/// # Example
///
/// ```
/// use productivity_engine::models::{DerivedMetrics, ProductivityStatus};
///
/// let metrics = DerivedMetrics {
///     standard_hours: 200.0,
///     leave_hours: 16.0,
///     expected_hours: 184.0,
///     productivity_pct: 185.5 / 184.0 * 100.0,
///     status: ProductivityStatus::Productive,
///     degenerate_expected_hours: false,
/// };
/// assert!(metrics.status.is_productive());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Baseline hours for the employment type.
    pub standard_hours: f64,
    /// Hours deducted for leave.
    pub leave_hours: f64,
    /// Standard hours minus leave hours; may be zero or negative.
    pub expected_hours: f64,
    /// Actual hours as a percentage of expected hours; 0 when degenerate.
    pub productivity_pct: f64,
    /// Classification against the configured threshold.
    pub status: ProductivityStatus,
    /// Set when expected hours were zero or negative.
    pub degenerate_expected_hours: bool,
}

/// An employee record together with its derived metrics.
///
/// Serializes as one flat object carrying both the record fields and the
/// metric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    /// The validated input row.
    #[serde(flatten)]
    pub record: EmployeeRecord,
    /// Metrics computed from the row.
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

impl AnalyzedRecord {
    /// Returns the department grouping key.
    pub fn department(&self) -> &str {
        &self.record.department
    }

    /// Returns the employment type grouping key.
    pub fn employment_type(&self) -> EmploymentType {
        self.record.employment_type
    }

    /// Returns true if the employee was classified productive.
    pub fn is_productive(&self) -> bool {
        self.metrics.status.is_productive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_analyzed_record() -> AnalyzedRecord {
        AnalyzedRecord {
            record: EmployeeRecord {
                employee_id: "EMP0003".to_string(),
                name: "Employee 3".to_string(),
                department: "HR".to_string(),
                employment_type: EmploymentType::PartTime,
                actual_hours: 40.0,
                leave_days: 13.0,
            },
            metrics: DerivedMetrics {
                standard_hours: 100.0,
                leave_hours: 104.0,
                expected_hours: -4.0,
                productivity_pct: 0.0,
                status: ProductivityStatus::NotProductive,
                degenerate_expected_hours: true,
            },
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ProductivityStatus::Productive).unwrap(),
            "\"Productive\""
        );
        assert_eq!(
            serde_json::to_string(&ProductivityStatus::NotProductive).unwrap(),
            "\"Not Productive\""
        );
    }

    #[test]
    fn test_analyzed_record_serializes_flat() {
        let json = serde_json::to_value(create_analyzed_record()).unwrap();

        assert_eq!(json["employee_id"], "EMP0003");
        assert_eq!(json["employment_type"], "Part-Time");
        assert_eq!(json["standard_hours"], 100.0);
        assert_eq!(json["leave_hours"], 104.0);
        assert_eq!(json["expected_hours"], -4.0);
        assert_eq!(json["productivity_pct"], 0.0);
        assert_eq!(json["status"], "Not Productive");
        assert_eq!(json["degenerate_expected_hours"], true);
        assert!(json.get("record").is_none());
        assert!(json.get("metrics").is_none());
    }

    #[test]
    fn test_analyzed_record_deserializes_from_flat_object() {
        let original = create_analyzed_record();
        let json = serde_json::to_string(&original).unwrap();

        let parsed: AnalyzedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_accessors() {
        let record = create_analyzed_record();
        assert_eq!(record.department(), "HR");
        assert_eq!(record.employment_type(), EmploymentType::PartTime);
        assert!(!record.is_productive());
    }
}
