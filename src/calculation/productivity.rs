//! Productivity percentage and classification.
//!
//! This module turns a validated [`EmployeeRecord`] into its
//! [`DerivedMetrics`]. The calculation has two outcomes, selected by the
//! [`ExpectedHours`] state:
//!
//! - **Ratio**: expected hours are positive, so
//!   `productivity_pct = actual_hours / expected_hours * 100` and the status
//!   is Productive iff the percentage meets the threshold (inclusive).
//! - **Degenerate**: leave hours meet or exceed standard hours. No ratio
//!   exists, so the percentage is 0, the status is Not Productive and
//!   `degenerate_expected_hours` is set for downstream reporting.

use crate::config::AnalysisConfig;
use crate::models::{AuditStep, DerivedMetrics, EmployeeRecord, ProductivityStatus};

use super::expected_hours::{ExpectedHours, calculate_expected_hours};

/// Rule identifier recorded in audit steps.
pub const PRODUCTIVITY_RULE_ID: &str = "productivity_classification";

/// The result of a traced productivity calculation.
#[derive(Debug, Clone)]
pub struct ProductivityCalculation {
    /// The derived metrics.
    pub metrics: DerivedMetrics,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Classifies a productivity percentage against the threshold.
///
/// The boundary is inclusive: a percentage equal to the threshold is productive.
pub fn classify(productivity_pct: f64, threshold_pct: f64) -> ProductivityStatus {
    if productivity_pct >= threshold_pct {
        ProductivityStatus::Productive
    } else {
        ProductivityStatus::NotProductive
    }
}

/// Computes the derived metrics for one record.
///
/// Pure and deterministic: the same record and configuration always give
/// bit-identical metrics.
///
/// # Examples
///
/// ## Full-time employee above threshold
///
/// ```
/// use productivity_engine::calculation::compute;
/// use productivity_engine::config::AnalysisConfig;
/// use productivity_engine::models::{EmployeeRecord, EmploymentType, ProductivityStatus};
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
/// let metrics = compute(&record, &AnalysisConfig::default());
/// assert_eq!(metrics.expected_hours, 184.0);
/// assert!((metrics.productivity_pct - 100.815217391).abs() < 1e-6);
/// assert_eq!(metrics.status, ProductivityStatus::Productive);
/// ```
///
/// ## All leave, no ratio
///
/// ```
/// use productivity_engine::calculation::compute;
/// use productivity_engine::config::AnalysisConfig;
/// use productivity_engine::models::{EmployeeRecord, EmploymentType, ProductivityStatus};
///
/// let record = EmployeeRecord {
///     employee_id: "EMP0003".to_string(),
///     name: "Employee 3".to_string(),
///     department: "HR".to_string(),
///     employment_type: EmploymentType::PartTime,
///     actual_hours: 12.0,
///     leave_days: 13.0,
/// };
///
/// let metrics = compute(&record, &AnalysisConfig::default());
/// assert_eq!(metrics.productivity_pct, 0.0);
/// assert_eq!(metrics.status, ProductivityStatus::NotProductive);
/// assert!(metrics.degenerate_expected_hours);
/// ```
pub fn compute(record: &EmployeeRecord, config: &AnalysisConfig) -> DerivedMetrics {
    let breakdown = calculate_expected_hours(record, config);

    let (productivity_pct, status) = match breakdown.expected {
        ExpectedHours::Positive(expected) => {
            let pct = record.actual_hours / expected * 100.0;
            (pct, classify(pct, config.productivity_threshold_pct))
        }
        ExpectedHours::Degenerate(_) => (0.0, ProductivityStatus::NotProductive),
    };

    DerivedMetrics {
        standard_hours: breakdown.standard_hours,
        leave_hours: breakdown.leave_hours,
        expected_hours: breakdown.expected.hours(),
        productivity_pct,
        status,
        degenerate_expected_hours: breakdown.expected.is_degenerate(),
    }
}

/// Computes the derived metrics and records an audit step explaining them.
///
/// # Arguments
///
/// * `record` - The validated employee record
/// * `config` - The analysis configuration
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_productivity(
    record: &EmployeeRecord,
    config: &AnalysisConfig,
    step_number: u32,
) -> ProductivityCalculation {
    let metrics = compute(record, config);

    let reasoning = if metrics.degenerate_expected_hours {
        format!(
            "Leave of {} hours meets or exceeds {} standard hours (expected {}); productivity set to 0%, Not Productive",
            metrics.leave_hours, metrics.standard_hours, metrics.expected_hours
        )
    } else {
        let comparison = if metrics.status.is_productive() {
            ">="
        } else {
            "<"
        };
        format!(
            "{} / {} x 100 = {:.2}% {} {}% threshold: {}",
            record.actual_hours,
            metrics.expected_hours,
            metrics.productivity_pct,
            comparison,
            config.productivity_threshold_pct,
            metrics.status
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: PRODUCTIVITY_RULE_ID.to_string(),
        rule_name: "Productivity Classification".to_string(),
        employee_id: record.employee_id.clone(),
        input: serde_json::json!({
            "employment_type": record.employment_type.as_str(),
            "actual_hours": record.actual_hours,
            "leave_days": record.leave_days,
            "hours_per_leave_day": config.hours_per_leave_day,
            "threshold_pct": config.productivity_threshold_pct
        }),
        output: serde_json::json!({
            "standard_hours": metrics.standard_hours,
            "leave_hours": metrics.leave_hours,
            "expected_hours": metrics.expected_hours,
            "productivity_pct": metrics.productivity_pct,
            "status": metrics.status.as_str(),
            "degenerate_expected_hours": metrics.degenerate_expected_hours
        }),
        reasoning,
    };

    ProductivityCalculation {
        metrics,
        audit_step,
    }
}
