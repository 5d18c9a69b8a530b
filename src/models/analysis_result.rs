//! Analysis result models for the Productivity Analysis Engine.
//!
//! This module contains the [`AnalysisResult`] type and its summaries, plus
//! the [`AnalysisOutcome`] envelope returned by the pipeline, which adds run
//! metadata, row errors and an audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AnalyzedRecord, EmploymentType};
use crate::error::RowError;

/// Aggregated statistics for one grouping key.
///
/// # Example
///
/// ```
/// use productivity_engine::models::GroupSummary;
///
/// let summary = GroupSummary {
///     key: "Engineering".to_string(),
///     employee_count: 2,
///     productive_count: 1,
///     not_productive_count: 1,
///     average_actual_hours: 170.0,
///     average_productivity_pct: 88.5,
/// };
/// assert_eq!(summary.employee_count, summary.productive_count + summary.not_productive_count);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// The department name or employment type label.
    pub key: String,
    /// Number of records in the group.
    pub employee_count: usize,
    /// Number of records classified productive.
    pub productive_count: usize,
    /// Number of records classified not productive.
    pub not_productive_count: usize,
    /// Mean of `actual_hours` over the group.
    pub average_actual_hours: f64,
    /// Mean of `productivity_pct` over the group.
    pub average_productivity_pct: f64,
}

/// Statistics over the whole record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSummary {
    /// Number of analyzed records.
    pub total_employees: usize,
    /// Number of records classified productive.
    pub total_productive: usize,
    /// Number of records classified not productive.
    pub total_not_productive: usize,
    /// Mean `productivity_pct` over all records; 0 for an empty dataset.
    pub overall_average_productivity: f64,
    /// Number of records whose expected hours were zero or negative.
    pub degenerate_count: usize,
}

/// The complete output of one analysis.
///
/// Every record appears in exactly one department summary and one
/// employment-type summary, and every summary equals a fresh re-aggregation
/// of `records`. Build it with [`crate::aggregation::aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Analyzed records in input order.
    pub records: Vec<AnalyzedRecord>,
    /// One summary per department, ordered by department name.
    pub department_summaries: Vec<GroupSummary>,
    /// One summary per employment type present, Full-Time first.
    pub employment_type_summaries: Vec<GroupSummary>,
    /// Statistics over all records.
    pub global: GlobalSummary,
}

impl AnalysisResult {
    /// Iterates over the records of one employment type, in input order.
    pub fn records_of_type(
        &self,
        employment_type: EmploymentType,
    ) -> impl Iterator<Item = &AnalyzedRecord> {
        self.records
            .iter()
            .filter(move |r| r.employment_type() == employment_type)
    }

    /// Returns the summary for a department, if any record belongs to it.
    pub fn department(&self, name: &str) -> Option<&GroupSummary> {
        self.department_summaries.iter().find(|s| s.key == name)
    }

    /// Returns the summary for an employment type, if any record has it.
    pub fn employment_type(&self, employment_type: EmploymentType) -> Option<&GroupSummary> {
        self.employment_type_summaries
            .iter()
            .find(|s| s.key == employment_type.as_str())
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the step was computed for.
    pub employee_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// An advisory finding that does not exclude any record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The audit trace for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Per-record calculation steps; empty unless tracing was requested.
    pub steps: Vec<AuditStep>,
    /// Advisory warnings raised during the run.
    pub warnings: Vec<AnalysisWarning>,
    /// The total analysis duration in microseconds.
    pub duration_us: u64,
}

/// Everything one call to [`crate::pipeline::analyze`] produces.
///
/// `result` depends only on the input and configuration; the metadata
/// fields differ between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// Unique identifier for this run.
    pub analysis_id: Uuid,
    /// When the run was performed.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Analyzed records and summaries.
    pub result: AnalysisResult,
    /// Rows excluded by validation, in input order.
    pub row_errors: Vec<RowError>,
    /// Audit trace of the run.
    pub audit_trace: AuditTrace,
}
