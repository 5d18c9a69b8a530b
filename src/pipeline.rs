//! The analysis pipeline: validate, compute, aggregate.
//!
//! [`analyze`] is the entry point for a raw table. It validates the
//! configuration and the table, computes metrics for every surviving
//! record, aggregates them, and wraps the result with run metadata and
//! advisory warnings. Nothing is kept between calls.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::aggregation::aggregate;
use crate::calculation::{calculate_productivity, compute};
use crate::config::AnalysisConfig;
use crate::error::EngineResult;
use crate::models::{
    AnalysisOutcome, AnalysisResult, AnalysisWarning, AnalyzedRecord, AuditStep, AuditTrace,
    EmployeeRecord, RawTable,
};
use crate::validation::validate;

/// Warning code for records whose leave covers all standard hours.
pub const DEGENERATE_EXPECTED_HOURS: &str = "DEGENERATE_EXPECTED_HOURS";

/// Warning code for an employee id that occurs on more than one record.
pub const DUPLICATE_EMPLOYEE_ID: &str = "DUPLICATE_EMPLOYEE_ID";

/// Runs a full analysis over a raw table.
///
/// Rows that fail validation are excluded and listed in
/// [`AnalysisOutcome::row_errors`]; they never fail the call.
///
/// # Errors
///
/// [`crate::error::EngineError::InvalidConfig`] for an invalid
/// configuration, and [`crate::error::EngineError::Schema`] if required
/// columns are missing or the table exceeds `config.max_rows`.
///
/// # Example
///
/// ```
/// use productivity_engine::config::AnalysisConfig;
/// use productivity_engine::ingest::read_csv;
/// use productivity_engine::pipeline::analyze;
///
/// let csv = "\
/// Employee_ID,Name,Department,Employment_Type,Actual_Hours,Leave_Days
/// EMP0001,Employee 1,Engineering,Full-Time,185.5,2
/// EMP0002,Employee 2,Sales,Part-Time,85,1
/// ";
/// let table = read_csv(csv.as_bytes()).unwrap();
/// let outcome = analyze(&table, &AnalysisConfig::default()).unwrap();
///
/// assert_eq!(outcome.result.global.total_employees, 2);
/// assert_eq!(outcome.result.global.total_productive, 2);
/// assert!(outcome.row_errors.is_empty());
/// ```
pub fn analyze(table: &RawTable, config: &AnalysisConfig) -> EngineResult<AnalysisOutcome> {
    run(table, config, false)
}

/// Like [`analyze`], but also records one [`AuditStep`] per record in
/// [`AuditTrace::steps`].
pub fn analyze_traced(table: &RawTable, config: &AnalysisConfig) -> EngineResult<AnalysisOutcome> {
    run(table, config, true)
}

/// Computes metrics for typed records and aggregates them.
///
/// The configuration is assumed valid; [`analyze`] checks it first.
pub fn analyze_records(records: Vec<EmployeeRecord>, config: &AnalysisConfig) -> AnalysisResult {
    aggregate(compute_all(records, config))
}

fn run(table: &RawTable, config: &AnalysisConfig, traced: bool) -> EngineResult<AnalysisOutcome> {
    let start_time = Instant::now();
    let analysis_id = Uuid::new_v4();

    config.validate()?;

    info!(
        analysis_id = %analysis_id,
        rows = table.rows.len(),
        traced,
        "Analysis started"
    );

    let batch = validate(table, config).inspect_err(|err| {
        warn!(analysis_id = %analysis_id, error = %err, "Dataset rejected");
    })?;

    let mut steps = Vec::new();
    let records = if traced {
        compute_traced(batch.records, config, &mut steps)
    } else {
        compute_all(batch.records, config)
    };

    let warnings = collect_warnings(&records);
    let result = aggregate(records);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        analysis_id = %analysis_id,
        analyzed = result.global.total_employees,
        excluded = batch.row_errors.len(),
        productive = result.global.total_productive,
        warnings = warnings.len(),
        duration_us,
        "Analysis completed"
    );

    Ok(AnalysisOutcome {
        analysis_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result,
        row_errors: batch.row_errors,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn compute_all(records: Vec<EmployeeRecord>, config: &AnalysisConfig) -> Vec<AnalyzedRecord> {
    records
        .into_iter()
        .map(|record| {
            let metrics = compute(&record, config);
            AnalyzedRecord { record, metrics }
        })
        .collect()
}

fn compute_traced(
    records: Vec<EmployeeRecord>,
    config: &AnalysisConfig,
    steps: &mut Vec<AuditStep>,
) -> Vec<AnalyzedRecord> {
    steps.reserve(records.len());
    let mut step_number: u32 = 1;

    records
        .into_iter()
        .map(|record| {
            let calculation = calculate_productivity(&record, config, step_number);
            step_number += 1;
            steps.push(calculation.audit_step);
            AnalyzedRecord {
                record,
                metrics: calculation.metrics,
            }
        })
        .collect()
}

fn collect_warnings(records: &[AnalyzedRecord]) -> Vec<AnalysisWarning> {
    let mut warnings = Vec::new();

    for analyzed in records.iter().filter(|r| r.metrics.degenerate_expected_hours) {
        let record = &analyzed.record;
        debug!(
            employee_id = %record.employee_id,
            leave_days = record.leave_days,
            expected_hours = analyzed.metrics.expected_hours,
            "Expected hours not positive"
        );
        warnings.push(AnalysisWarning {
            code: DEGENERATE_EXPECTED_HOURS.to_string(),
            message: format!(
                "Employee {}: {} leave days leave {} expected hours; productivity reported as 0%",
                record.employee_id, record.leave_days, analyzed.metrics.expected_hours
            ),
            severity: "medium".to_string(),
        });
    }

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for analyzed in records {
        *occurrences.entry(analyzed.record.employee_id.as_str()).or_default() += 1;
    }
    let mut reported = HashSet::new();
    for analyzed in records {
        let id = analyzed.record.employee_id.as_str();
        let count = occurrences[id];
        if count > 1 && reported.insert(id) {
            warnings.push(AnalysisWarning {
                code: DUPLICATE_EMPLOYEE_ID.to_string(),
                message: format!(
                    "Employee ID '{}' appears on {} records; each is analyzed separately",
                    id, count
                ),
                severity: "low".to_string(),
            });
        }
    }

    warnings
}
