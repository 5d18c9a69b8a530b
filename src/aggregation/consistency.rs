//! Re-verification of an [`AnalysisResult`] against its own records.
//!
//! A result built by [`super::aggregate`] always passes. A result that was
//! deserialized, hand-built or edited may not, and exporters refuse to
//! render one that fails.

use std::collections::HashSet;

use crate::models::{AnalysisResult, GlobalSummary, GroupSummary};

use super::{summarize_by_department, summarize_by_employment_type, summarize_global};

/// Absolute tolerance used when comparing averages.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-9;

/// Checks that every summary matches a fresh re-aggregation of the records.
///
/// Returns a description of the first divergence found.
pub fn check_consistency(result: &AnalysisResult) -> Result<(), String> {
    check_groups(
        "department",
        &result.department_summaries,
        &summarize_by_department(&result.records),
    )?;
    check_groups(
        "employment type",
        &result.employment_type_summaries,
        &summarize_by_employment_type(&result.records),
    )?;
    check_global(&result.global, &summarize_global(&result.records))
}

fn check_groups(
    dimension: &str,
    actual: &[GroupSummary],
    expected: &[GroupSummary],
) -> Result<(), String> {
    let mut seen = HashSet::new();
    for summary in actual {
        if summary.employee_count == 0 {
            return Err(format!(
                "{} summary '{}' has no employees",
                dimension, summary.key
            ));
        }
        if !seen.insert(summary.key.as_str()) {
            return Err(format!(
                "{} summary '{}' appears more than once",
                dimension, summary.key
            ));
        }
    }

    for summary in actual {
        let fresh = expected
            .iter()
            .find(|s| s.key == summary.key)
            .ok_or_else(|| {
                format!(
                    "{} summary '{}' matches no records",
                    dimension, summary.key
                )
            })?;
        compare_group(dimension, summary, fresh)?;
    }

    if let Some(missing) = expected.iter().find(|s| !seen.contains(s.key.as_str())) {
        return Err(format!(
            "{} '{}' has {} records but no summary",
            dimension, missing.key, missing.employee_count
        ));
    }

    Ok(())
}

fn compare_group(dimension: &str, actual: &GroupSummary, fresh: &GroupSummary) -> Result<(), String> {
    let counts = [
        ("employee_count", actual.employee_count, fresh.employee_count),
        ("productive_count", actual.productive_count, fresh.productive_count),
        (
            "not_productive_count",
            actual.not_productive_count,
            fresh.not_productive_count,
        ),
    ];
    for (field, got, want) in counts {
        if got != want {
            return Err(format!(
                "{} summary '{}': {} is {} but records give {}",
                dimension, actual.key, field, got, want
            ));
        }
    }

    let averages = [
        (
            "average_actual_hours",
            actual.average_actual_hours,
            fresh.average_actual_hours,
        ),
        (
            "average_productivity_pct",
            actual.average_productivity_pct,
            fresh.average_productivity_pct,
        ),
    ];
    for (field, got, want) in averages {
        if !approx_eq(got, want) {
            return Err(format!(
                "{} summary '{}': {} is {} but records give {}",
                dimension, actual.key, field, got, want
            ));
        }
    }

    Ok(())
}

fn check_global(actual: &GlobalSummary, fresh: &GlobalSummary) -> Result<(), String> {
    let counts = [
        ("total_employees", actual.total_employees, fresh.total_employees),
        ("total_productive", actual.total_productive, fresh.total_productive),
        (
            "total_not_productive",
            actual.total_not_productive,
            fresh.total_not_productive,
        ),
        ("degenerate_count", actual.degenerate_count, fresh.degenerate_count),
    ];
    for (field, got, want) in counts {
        if got != want {
            return Err(format!(
                "global summary: {} is {} but records give {}",
                field, got, want
            ));
        }
    }

    if !approx_eq(
        actual.overall_average_productivity,
        fresh.overall_average_productivity,
    ) {
        return Err(format!(
            "global summary: overall_average_productivity is {} but records give {}",
            actual.overall_average_productivity, fresh.overall_average_productivity
        ));
    }

    Ok(())
}

/// Equal values (including equal infinities from overflowing sums) always match.
fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= CONSISTENCY_TOLERANCE
}
