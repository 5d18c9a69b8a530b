//! Aggregation of analyzed records into summaries.
//!
//! Records are reduced in two passes. The first pass partitions them by
//! department (raw string equality, no trimming or case-folding, so
//! `"Sales"` and `"sales"` are distinct groups) and independently by
//! employment type. The second pass turns each partition into a
//! [`GroupSummary`]. The global summary is computed straight from the
//! record sequence rather than from group averages.

mod consistency;
mod group;

use std::collections::BTreeMap;

use crate::models::{AnalysisResult, AnalyzedRecord, EmploymentType, GlobalSummary, GroupSummary};

pub use consistency::{CONSISTENCY_TOLERANCE, check_consistency};

use group::{GroupAccumulator, mean};

/// Builds the department summaries, ordered by department name.
pub fn summarize_by_department(records: &[AnalyzedRecord]) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<&str, GroupAccumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.department()).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|(key, acc)| acc.finish(key.to_string()))
        .collect()
}

/// Builds the employment-type summaries, Full-Time first.
///
/// Only employment types that occur in `records` get a summary.
pub fn summarize_by_employment_type(records: &[AnalyzedRecord]) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<EmploymentType, GroupAccumulator> = BTreeMap::new();
    for record in records {
        groups.entry(record.employment_type()).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|(key, acc)| acc.finish(key.as_str().to_string()))
        .collect()
}

/// Builds the global summary over every record.
pub fn summarize_global(records: &[AnalyzedRecord]) -> GlobalSummary {
    let total_employees = records.len();
    let total_productive = records.iter().filter(|r| r.is_productive()).count();
    let degenerate_count = records
        .iter()
        .filter(|r| r.metrics.degenerate_expected_hours)
        .count();
    let productivity_sum: f64 = records.iter().map(|r| r.metrics.productivity_pct).sum();

    GlobalSummary {
        total_employees,
        total_productive,
        total_not_productive: total_employees - total_productive,
        overall_average_productivity: mean(productivity_sum, total_employees),
        degenerate_count,
    }
}

/// Aggregates analyzed records into a complete [`AnalysisResult`].
///
/// The records are kept in the order given.
///
/// # Example
///
/// ```
/// use productivity_engine::aggregation::aggregate;
/// use productivity_engine::calculation::compute;
/// use productivity_engine::config::AnalysisConfig;
/// use productivity_engine::models::{AnalyzedRecord, EmployeeRecord, EmploymentType};
///
/// let config = AnalysisConfig::default();
/// let records: Vec<AnalyzedRecord> = [("A", "Sales", 180.0), ("B", "Sales", 100.0)]
///     .into_iter()
///     .map(|(id, department, hours)| {
///         let record = EmployeeRecord {
///             employee_id: id.to_string(),
///             name: id.to_string(),
///             department: department.to_string(),
///             employment_type: EmploymentType::FullTime,
///             actual_hours: hours,
///             leave_days: 0.0,
///         };
///         let metrics = compute(&record, &config);
///         AnalyzedRecord { record, metrics }
///     })
///     .collect();
///
/// let result = aggregate(records);
/// assert_eq!(result.global.total_employees, 2);
/// assert_eq!(result.department("Sales").unwrap().productive_count, 1);
/// ```
pub fn aggregate(records: Vec<AnalyzedRecord>) -> AnalysisResult {
    let department_summaries = summarize_by_department(&records);
    let employment_type_summaries = summarize_by_employment_type(&records);
    let global = summarize_global(&records);

    AnalysisResult {
        records,
        department_summaries,
        employment_type_summaries,
        global,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::config::AnalysisConfig;
    use crate::models::EmployeeRecord;

    fn analyzed(
        id: &str,
        department: &str,
        employment_type: EmploymentType,
        actual_hours: f64,
        leave_days: f64,
    ) -> AnalyzedRecord {
        let record = EmployeeRecord {
            employee_id: id.to_string(),
            name: format!("Employee {}", id),
            department: department.to_string(),
            employment_type,
            actual_hours,
            leave_days,
        };
        let metrics = compute(&record, &AnalysisConfig::default());
        AnalyzedRecord { record, metrics }
    }

    fn sample_records() -> Vec<AnalyzedRecord> {
        vec![
            analyzed("1", "Engineering", EmploymentType::FullTime, 185.5, 2.0),
            analyzed("2", "Sales", EmploymentType::PartTime, 85.0, 1.0),
            analyzed("3", "Engineering", EmploymentType::PartTime, 50.0, 0.0),
            analyzed("4", "HR", EmploymentType::PartTime, 10.0, 13.0),
            analyzed("5", "Sales", EmploymentType::FullTime, 160.0, 0.0),
        ]
    }

    #[test]
    fn test_department_summaries_sorted_and_counted() {
        let summaries = summarize_by_department(&sample_records());

        let keys: Vec<&str> = summaries.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["Engineering", "HR", "Sales"]);

        let engineering = &summaries[0];
        assert_eq!(engineering.employee_count, 2);
        assert_eq!(engineering.productive_count, 1);
        assert_eq!(engineering.not_productive_count, 1);
        assert_eq!(engineering.average_actual_hours, (185.5 + 50.0) / 2.0);
    }

    #[test]
    fn test_employment_type_summaries_full_time_first() {
        let summaries = summarize_by_employment_type(&sample_records());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].key, "Full-Time");
        assert_eq!(summaries[0].employee_count, 2);
        assert_eq!(summaries[1].key, "Part-Time");
        assert_eq!(summaries[1].employee_count, 3);
    }

    #[test]
    fn test_absent_employment_type_has_no_summary() {
        let records = vec![analyzed("1", "Ops", EmploymentType::PartTime, 95.0, 0.0)];
        let summaries = summarize_by_employment_type(&records);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].key, "Part-Time");
    }

    #[test]
    fn test_department_case_is_not_folded() {
        let records = vec![
            analyzed("1", "Sales", EmploymentType::FullTime, 180.0, 0.0),
            analyzed("2", "sales", EmploymentType::FullTime, 180.0, 0.0),
            analyzed("3", "Sales ", EmploymentType::FullTime, 180.0, 0.0),
        ];

        let summaries = summarize_by_department(&records);
        assert_eq!(summaries.len(), 3);
        assert!(summaries.iter().all(|s| s.employee_count == 1));
    }

    #[test]
    fn test_global_summary_uses_records_not_group_means() {
        let records = sample_records();
        let global = summarize_global(&records);

        let expected_mean = records
            .iter()
            .map(|r| r.metrics.productivity_pct)
            .sum::<f64>()
            / records.len() as f64;

        assert_eq!(global.total_employees, 5);
        assert_eq!(global.overall_average_productivity, expected_mean);
        assert_eq!(global.degenerate_count, 1);
        assert_eq!(
            global.total_productive + global.total_not_productive,
            global.total_employees
        );
    }

    #[test]
    fn test_group_counts_sum_to_total() {
        let result = aggregate(sample_records());

        let department_total: usize = result
            .department_summaries
            .iter()
            .map(|s| s.employee_count)
            .sum();
        let type_total: usize = result
            .employment_type_summaries
            .iter()
            .map(|s| s.employee_count)
            .sum();

        assert_eq!(department_total, result.global.total_employees);
        assert_eq!(type_total, result.global.total_employees);
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(vec![]);

        assert!(result.department_summaries.is_empty());
        assert!(result.employment_type_summaries.is_empty());
        assert_eq!(result.global.total_employees, 0);
        assert_eq!(result.global.overall_average_productivity, 0.0);
    }

    #[test]
    fn test_aggregate_preserves_record_order() {
        let result = aggregate(sample_records());
        let ids: Vec<&str> = result
            .records
            .iter()
            .map(|r| r.record.employee_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }
}
