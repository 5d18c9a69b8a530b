//! Running totals for one partition of records.

use crate::models::{AnalyzedRecord, GroupSummary};

/// Accumulates counts and sums for one grouping key.
///
/// Averages are only produced by [`GroupAccumulator::finish`], so a
/// partition is never summarized before all of its records are seen.
#[derive(Debug, Clone, Default)]
pub(crate) struct GroupAccumulator {
    employee_count: usize,
    productive_count: usize,
    actual_hours_sum: f64,
    productivity_pct_sum: f64,
}

impl GroupAccumulator {
    pub(crate) fn add(&mut self, record: &AnalyzedRecord) {
        self.employee_count += 1;
        if record.is_productive() {
            self.productive_count += 1;
        }
        self.actual_hours_sum += record.record.actual_hours;
        self.productivity_pct_sum += record.metrics.productivity_pct;
    }

    pub(crate) fn finish(self, key: String) -> GroupSummary {
        GroupSummary {
            key,
            employee_count: self.employee_count,
            productive_count: self.productive_count,
            not_productive_count: self.employee_count - self.productive_count,
            average_actual_hours: mean(self.actual_hours_sum, self.employee_count),
            average_productivity_pct: mean(self.productivity_pct_sum, self.employee_count),
        }
    }
}

/// Arithmetic mean; 0 when there is nothing to average.
pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}
