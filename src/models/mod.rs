//! Core data models for the Productivity Analysis Engine.
//!
//! This module contains all the domain models used throughout the engine,
//! from the untyped [`RawTable`] the validator consumes to the
//! [`AnalysisOutcome`] the pipeline returns.

mod analysis_result;
mod employee;
mod metrics;
mod raw_table;

pub use analysis_result::{
    AnalysisOutcome, AnalysisResult, AnalysisWarning, AuditStep, AuditTrace, GlobalSummary,
    GroupSummary,
};
pub use employee::{EmployeeRecord, EmploymentType, UnknownEmploymentType};
pub use metrics::{AnalyzedRecord, DerivedMetrics, ProductivityStatus};
pub use raw_table::{RawRow, RawTable, RawValue};
