//! Sheet names and column headers of the exported reports.
//!
//! Downstream tooling reads these reports by name, so the order and
//! spelling here are fixed.

use crate::models::{EmploymentType, ProductivityStatus};

/// Columns of every per-record sheet, in order.
pub const RECORD_HEADERS: [&str; 12] = [
    "Employee_ID",
    "Name",
    "Department",
    "Employment_Type",
    "Actual_Hours",
    "Leave_Days",
    "Standard_Hours",
    "Leave_Hours_Deduction",
    "Expected_Hours",
    "Productivity_Percentage",
    "Productivity_Status",
    "Degenerate_Expected_Hours",
];

/// Columns of the "Department Stats" sheet, in order.
pub const DEPARTMENT_STATS_HEADERS: [&str; 6] = [
    "Department",
    "Employee_Count",
    "Productive_Count",
    "Not_Productive_Count",
    "Average_Actual_Hours",
    "Average_Productivity_Percentage",
];

/// The sheets of the exported workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetName {
    /// Global summary as label/value pairs.
    Summary,
    /// Every analyzed record.
    AllEmployees,
    /// Records of one employment type.
    EmploymentType(EmploymentType),
    /// One row per department.
    DepartmentStats,
    /// Records with one productivity status.
    Status(ProductivityStatus),
}

impl SheetName {
    /// Every sheet, in workbook order.
    pub const ALL: [SheetName; 7] = [
        SheetName::Summary,
        SheetName::AllEmployees,
        SheetName::EmploymentType(EmploymentType::FullTime),
        SheetName::EmploymentType(EmploymentType::PartTime),
        SheetName::DepartmentStats,
        SheetName::Status(ProductivityStatus::Productive),
        SheetName::Status(ProductivityStatus::NotProductive),
    ];

    /// The worksheet tab name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetName::Summary => "Summary",
            SheetName::AllEmployees => "All Employees",
            SheetName::EmploymentType(t) => t.as_str(),
            SheetName::DepartmentStats => "Department Stats",
            SheetName::Status(s) => s.as_str(),
        }
    }
}
