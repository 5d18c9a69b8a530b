//! Report export for analysis results.
//!
//! Two exporters read the same [`AnalysisResult`]:
//!
//! - [`XlsxExporter`] writes a multi-sheet workbook.
//! - [`PdfExporter`] writes a paginated A4 document.
//!
//! Both re-check the result with [`check_consistency`] first and fail with
//! [`ExportError::InconsistentResult`] instead of rendering a wrong report.
//! Neither mutates the result, so a failed export can be retried with
//! another format.

mod columns;
mod pdf;
mod pdf_layout;
mod xlsx;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::aggregation::check_consistency;
use crate::error::ExportError;
use crate::models::{AnalysisOutcome, AnalysisResult};

pub use columns::{DEPARTMENT_STATS_HEADERS, RECORD_HEADERS, SheetName};
pub use pdf::PdfExporter;
pub use pdf_layout::{
    DEFAULT_ROWS_PER_PAGE, MAX_ROWS_PER_PAGE, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PageLayout, TextLine,
    layout_report,
};
pub use xlsx::XlsxExporter;

/// The default report title.
pub const DEFAULT_REPORT_TITLE: &str = "Employee Productivity Report";

/// A supported export target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Office Open XML workbook.
    Xlsx,
    /// PDF document.
    Pdf,
}

impl ExportFormat {
    /// Returns the MIME type of artifacts in this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Returns the file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parses a target name: `xlsx`, `excel` or `pdf`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedTarget {
                target: s.to_string(),
            }),
        }
    }
}

/// Presentation settings shared by the exporters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Report title.
    pub title: String,
    /// Timestamp printed in the report header.
    pub generated_at: DateTime<Utc>,
    /// Table rows per PDF page, clamped to `1..=MAX_ROWS_PER_PAGE`.
    pub rows_per_page: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            generated_at: Utc::now(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl ExportOptions {
    /// Options stamped with the time the analysis ran.
    pub fn for_outcome(outcome: &AnalysisOutcome) -> Self {
        Self {
            generated_at: outcome.generated_at,
            ..Self::default()
        }
    }

    /// Suggested download file name, e.g. `productivity_report_20260115_093000.pdf`.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!(
            "productivity_report_{}.{}",
            self.generated_at.format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }
}

/// Serializes an analysis result into one artifact format.
pub trait ReportExporter {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Renders the result. Implementations must not assume the result is consistent.
    fn export(&self, result: &AnalysisResult, options: &ExportOptions)
    -> Result<Vec<u8>, ExportError>;
}

/// Exports a result in the requested format.
///
/// # Example
///
/// ```
/// use productivity_engine::aggregation::aggregate;
/// use productivity_engine::export::{export, ExportFormat, ExportOptions};
///
/// let result = aggregate(vec![]);
/// let target: ExportFormat = "pdf".parse().unwrap();
/// let bytes = export(&result, target, &ExportOptions::default()).unwrap();
/// assert!(bytes.starts_with(b"%PDF"));
/// ```
pub fn export(
    result: &AnalysisResult,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let bytes = match format {
        ExportFormat::Xlsx => XlsxExporter.export(result, options)?,
        ExportFormat::Pdf => PdfExporter.export(result, options)?,
    };

    info!(
        format = %format,
        records = result.records.len(),
        bytes = bytes.len(),
        "Report exported"
    );
    Ok(bytes)
}

/// Exports a result to a target given by name.
///
/// Unknown names fail with [`ExportError::UnsupportedTarget`].
pub fn export_named(
    result: &AnalysisResult,
    target: &str,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    export(result, target.parse()?, options)
}

/// Fails with [`ExportError::InconsistentResult`] if the summaries diverge from the records.
pub(crate) fn ensure_consistent(result: &AnalysisResult) -> Result<(), ExportError> {
    check_consistency(result).map_err(|message| ExportError::InconsistentResult { message })
}
