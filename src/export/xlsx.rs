//! Spreadsheet export.
//!
//! Numbers are written at full precision with a two-decimal display
//! format, so a reader sees rounded values while the cells keep the exact
//! results.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::ExportError;
use crate::models::{AnalysisResult, AnalyzedRecord, GroupSummary};

use super::columns::{DEPARTMENT_STATS_HEADERS, RECORD_HEADERS, SheetName};
use super::{ExportFormat, ExportOptions, ReportExporter, ensure_consistent};

/// Writes the multi-sheet workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl ReportExporter for XlsxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn export(
        &self,
        result: &AnalysisResult,
        options: &ExportOptions,
    ) -> Result<Vec<u8>, ExportError> {
        ensure_consistent(result)?;
        build_workbook(result, options).map_err(|e| ExportError::Spreadsheet {
            message: e.to_string(),
        })
    }
}

struct Formats {
    header: Format,
    decimal: Format,
}

fn build_workbook(result: &AnalysisResult, options: &ExportOptions) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let formats = Formats {
        header: Format::new().set_bold(),
        decimal: Format::new().set_num_format("0.00"),
    };

    for sheet_name in SheetName::ALL {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name.as_str())?;

        match sheet_name {
            SheetName::Summary => write_summary(sheet, result, options, &formats)?,
            SheetName::AllEmployees => write_records(sheet, result.records.iter(), &formats)?,
            SheetName::EmploymentType(employment_type) => {
                write_records(sheet, result.records_of_type(employment_type), &formats)?
            }
            SheetName::DepartmentStats => write_department_stats(sheet, result, &formats)?,
            SheetName::Status(status) => write_records(
                sheet,
                result.records.iter().filter(|r| r.metrics.status == status),
                &formats,
            )?,
        }
    }

    workbook.save_to_buffer()
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], formats: &Formats) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &formats.header)?;
        sheet.set_column_width(col as u16, header.len().max(12) as f64 + 2.0)?;
    }
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    options: &ExportOptions,
    formats: &Formats,
) -> Result<(), XlsxError> {
    let global = &result.global;

    sheet.write_string_with_format(0, 0, "Metric", &formats.header)?;
    sheet.write_string_with_format(0, 1, "Value", &formats.header)?;
    sheet.set_column_width(0, 32)?;
    sheet.set_column_width(1, 28)?;

    sheet.write_string(1, 0, "Report")?;
    sheet.write_string(1, 1, options.title.as_str())?;
    sheet.write_string(2, 0, "Report Generated")?;
    sheet.write_string(
        2,
        1,
        options.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )?;

    let counts = [
        ("Total Employees", global.total_employees),
        ("Productive", global.total_productive),
        ("Not Productive", global.total_not_productive),
        ("Degenerate Expected Hours", global.degenerate_count),
    ];
    let mut row: u32 = 3;
    for (label, value) in counts {
        sheet.write_string(row, 0, label)?;
        sheet.write_number(row, 1, value as f64)?;
        row += 1;
    }
    sheet.write_string(row, 0, "Average Productivity (%)")?;
    sheet.write_number_with_format(row, 1, global.overall_average_productivity, &formats.decimal)?;
    row += 2;

    let type_headers = [
        "Employment_Type",
        "Employee_Count",
        "Productive_Count",
        "Not_Productive_Count",
        "Average_Actual_Hours",
        "Average_Productivity_Percentage",
    ];
    for (col, header) in type_headers.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *header, &formats.header)?;
    }
    for summary in &result.employment_type_summaries {
        row += 1;
        write_group_row(sheet, row, summary, formats)?;
    }

    Ok(())
}

fn write_records<'a>(
    sheet: &mut Worksheet,
    records: impl Iterator<Item = &'a AnalyzedRecord>,
    formats: &Formats,
) -> Result<(), XlsxError> {
    write_header(sheet, &RECORD_HEADERS, formats)?;
    sheet.set_freeze_panes(1, 0)?;

    for (index, analyzed) in records.enumerate() {
        let row = index as u32 + 1;
        let record = &analyzed.record;
        let metrics = &analyzed.metrics;

        sheet.write_string(row, 0, record.employee_id.as_str())?;
        sheet.write_string(row, 1, record.name.as_str())?;
        sheet.write_string(row, 2, record.department.as_str())?;
        sheet.write_string(row, 3, record.employment_type.as_str())?;
        sheet.write_number_with_format(row, 4, record.actual_hours, &formats.decimal)?;
        sheet.write_number(row, 5, record.leave_days)?;
        sheet.write_number(row, 6, metrics.standard_hours)?;
        sheet.write_number(row, 7, metrics.leave_hours)?;
        sheet.write_number(row, 8, metrics.expected_hours)?;
        sheet.write_number_with_format(row, 9, metrics.productivity_pct, &formats.decimal)?;
        sheet.write_string(row, 10, metrics.status.as_str())?;
        sheet.write_boolean(row, 11, metrics.degenerate_expected_hours)?;
    }

    Ok(())
}

fn write_department_stats(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    formats: &Formats,
) -> Result<(), XlsxError> {
    write_header(sheet, &DEPARTMENT_STATS_HEADERS, formats)?;

    for (index, summary) in result.department_summaries.iter().enumerate() {
        write_group_row(sheet, index as u32 + 1, summary, formats)?;
    }

    Ok(())
}

fn write_group_row(
    sheet: &mut Worksheet,
    row: u32,
    summary: &GroupSummary,
    formats: &Formats,
) -> Result<(), XlsxError> {
    sheet.write_string(row, 0, summary.key.as_str())?;
    sheet.write_number(row, 1, summary.employee_count as f64)?;
    sheet.write_number(row, 2, summary.productive_count as f64)?;
    sheet.write_number(row, 3, summary.not_productive_count as f64)?;
    sheet.write_number_with_format(row, 4, summary.average_actual_hours, &formats.decimal)?;
    sheet.write_number_with_format(row, 5, summary.average_productivity_pct, &formats.decimal)?;
    Ok(())
}
