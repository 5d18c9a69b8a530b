//! Page layout for the PDF report.
//!
//! Layout is computed as plain data before anything is drawn, so
//! pagination can be inspected without parsing a PDF. Coordinates are in
//! millimetres from the bottom-left corner of an A4 page.

use crate::models::{AnalysisResult, AnalyzedRecord, EmploymentType};

use super::ExportOptions;

/// A4 width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Default number of table rows per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 40;
/// The most table rows that fit between the table header and the footer.
pub const MAX_ROWS_PER_PAGE: usize = 45;

const LEFT_MARGIN_MM: f32 = 12.0;
const TOP_MM: f32 = 280.0;
const FOOTER_MM: f32 = 8.0;
const ROW_HEIGHT_MM: f32 = 5.5;
const TABLE_HEADER_MM: f32 = 270.0;

const TITLE_SIZE: f32 = 18.0;
const SECTION_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 8.0;

const TABLE_HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "Department",
    "Type",
    "Hours",
    "Productivity %",
    "Status",
];
const COLUMN_X_MM: [f32; 7] = [12.0, 36.0, 78.0, 112.0, 135.0, 152.0, 176.0];
const NAME_MAX_CHARS: usize = 20;
const DEPARTMENT_MAX_CHARS: usize = 15;

/// One positioned run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Distance from the left edge.
    pub x_mm: f32,
    /// Baseline distance from the bottom edge.
    pub y_mm: f32,
    /// Font size in points.
    pub size: f32,
    /// Whether the bold face is used.
    pub bold: bool,
    /// The text.
    pub text: String,
}

impl TextLine {
    fn new(x_mm: f32, y_mm: f32, size: f32, bold: bool, text: impl Into<String>) -> Self {
        Self {
            x_mm,
            y_mm,
            size,
            bold,
            text: latin1_text(&text.into()),
        }
    }
}

/// Replaces characters the builtin fonts cannot draw with `?`.
///
/// The builtin faces cover Latin-1 only; anything past it, and control
/// characters, would otherwise be dropped without a trace.
fn latin1_text(text: &str) -> String {
    text.chars()
        .map(|c| if u32::from(c) > 0xFF || c.is_control() { '?' } else { c })
        .collect()
}

/// The content of one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    /// Text runs in drawing order.
    pub lines: Vec<TextLine>,
    /// Number of table body rows on the page.
    pub table_rows: usize,
}

impl PageLayout {
    /// Returns true if any line on the page has exactly this text.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.text == text)
    }
}

/// A titled table section of the report.
struct Section<'a> {
    title: &'static str,
    records: Vec<&'a AnalyzedRecord>,
}

/// Lays out the whole report.
///
/// The first page carries the title, timestamp and global summary. Each
/// section (All Employees, Full-Time, Part-Time) then starts on a new
/// page, with at most `rows_per_page` table rows per page and the table
/// header repeated on every page. Every page gets a "Page n of N" footer.
pub fn layout_report(result: &AnalysisResult, options: &ExportOptions) -> Vec<PageLayout> {
    let rows_per_page = options.rows_per_page.clamp(1, MAX_ROWS_PER_PAGE);
    let mut pages = vec![layout_cover(result, options)];

    let sections = [
        Section {
            title: "All Employees",
            records: result.records.iter().collect(),
        },
        Section {
            title: "Full-Time Employees",
            records: result.records_of_type(EmploymentType::FullTime).collect(),
        },
        Section {
            title: "Part-Time Employees",
            records: result.records_of_type(EmploymentType::PartTime).collect(),
        },
    ];

    for section in &sections {
        layout_section(section, rows_per_page, &mut pages);
    }

    let total = pages.len();
    for (index, page) in pages.iter_mut().enumerate() {
        page.lines.push(TextLine::new(
            PAGE_WIDTH_MM / 2.0 - 10.0,
            FOOTER_MM,
            TABLE_SIZE,
            false,
            format!("Page {} of {}", index + 1, total),
        ));
    }

    pages
}

fn layout_cover(result: &AnalysisResult, options: &ExportOptions) -> PageLayout {
    let global = &result.global;
    let mut page = PageLayout::default();

    page.lines.push(TextLine::new(
        LEFT_MARGIN_MM,
        TOP_MM,
        TITLE_SIZE,
        true,
        options.title.as_str(),
    ));

    let summary = [
        format!(
            "Report Generated: {}",
            options.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("Total Employees: {}", global.total_employees),
        format!("Productive: {}", global.total_productive),
        format!("Not Productive: {}", global.total_not_productive),
        format!(
            "Average Productivity: {:.2}%",
            global.overall_average_productivity
        ),
        format!(
            "Degenerate Expected Hours: {}",
            global.degenerate_count
        ),
    ];

    let mut y = TOP_MM - 14.0;
    for text in summary {
        page.lines
            .push(TextLine::new(LEFT_MARGIN_MM, y, BODY_SIZE, false, text));
        y -= 7.0;
    }

    page
}

fn layout_section(section: &Section<'_>, rows_per_page: usize, pages: &mut Vec<PageLayout>) {
    if section.records.is_empty() {
        let mut page = section_page(section.title, false);
        page.lines.push(TextLine::new(
            LEFT_MARGIN_MM,
            TABLE_HEADER_MM - ROW_HEIGHT_MM,
            BODY_SIZE,
            false,
            "No employees in this category.",
        ));
        pages.push(page);
        return;
    }

    for (chunk_index, chunk) in section.records.chunks(rows_per_page).enumerate() {
        let mut page = section_page(section.title, chunk_index > 0);
        for (row, record) in chunk.iter().enumerate() {
            let y = TABLE_HEADER_MM - ROW_HEIGHT_MM * (row as f32 + 1.0);
            for (cell, x) in table_cells(record).into_iter().zip(COLUMN_X_MM) {
                page.lines.push(TextLine::new(x, y, TABLE_SIZE, false, cell));
            }
        }
        page.table_rows = chunk.len();
        pages.push(page);
    }
}

fn section_page(title: &str, continued: bool) -> PageLayout {
    let mut page = PageLayout::default();
    let heading = if continued {
        format!("{} (continued)", title)
    } else {
        title.to_string()
    };
    page.lines.push(TextLine::new(
        LEFT_MARGIN_MM,
        TOP_MM,
        SECTION_SIZE,
        true,
        heading,
    ));
    for (header, x) in TABLE_HEADERS.iter().zip(COLUMN_X_MM) {
        page.lines
            .push(TextLine::new(x, TABLE_HEADER_MM, TABLE_SIZE, true, *header));
    }
    page
}

fn table_cells(analyzed: &AnalyzedRecord) -> [String; 7] {
    let record = &analyzed.record;
    let metrics = &analyzed.metrics;
    [
        record.employee_id.clone(),
        truncate(&record.name, NAME_MAX_CHARS),
        truncate(&record.department, DEPARTMENT_MAX_CHARS),
        record.employment_type.as_str().to_string(),
        format!("{:.1}", record.actual_hours),
        format!("{:.1}%", metrics.productivity_pct),
        metrics.status.as_str().to_string(),
    ]
}

/// Truncates to at most `max` characters without splitting a character.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::aggregate;
    use crate::calculation::compute;
    use crate::config::AnalysisConfig;
    use crate::models::EmployeeRecord;

    fn result_with(full_time: usize, part_time: usize) -> AnalysisResult {
        let config = AnalysisConfig::default();
        let types = std::iter::repeat(EmploymentType::FullTime)
            .take(full_time)
            .chain(std::iter::repeat(EmploymentType::PartTime).take(part_time));

        let records = types
            .enumerate()
            .map(|(i, employment_type)| {
                let record = EmployeeRecord {
                    employee_id: format!("EMP{:04}", i + 1),
                    name: format!("Employee {}", i + 1),
                    department: "Operations".to_string(),
                    employment_type,
                    actual_hours: 95.0,
                    leave_days: 0.0,
                };
                let metrics = compute(&record, &config);
                AnalyzedRecord { record, metrics }
            })
            .collect();

        aggregate(records)
    }

    fn options(rows_per_page: usize) -> ExportOptions {
        ExportOptions {
            rows_per_page,
            ..ExportOptions::default()
        }
    }

    #[test]
    fn test_cover_page_has_title_and_summary() {
        let pages = layout_report(&result_with(2, 1), &options(40));
        let cover = &pages[0];

        assert!(cover.contains("Employee Productivity Report"));
        assert!(cover.contains("Total Employees: 3"));
        assert!(cover.lines.iter().any(|l| l.text.starts_with("Report Generated: ")));
        assert_eq!(cover.table_rows, 0);
    }

    #[test]
    fn test_sections_paginate_by_row_limit() {
        // All: 7 rows -> 3 pages of 3; Full-Time: 5 -> 2 pages; Part-Time: 2 -> 1 page
        let pages = layout_report(&result_with(5, 2), &options(3));

        assert_eq!(pages.len(), 1 + 3 + 2 + 1);
        let rows: Vec<usize> = pages.iter().map(|p| p.table_rows).collect();
        assert_eq!(rows, vec![0, 3, 3, 1, 3, 2, 2]);
    }

    #[test]
    fn test_header_repeated_and_continuation_titled() {
        let pages = layout_report(&result_with(5, 0), &options(3));

        assert!(pages[1].contains("All Employees"));
        assert!(pages[2].contains("All Employees (continued)"));
        for page in &pages[1..] {
            assert!(page.contains("Productivity %"));
        }
    }

    #[test]
    fn test_empty_section_gets_placeholder_page() {
        let pages = layout_report(&result_with(2, 0), &options(40));
        let part_time = pages.last().unwrap();

        assert!(part_time.contains("Part-Time Employees"));
        assert!(part_time.contains("No employees in this category."));
        assert_eq!(part_time.table_rows, 0);
    }

    #[test]
    fn test_rows_per_page_is_clamped() {
        let pages = layout_report(&result_with(100, 0), &options(1000));
        assert!(pages.iter().all(|p| p.table_rows <= MAX_ROWS_PER_PAGE));

        let pages = layout_report(&result_with(2, 0), &options(0));
        assert_eq!(pages[1].table_rows, 1);
    }

    #[test]
    fn test_rows_stay_above_footer() {
        let pages = layout_report(&result_with(MAX_ROWS_PER_PAGE, 0), &options(MAX_ROWS_PER_PAGE));
        let lowest = pages[1]
            .lines
            .iter()
            .filter(|l| !l.text.starts_with("Page "))
            .map(|l| l.y_mm)
            .fold(f32::MAX, f32::min);
        assert!(lowest > FOOTER_MM + ROW_HEIGHT_MM / 2.0);
    }

    #[test]
    fn test_footer_numbers_every_page() {
        let pages = layout_report(&result_with(1, 1), &options(40));
        let total = pages.len();
        assert!(pages[0].contains(&format!("Page 1 of {}", total)));
        assert!(pages[total - 1].contains(&format!("Page {} of {}", total, total)));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Zoë Ångström-Øverland Jr.", 5), "Zoë Å");
        assert_eq!(truncate("Ops", 15), "Ops");
    }

    #[test]
    fn test_characters_outside_latin1_become_question_marks() {
        assert_eq!(latin1_text("Zoë Øverland"), "Zoë Øverland");
        assert_eq!(latin1_text("李小龍"), "???");
        assert_eq!(latin1_text("Ops\tTeam"), "Ops?Team");

        let mut result = result_with(1, 0);
        result.records[0].record.name = "李小龍".to_string();
        let pages = layout_report(&result, &options(40));
        assert!(pages[1].contains("???"));
        assert!(
            pages
                .iter()
                .flat_map(|p| &p.lines)
                .all(|l| !l.text.contains('李'))
        );
    }

    #[test]
    fn test_table_cells_format() {
        let result = result_with(1, 0);
        let cells = table_cells(&result.records[0]);
        assert_eq!(cells[0], "EMP0001");
        assert_eq!(cells[3], "Full-Time");
        assert_eq!(cells[4], "95.0");
        assert_eq!(cells[5], "47.5%");
        assert_eq!(cells[6], "Not Productive");
    }
}
