//! PDF export.
//!
//! Pages come from [`layout_report`]; this module only draws them.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::error::ExportError;
use crate::models::AnalysisResult;

use super::pdf_layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PageLayout, layout_report};
use super::{ExportFormat, ExportOptions, ReportExporter, ensure_consistent};

/// Writes the paginated A4 report.
///
/// Text is set in the builtin Helvetica faces, which cover Latin-1 only.
/// Other characters print as `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl ReportExporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn export(
        &self,
        result: &AnalysisResult,
        options: &ExportOptions,
    ) -> Result<Vec<u8>, ExportError> {
        ensure_consistent(result)?;
        let pages = layout_report(result, options);
        render(&options.title, &pages)
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn render(title: &str, pages: &[PageLayout]) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Page 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    let mut targets = vec![(first_page, first_layer)];
    for index in 1..pages.len() {
        targets.push(doc.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("Page {}", index + 1),
        ));
    }

    for (page, (page_index, layer_index)) in pages.iter().zip(targets) {
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for line in &page.lines {
            let font = if line.bold { &fonts.bold } else { &fonts.regular };
            layer.use_text(line.text.as_str(), line.size, Mm(line.x_mm), Mm(line.y_mm), font);
        }
    }

    save(doc)
}

fn save(doc: PdfDocumentReference) -> Result<Vec<u8>, ExportError> {
    doc.save_to_bytes().map_err(pdf_error)
}

fn pdf_error(error: printpdf::Error) -> ExportError {
    ExportError::Pdf {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::aggregate;
    use crate::calculation::compute;
    use crate::config::AnalysisConfig;
    use crate::models::{AnalyzedRecord, EmployeeRecord, EmploymentType};

    fn sample_result(count: usize) -> AnalysisResult {
        let config = AnalysisConfig::default();
        let records = (0..count)
            .map(|i| {
                let record = EmployeeRecord {
                    employee_id: format!("EMP{:04}", i + 1),
                    name: format!("Søren Employee {}", i + 1),
                    department: if i % 2 == 0 { "Engineering" } else { "Sales" }.to_string(),
                    employment_type: if i % 3 == 0 {
                        EmploymentType::PartTime
                    } else {
                        EmploymentType::FullTime
                    },
                    actual_hours: 150.0 + i as f64,
                    leave_days: (i % 4) as f64,
                };
                let metrics = compute(&record, &config);
                AnalyzedRecord { record, metrics }
            })
            .collect();
        aggregate(records)
    }

    #[test]
    fn test_export_produces_pdf_signature() {
        let bytes = PdfExporter
            .export(&sample_result(5), &ExportOptions::default())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_multi_page_report_renders() {
        let options = ExportOptions {
            rows_per_page: 10,
            ..ExportOptions::default()
        };
        let result = sample_result(95);
        assert!(layout_report(&result, &options).len() > 10);

        let bytes = PdfExporter.export(&result, &options).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_result_renders() {
        let bytes = PdfExporter
            .export(&aggregate(vec![]), &ExportOptions::default())
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_inconsistent_result_is_rejected() {
        let mut result = sample_result(3);
        result.employment_type_summaries[0].employee_count += 1;

        let error = PdfExporter
            .export(&result, &ExportOptions::default())
            .unwrap_err();
        assert!(matches!(error, ExportError::InconsistentResult { .. }));
    }

    #[test]
    fn test_format_is_pdf() {
        assert_eq!(PdfExporter.format(), ExportFormat::Pdf);
    }
}
