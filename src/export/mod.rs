//! Export module for the cost calculator
//!
//! Serializes the display table of a cost report:
//! - CSV: `Service,Cost` rows with the formatted amounts
//! - PDF: paginated plain-text report

pub mod csv;
pub mod pdf;

use std::path::Path;

use crate::error::{CostError, CostResult};
use crate::reports::{CostReport, REPORT_TITLE};

pub use self::csv::{export_csv, write_csv};
pub use self::pdf::{export_pdf, layout_pages, write_pdf};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// Default file name used by the TUI
    pub fn default_file_name(&self) -> String {
        format!("cost_report.{}", self.extension())
    }
}

/// Serialize a report in the given format
pub fn export_report(report: &CostReport, format: ExportFormat) -> CostResult<Vec<u8>> {
    match format {
        ExportFormat::Csv => export_csv(&report.rows),
        ExportFormat::Pdf => export_pdf(REPORT_TITLE, &report.rows),
    }
}

/// Serialize a report and write it to `path`
pub fn export_report_to_file(
    report: &CostReport,
    format: ExportFormat,
    path: &Path,
) -> CostResult<()> {
    let bytes = export_report(report, format)?;
    std::fs::write(path, &bytes).map_err(|e| {
        CostError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;
    tracing::info!(
        path = %path.display(),
        format = format.extension(),
        bytes = bytes.len(),
        "exported report"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, CostBreakdown, Currency, ExchangeRateTable};
    use crate::services::conversion::resolve_conversion;
    use tempfile::TempDir;

    fn report() -> CostReport {
        let costs: CostBreakdown = vec![("User Costs", 50.0), ("API Costs", 1500.0)]
            .into_iter()
            .collect();
        let conversion = resolve_conversion(&ExchangeRateTable::new(), Currency::Usd);
        CostReport::new(costs, BillingCycle::Monthly, conversion)
    }

    #[test]
    fn test_export_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ExportFormat::Csv.default_file_name());

        export_report_to_file(&report(), ExportFormat::Csv, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Service,Cost\n"));
        assert!(contents.contains("\"$1,500.00\""));
    }

    #[test]
    fn test_export_pdf_report() {
        let bytes = export_report(&report(), ExportFormat::Pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.pdf");

        let err = export_report_to_file(&report(), ExportFormat::Pdf, &path).unwrap_err();
        assert!(matches!(err, CostError::Export(_)));
    }
}
