//! CSV Export functionality
//!
//! Writes the display table as `Service,Cost` rows. The cost column is the
//! formatted, symbol-prefixed string, so amounts with thousands separators
//! are quoted.

use std::io::Write;

use crate::error::{CostError, CostResult};
use crate::reports::DisplayRow;

/// Write the display table to `writer` as CSV
pub fn write_csv<W: Write>(rows: &[DisplayRow], writer: W) -> CostResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(["Service", "Cost"])?;
    for row in rows {
        csv_writer.write_record([row.service.as_str(), row.cost.as_str()])?;
    }

    csv_writer
        .flush()
        .map_err(|e| CostError::Export(format!("Failed to flush CSV output: {}", e)))?;
    Ok(())
}

/// Serialize the display table to UTF-8 CSV bytes
pub fn export_csv(rows: &[DisplayRow]) -> CostResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(service: &str, cost: &str) -> DisplayRow {
        DisplayRow {
            service: service.to_string(),
            cost: cost.to_string(),
        }
    }

    #[test]
    fn test_export_csv() {
        let rows = vec![row("User Costs", "$50.00"), row("API Costs", "$100.00")];
        let csv_string = String::from_utf8(export_csv(&rows).unwrap()).unwrap();

        assert_eq!(csv_string, "Service,Cost\nUser Costs,$50.00\nAPI Costs,$100.00\n");
    }

    #[test]
    fn test_thousands_separator_is_quoted() {
        let rows = vec![row("Revenue Share", "€1,234.50")];
        let csv_string = String::from_utf8(export_csv(&rows).unwrap()).unwrap();

        assert!(csv_string.contains("Revenue Share,\"€1,234.50\""));

        let mut reader = csv::Reader::from_reader(csv_string.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "€1,234.50");
    }

    #[test]
    fn test_empty_table_has_header() {
        let csv_string = String::from_utf8(export_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv_string, "Service,Cost\n");
    }

    #[test]
    fn test_blank_service_name() {
        let rows = vec![row("", "$1.00")];
        let csv_string = String::from_utf8(export_csv(&rows).unwrap()).unwrap();
        assert_eq!(csv_string.lines().nth(1), Some(",$1.00"));
    }
}
