//! CLI commands for report export
//!
//! Runs a calculation and writes its display table as CSV or PDF.

use std::path::PathBuf;

use clap::Subcommand;

use super::calculate::CalculationArgs;
use crate::config::Settings;
use crate::error::CostResult;
use crate::export::{export_report_to_file, ExportFormat};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the cost table to CSV
    Csv {
        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        calculation: CalculationArgs,
    },

    /// Export the cost table to a PDF report
    Pdf {
        /// Output file path
        output: PathBuf,

        #[command(flatten)]
        calculation: CalculationArgs,
    },
}

/// Handle export commands
pub fn handle_export_command(settings: &Settings, cmd: ExportCommands) -> CostResult<()> {
    let (format, output, calculation) = match cmd {
        ExportCommands::Csv {
            output,
            calculation,
        } => (ExportFormat::Csv, output, calculation),
        ExportCommands::Pdf {
            output,
            calculation,
        } => (ExportFormat::Pdf, output, calculation),
    };

    let report = calculation.run(settings)?;
    export_report_to_file(&report, format, &output)?;

    println!(
        "Exported {} line items to: {}",
        report.rows.len(),
        output.display()
    );
    if let Some(notice) = report.notice() {
        println!("Note: {}", notice);
    }

    Ok(())
}
