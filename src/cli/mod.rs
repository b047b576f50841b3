//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calculation pipeline.

pub mod calculate;
pub mod export;
pub mod rates;

pub use calculate::{handle_calc_command, CalcArgs, CalculationArgs, RateArgs};
pub use export::{handle_export_command, ExportCommands};
pub use rates::{handle_rates_command, RatesArgs};
