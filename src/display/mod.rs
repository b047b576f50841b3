//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, shares and bars for terminal
//! display.

pub mod report;

pub use report::{format_amount, format_bar, format_currency, format_percentage};
