//! Custom error types for the SaaS cost calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cost calculator operations
#[derive(Error, Debug)]
pub enum CostError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Exchange rate fetch errors
    #[error("Failed to fetch exchange rates: {0}")]
    RateFetch(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CostError {
    /// Create a validation error for an unsupported currency code
    pub fn unsupported_currency(code: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Unsupported currency '{}'. Use one of: USD, EUR, INR, GBP, JPY",
            code.as_ref()
        ))
    }

    /// Create a rate fetch error for a non-success HTTP status
    pub fn rate_status(status: u16) -> Self {
        Self::RateFetch(format!("HTTP status {}", status))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a rate fetch error
    pub fn is_rate_fetch(&self) -> bool {
        matches!(self, Self::RateFetch(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CostError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CostError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for cost calculator operations
pub type CostResult<T> = Result<T, CostError>;
