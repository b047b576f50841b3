//! Service layer for the cost calculator
//!
//! The service layer holds the calculation pipeline: cost engine, billing
//! cycle scaling, currency conversion, and the calculator that wires them
//! together.

pub mod calculator;
pub mod conversion;
pub mod cost;

pub use calculator::{CalculationRequest, CostCalculator};
pub use conversion::{conversion_rate, convert, resolve_conversion, Conversion};
pub use cost::{apply_cycle, CostEngine, UnitPricing};
