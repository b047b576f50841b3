//! Core data models for the cost calculator
//!
//! This module contains the value types that flow through the calculation
//! pipeline: usage inputs, custom services, cost breakdowns, currencies and
//! exchange rate tables.

pub mod breakdown;
pub mod currency;
pub mod custom_service;
pub mod rates;
pub mod usage;

pub use breakdown::{CostBreakdown, CostLine};
pub use currency::{BillingCycle, Currency};
pub use custom_service::{CustomService, MAX_CUSTOM_SERVICES};
pub use rates::{ExchangeRateTable, RateOverride};
pub use usage::UsageInputs;
