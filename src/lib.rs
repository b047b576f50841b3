//! SaaS Cost Calculator - terminal cost estimates for SaaS products
//!
//! Estimates the operating cost of a SaaS product from usage figures (users,
//! API calls, storage, emails, revenue) plus user-defined services, scales
//! it to a billing cycle, converts it into a display currency with live
//! exchange rates, and renders it as a table, charts, CSV or PDF.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Inputs, currencies, breakdowns and rate tables
//! - `services`: Cost engine, cycle scaling and currency conversion
//! - `rates`: Exchange rate providers and the time-bounded cache
//! - `reports`: Display table, chart series and monthly trend
//! - `display`: Amount formatting
//! - `export`: CSV and PDF exporters
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use saas_cost_cli::models::{BillingCycle, Currency, ExchangeRateTable, UsageInputs};
//! use saas_cost_cli::services::{CalculationRequest, CostCalculator};
//!
//! let request = CalculationRequest {
//!     usage: UsageInputs::default(),
//!     custom_services: Vec::new(),
//!     cycle: BillingCycle::Monthly,
//!     currency: Currency::Usd,
//! };
//! let report = CostCalculator::default().calculate(&request, &ExchangeRateTable::new());
//! println!("{}", report.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod rates;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{CostError, CostResult};
