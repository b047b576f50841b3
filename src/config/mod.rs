//! Configuration module for the cost calculator
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (rate source, unit prices, defaults)

pub mod paths;
pub mod settings;

pub use paths::CostPaths;
pub use settings::{RateSourceSettings, Settings};
