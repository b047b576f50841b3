//! Usage metrics snapshot
//!
//! One immutable set of usage figures per calculation. Range checks happen
//! where the values are collected (CLI flags, TUI fields), not here.

use serde::{Deserialize, Serialize};

/// Raw usage metrics that drive the base cost categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageInputs {
    /// Active users
    pub users: u64,
    /// API calls
    pub api_calls: u64,
    /// Storage in GB
    pub storage_gb: f64,
    /// Revenue in USD
    pub revenue: f64,
    /// Emails sent
    pub emails: u64,
}

impl UsageInputs {
    pub const DEFAULT_USERS: u64 = 1000;
    pub const DEFAULT_API_CALLS: u64 = 1_000_000;
    pub const DEFAULT_STORAGE_GB: f64 = 10.0;
    pub const DEFAULT_EMAILS: u64 = 5000;
    pub const DEFAULT_REVENUE: f64 = 10_000.0;

    /// All-zero usage
    pub const fn zero() -> Self {
        Self {
            users: 0,
            api_calls: 0,
            storage_gb: 0.0,
            revenue: 0.0,
            emails: 0,
        }
    }
}

impl Default for UsageInputs {
    fn default() -> Self {
        Self {
            users: Self::DEFAULT_USERS,
            api_calls: Self::DEFAULT_API_CALLS,
            storage_gb: Self::DEFAULT_STORAGE_GB,
            revenue: Self::DEFAULT_REVENUE,
            emails: Self::DEFAULT_EMAILS,
        }
    }
}
