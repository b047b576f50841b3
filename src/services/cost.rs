//! Cost engine and billing cycle scaling
//!
//! Turns usage inputs and custom services into a USD cost breakdown. No range
//! validation happens here: negative inputs produce negative costs.

use serde::{Deserialize, Serialize};

use crate::models::{BillingCycle, CostBreakdown, CustomService, UsageInputs};

pub const USER_COSTS: &str = "User Costs";
pub const API_COSTS: &str = "API Costs";
pub const STORAGE_COSTS: &str = "Storage Costs";
pub const EMAIL_COSTS: &str = "Email Costs";
pub const REVENUE_SHARE: &str = "Revenue Share";

/// The fixed categories, in breakdown order
pub const BASE_CATEGORIES: [&str; 5] = [
    USER_COSTS,
    API_COSTS,
    STORAGE_COSTS,
    EMAIL_COSTS,
    REVENUE_SHARE,
];

/// USD unit prices for the fixed categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPricing {
    /// Per active user
    #[serde(default = "default_per_user")]
    pub per_user: f64,
    /// Per API call
    #[serde(default = "default_per_api_call")]
    pub per_api_call: f64,
    /// Per GB stored
    #[serde(default = "default_per_storage_gb")]
    pub per_storage_gb: f64,
    /// Per email sent
    #[serde(default = "default_per_email")]
    pub per_email: f64,
    /// Fraction of revenue
    #[serde(default = "default_revenue_share")]
    pub revenue_share: f64,
}

fn default_per_user() -> f64 {
    0.05
}

fn default_per_api_call() -> f64 {
    0.0001
}

fn default_per_storage_gb() -> f64 {
    1.0
}

fn default_per_email() -> f64 {
    0.002
}

fn default_revenue_share() -> f64 {
    0.01
}

impl Default for UnitPricing {
    fn default() -> Self {
        Self {
            per_user: default_per_user(),
            per_api_call: default_per_api_call(),
            per_storage_gb: default_per_storage_gb(),
            per_email: default_per_email(),
            revenue_share: default_revenue_share(),
        }
    }
}

/// Computes USD cost breakdowns from usage
#[derive(Debug, Clone, Copy, Default)]
pub struct CostEngine {
    pricing: UnitPricing,
}

impl CostEngine {
    /// Create an engine with the given unit prices
    pub fn new(pricing: UnitPricing) -> Self {
        Self { pricing }
    }

    /// The unit prices in use
    pub fn pricing(&self) -> &UnitPricing {
        &self.pricing
    }

    /// Compute the five fixed categories; every key is always present
    pub fn compute_base_costs(&self, inputs: &UsageInputs) -> CostBreakdown {
        let p = &self.pricing;
        let mut breakdown = CostBreakdown::new();
        breakdown.insert(USER_COSTS, inputs.users as f64 * p.per_user);
        breakdown.insert(API_COSTS, inputs.api_calls as f64 * p.per_api_call);
        breakdown.insert(STORAGE_COSTS, inputs.storage_gb * p.per_storage_gb);
        breakdown.insert(EMAIL_COSTS, inputs.emails as f64 * p.per_email);
        breakdown.insert(REVENUE_SHARE, inputs.revenue * p.revenue_share);
        breakdown
    }

    /// Compute one entry per custom service as `fixed + per_user × users`
    pub fn compute_custom_costs(&self, services: &[CustomService], users: u64) -> CostBreakdown {
        services
            .iter()
            .map(|service| (service.name.clone(), service.cost_for(users)))
            .collect()
    }

    /// Base costs with custom services merged on top
    ///
    /// A custom service named like an earlier entry replaces that entry.
    pub fn compute_costs(&self, inputs: &UsageInputs, services: &[CustomService]) -> CostBreakdown {
        let mut costs = self.compute_base_costs(inputs);
        for line in self.compute_custom_costs(services, inputs.users) {
            if let Some(previous) = costs.insert(line.category.clone(), line.amount) {
                tracing::warn!(
                    category = %line.category,
                    previous,
                    replacement = line.amount,
                    "custom service replaced an existing cost category"
                );
            }
        }
        costs
    }
}

/// Scale every category to the billing cycle (×12 for yearly)
pub fn apply_cycle(breakdown: &CostBreakdown, cycle: BillingCycle) -> CostBreakdown {
    match cycle {
        BillingCycle::Monthly => breakdown.clone(),
        BillingCycle::Yearly => breakdown.map_amounts(|v| v * 12.0),
    }
}
