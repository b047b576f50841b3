//! Calculation pipeline
//!
//! usage → base + custom USD costs → billing cycle → currency conversion →
//! report. Every call recomputes from scratch.

use serde::{Deserialize, Serialize};

use super::conversion::resolve_conversion;
use super::cost::{apply_cycle, CostEngine, UnitPricing};
use crate::error::{CostError, CostResult};
use crate::models::{
    BillingCycle, Currency, CustomService, ExchangeRateTable, UsageInputs, MAX_CUSTOM_SERVICES,
};
use crate::reports::CostReport;

/// Everything the user supplies for one calculation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub usage: UsageInputs,
    pub custom_services: Vec<CustomService>,
    pub cycle: BillingCycle,
    pub currency: Currency,
}

impl CalculationRequest {
    /// Check the limits enforced by the input layer
    pub fn validate(&self) -> CostResult<()> {
        if self.custom_services.len() > MAX_CUSTOM_SERVICES {
            return Err(CostError::Validation(format!(
                "At most {} custom services are allowed, got {}",
                MAX_CUSTOM_SERVICES,
                self.custom_services.len()
            )));
        }
        if self.usage.storage_gb.is_nan() || self.usage.storage_gb < 0.0 {
            return Err(CostError::Validation(
                "Storage must be a non-negative number".into(),
            ));
        }
        if self.usage.revenue.is_nan() || self.usage.revenue < 0.0 {
            return Err(CostError::Validation(
                "Revenue must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

/// Runs the full pipeline for a request
#[derive(Debug, Clone, Copy, Default)]
pub struct CostCalculator {
    engine: CostEngine,
}

impl CostCalculator {
    /// Create a calculator using the given unit prices
    pub fn new(pricing: UnitPricing) -> Self {
        Self {
            engine: CostEngine::new(pricing),
        }
    }

    /// The underlying cost engine
    pub fn engine(&self) -> &CostEngine {
        &self.engine
    }

    /// Compute the report for `request` using `rates`
    pub fn calculate(&self, request: &CalculationRequest, rates: &ExchangeRateTable) -> CostReport {
        let costs = self
            .engine
            .compute_costs(&request.usage, &request.custom_services);
        let scaled = apply_cycle(&costs, request.cycle);
        let conversion = resolve_conversion(rates, request.currency);

        tracing::debug!(
            categories = scaled.len(),
            cycle = %request.cycle,
            currency = %request.currency,
            rate = conversion.rate,
            "calculated costs"
        );

        CostReport::new(scaled, request.cycle, conversion)
    }
}
