//! User-defined cost line items

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CostError;

/// Upper bound on custom services accepted by the input layer
pub const MAX_CUSTOM_SERVICES: usize = 10;

/// A custom service priced as a fixed fee plus a per-user fee
///
/// Names are not validated: blank and duplicate names are allowed and a later
/// service with the same name replaces the earlier one in a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomService {
    pub name: String,
    pub fixed_cost: f64,
    pub per_user_cost: f64,
}

impl CustomService {
    /// Create a new custom service
    pub fn new(name: impl Into<String>, fixed_cost: f64, per_user_cost: f64) -> Self {
        Self {
            name: name.into(),
            fixed_cost,
            per_user_cost,
        }
    }

    /// Cost of this service for the given number of users
    pub fn cost_for(&self, users: u64) -> f64 {
        self.fixed_cost + self.per_user_cost * users as f64
    }
}

impl FromStr for CustomService {
    type Err = CostError;

    /// Parse `NAME:FIXED:PER_USER` (fees may be omitted and default to 0)
    ///
    /// The name is everything before the last two `:`-separated fields. A
    /// name containing `:` therefore needs both fees spelled out:
    /// `Tier:Pro:10:0` names `Tier:Pro`, while `Tier:Pro:10` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':').collect::<Vec<_>>();
        parts.reverse();

        let parse_fee = |raw: &str, what: &str| -> Result<f64, CostError> {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(0.0);
            }
            raw.parse::<f64>().map_err(|_| {
                CostError::Validation(format!(
                    "Invalid {} '{}' in custom service '{}'. Expected NAME:FIXED:PER_USER",
                    what, raw, s
                ))
            })
        };

        match parts.as_slice() {
            [name] => Ok(Self::new(name.trim(), 0.0, 0.0)),
            [name, fixed] => Ok(Self::new(name.trim(), parse_fee(fixed, "fixed cost")?, 0.0)),
            [name, fixed, per_user] => Ok(Self::new(
                name.trim(),
                parse_fee(fixed, "fixed cost")?,
                parse_fee(per_user, "per-user cost")?,
            )),
            _ => Err(CostError::Validation(format!(
                "Invalid custom service '{}'. Expected NAME:FIXED:PER_USER",
                s
            ))),
        }
    }
}
