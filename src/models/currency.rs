//! Display currencies and billing cycles
//!
//! The calculator supports a fixed, closed set of display currencies. All
//! internal amounts are USD until the conversion step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CostError;

/// A supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar, the base currency for all cost calculations
    #[default]
    Usd,
    /// Euro
    Eur,
    /// Indian Rupee
    Inr,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// All supported currencies, in display order
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Inr,
        Currency::Gbp,
        Currency::Jpy,
    ];

    /// ISO 4217 code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Inr => "INR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }

    /// Symbol prefixed to formatted amounts
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Inr => "₹",
            Self::Gbp => "£",
            Self::Jpy => "¥",
        }
    }

    /// The next currency in display order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous currency in display order, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Comma-separated list of every supported code ("USD,EUR,...")
    pub fn all_codes() -> String {
        Self::ALL
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CostError::unsupported_currency(code))
    }
}

/// Whether displayed costs cover one month or one year of usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Number of months covered by one cycle
    pub const fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 12,
        }
    }

    /// Switch between monthly and yearly
    pub fn toggle(&self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" | "y" => Ok(Self::Yearly),
            other => Err(CostError::Validation(format!(
                "Unknown billing cycle '{}'. Use 'monthly' or 'yearly'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Gbp.symbol(), "£");
        assert_eq!(Currency::Jpy.symbol(), "¥");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(" gbp ".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("CHF".parse::<Currency>().unwrap_err().is_validation());
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Currency::Jpy.next(), Currency::Usd);
        assert_eq!(Currency::Usd.prev(), Currency::Jpy);
        assert_eq!(Currency::Usd.next(), Currency::Eur);
    }

    #[test]
    fn test_all_codes() {
        assert_eq!(Currency::all_codes(), "USD,EUR,INR,GBP,JPY");
    }

    #[test]
    fn test_parse_cycle() {
        assert_eq!("Yearly".parse::<BillingCycle>().unwrap(), BillingCycle::Yearly);
        assert_eq!("monthly".parse::<BillingCycle>().unwrap(), BillingCycle::Monthly);
        assert!("weekly".parse::<BillingCycle>().is_err());
        assert_eq!(BillingCycle::Monthly.toggle(), BillingCycle::Yearly);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"INR\"");
        assert_eq!(
            serde_json::to_string(&BillingCycle::Yearly).unwrap(),
            "\"yearly\""
        );
    }
}
