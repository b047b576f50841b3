//! Exchange rate table
//!
//! Rates are expressed against whatever base currency the rate source uses
//! (not necessarily USD). Entries may be missing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use super::currency::Currency;
use crate::error::CostError;

/// Mapping from currency code to a rate relative to a common base
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateTable {
    rates: HashMap<String, f64>,
}

impl ExchangeRateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a rate by currency code
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Look up the rate of a supported currency
    pub fn rate_for(&self, currency: Currency) -> Option<f64> {
        self.get(currency.code())
    }

    /// Set the rate for a currency code
    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.rates.insert(code.into(), rate);
    }

    /// Overlay another table; its entries replace existing ones
    pub fn extend(&mut self, other: ExchangeRateTable) {
        self.rates.extend(other.rates);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl From<HashMap<String, f64>> for ExchangeRateTable {
    fn from(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ExchangeRateTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A single `CODE=VALUE` rate override given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct RateOverride {
    pub currency: Currency,
    pub rate: f64,
}

impl FromStr for RateOverride {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, value) = s.split_once('=').ok_or_else(|| {
            CostError::Validation(format!("Invalid rate '{}'. Expected CODE=VALUE", s))
        })?;
        let currency: Currency = code.parse()?;
        let rate = value.trim().parse::<f64>().map_err(|_| {
            CostError::Validation(format!("Invalid rate value '{}' for {}", value, currency))
        })?;
        Ok(Self { currency, rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table: ExchangeRateTable = vec![("USD", 1.1), ("EUR", 1.0)].into_iter().collect();
        assert_eq!(table.get("USD"), Some(1.1));
        assert_eq!(table.rate_for(Currency::Eur), Some(1.0));
        assert_eq!(table.rate_for(Currency::Jpy), None);
    }

    #[test]
    fn test_extend_overrides() {
        let mut table: ExchangeRateTable = vec![("USD", 1.1)].into_iter().collect();
        table.extend(vec![("USD", 1.0), ("GBP", 0.8)].into_iter().collect());
        assert_eq!(table.get("USD"), Some(1.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_deserialize_from_map() {
        let table: ExchangeRateTable = serde_json::from_str(r#"{"USD": 1.08, "JPY": 161.2}"#).unwrap();
        assert_eq!(table.get("JPY"), Some(161.2));
    }

    #[test]
    fn test_parse_override() {
        let o: RateOverride = "eur=0.9".parse().unwrap();
        assert_eq!(o.currency, Currency::Eur);
        assert_eq!(o.rate, 0.9);

        assert!("EUR".parse::<RateOverride>().is_err());
        assert!("CHF=1".parse::<RateOverride>().is_err());
        assert!("EUR=abc".parse::<RateOverride>().is_err());
    }
}
