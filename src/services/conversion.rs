//! Currency conversion
//!
//! Derives a USD → target factor from a rate table whose base may be any
//! currency, and rescales breakdowns by it.

use serde::Serialize;

use crate::models::{CostBreakdown, Currency, ExchangeRateTable};

/// The factor turning USD amounts into `target` amounts
///
/// Returns `target / usd` when both rates are present and non-zero, and `1.0`
/// otherwise.
pub fn conversion_rate(rates: &ExchangeRateTable, target: Currency) -> f64 {
    resolve_conversion(rates, target).rate
}

/// Multiply every amount by `rate`
pub fn convert(breakdown: &CostBreakdown, rate: f64) -> CostBreakdown {
    breakdown.map_amounts(|v| v * rate)
}

/// Result of resolving a conversion factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    /// Target display currency
    pub currency: Currency,
    /// Factor applied to USD amounts
    pub rate: f64,
    /// True when a non-USD target fell back to 1:1 because rates were missing
    ///
    /// Amounts are then still USD values even though they carry the target
    /// currency's symbol.
    pub fallback: bool,
}

impl Conversion {
    /// Symbol used to label converted amounts
    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}

/// Resolve the conversion factor for `target`, recording whether the 1:1
/// fallback was used
pub fn resolve_conversion(rates: &ExchangeRateTable, target: Currency) -> Conversion {
    let base = rates.rate_for(Currency::Usd).filter(|r| *r != 0.0);
    let wanted = rates.rate_for(target).filter(|r| *r != 0.0);

    match (base, wanted) {
        (Some(base), Some(wanted)) => Conversion {
            currency: target,
            rate: wanted / base,
            fallback: false,
        },
        _ => {
            let fallback = target != Currency::Usd;
            if fallback {
                tracing::warn!(
                    currency = %target,
                    "exchange rate unavailable; showing USD amounts unconverted"
                );
            }
            Conversion {
                currency: target,
                rate: 1.0,
                fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> ExchangeRateTable {
        entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_empty_table_is_one() {
        assert_eq!(conversion_rate(&ExchangeRateTable::new(), Currency::Eur), 1.0);
        assert_eq!(conversion_rate(&ExchangeRateTable::new(), Currency::Usd), 1.0);
    }

    #[test]
    fn test_target_over_base() {
        let rates = table(&[("USD", 1.0), ("EUR", 0.85)]);
        assert!((conversion_rate(&rates, Currency::Eur) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_non_usd_base() {
        // EUR-based table: 1 EUR = 1.25 USD = 0.8 GBP
        let rates = table(&[("EUR", 1.0), ("USD", 1.25), ("GBP", 0.8)]);
        assert!((conversion_rate(&rates, Currency::Gbp) - 0.64).abs() < 1e-12);
        assert!((conversion_rate(&rates, Currency::Usd) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_or_zero_entries_fall_back() {
        assert_eq!(conversion_rate(&table(&[("USD", 1.0)]), Currency::Jpy), 1.0);
        assert_eq!(conversion_rate(&table(&[("JPY", 150.0)]), Currency::Jpy), 1.0);
        assert_eq!(
            conversion_rate(&table(&[("USD", 0.0), ("JPY", 150.0)]), Currency::Jpy),
            1.0
        );
        assert_eq!(
            conversion_rate(&table(&[("USD", 1.0), ("JPY", 0.0)]), Currency::Jpy),
            1.0
        );
    }

    #[test]
    fn test_fallback_flag() {
        let empty = ExchangeRateTable::new();
        assert!(resolve_conversion(&empty, Currency::Eur).fallback);
        assert!(!resolve_conversion(&empty, Currency::Usd).fallback);

        let rates = table(&[("USD", 1.0), ("EUR", 0.9)]);
        let conversion = resolve_conversion(&rates, Currency::Eur);
        assert!(!conversion.fallback);
        assert_eq!(conversion.symbol(), "€");
    }

    #[test]
    fn test_convert() {
        let breakdown: CostBreakdown = vec![("A", 100.0), ("B", 10.0)].into_iter().collect();
        let converted = convert(&breakdown, 0.5);
        assert_eq!(converted.get("A"), Some(50.0));
        assert_eq!(converted.get("B"), Some(5.0));
        assert_eq!(convert(&breakdown, 1.0), breakdown);
    }
}
