//! Exchange rate providers
//!
//! A provider returns a table of rates for the requested currencies against
//! the source's own base currency.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::RateSourceSettings;
use crate::error::{CostError, CostResult};
use crate::models::{Currency, ExchangeRateTable};

/// Source of exchange rates
pub trait RateProvider {
    /// Fetch rates for `currencies`
    fn fetch_rates(&self, currencies: &[Currency]) -> CostResult<ExchangeRateTable>;
}

impl<P: RateProvider + ?Sized> RateProvider for Box<P> {
    fn fetch_rates(&self, currencies: &[Currency]) -> CostResult<ExchangeRateTable> {
        (**self).fetch_rates(currencies)
    }
}

/// Response body of the rate endpoint; only `rates` is used
#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Fetches rates over HTTP with a blocking client
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    endpoint: String,
    access_key: Option<String>,
    timeout: Duration,
}

impl HttpRateProvider {
    /// Create a provider for `endpoint`
    pub fn new(endpoint: impl Into<String>, access_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key,
            timeout,
        }
    }

    /// Create a provider from settings
    pub fn from_settings(settings: &RateSourceSettings) -> Self {
        Self::new(
            settings.endpoint.clone(),
            settings.access_key.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }
}

impl RateProvider for HttpRateProvider {
    fn fetch_rates(&self, currencies: &[Currency]) -> CostResult<ExchangeRateTable> {
        let symbols = currencies
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(",");

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let mut request = agent.get(&self.endpoint);
        if let Some(key) = &self.access_key {
            request = request.query("access_key", key);
        }
        request = request.query("symbols", &symbols);

        tracing::info!(endpoint = %self.endpoint, symbols = %symbols, "fetching exchange rates");

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => return Err(CostError::rate_status(status)),
            Err(err) => return Err(CostError::RateFetch(err.to_string())),
        };

        if response.status() != 200 {
            return Err(CostError::rate_status(response.status()));
        }

        let body: RatesResponse = response
            .into_json()
            .map_err(|e| CostError::RateFetch(format!("Invalid response body: {}", e)))?;

        tracing::debug!(count = body.rates.len(), "received exchange rates");
        Ok(ExchangeRateTable::from(body.rates))
    }
}

/// Provider returning a fixed table, used for offline runs and overrides
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    table: ExchangeRateTable,
}

impl StaticRateProvider {
    /// Create a provider that always returns `table`
    pub fn new(table: ExchangeRateTable) -> Self {
        Self { table }
    }
}

impl RateProvider for StaticRateProvider {
    fn fetch_rates(&self, _currencies: &[Currency]) -> CostResult<ExchangeRateTable> {
        Ok(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider() {
        let table: ExchangeRateTable = vec![("USD", 1.0)].into_iter().collect();
        let provider = StaticRateProvider::new(table.clone());
        assert_eq!(provider.fetch_rates(&Currency::ALL).unwrap(), table);
    }

    #[test]
    fn test_boxed_provider() {
        let provider: Box<dyn RateProvider> = Box::new(StaticRateProvider::default());
        assert!(provider.fetch_rates(&Currency::ALL).unwrap().is_empty());
    }

    #[test]
    fn test_response_without_rates_is_empty() {
        let body: RatesResponse =
            serde_json::from_str(r#"{"success": false, "error": {"code": 101}}"#).unwrap();
        assert!(body.rates.is_empty());
    }

    #[test]
    fn test_response_with_rates() {
        let body: RatesResponse = serde_json::from_str(
            r#"{"success": true, "base": "EUR", "rates": {"USD": 1.08, "EUR": 1}}"#,
        )
        .unwrap();
        let table = ExchangeRateTable::from(body.rates);
        assert_eq!(table.get("USD"), Some(1.08));
        assert_eq!(table.get("EUR"), Some(1.0));
    }

    #[test]
    fn test_unreachable_endpoint_is_rate_fetch_error() {
        let provider = HttpRateProvider::new(
            "http://127.0.0.1:9/latest",
            None,
            Duration::from_millis(500),
        );
        let err = provider.fetch_rates(&Currency::ALL).unwrap_err();
        assert!(err.is_rate_fetch());
    }
}
