//! Exchange rate acquisition
//!
//! Providers fetch rate tables; the cache memoizes the last fetch outcome
//! for a fixed time-to-live.

pub mod cache;
pub mod provider;

use crate::config::RateSourceSettings;
use crate::models::{ExchangeRateTable, RateOverride};

pub use cache::{CacheEntry, RateCache, RateLookup, RateService, RateSource};
pub use provider::{HttpRateProvider, RateProvider, StaticRateProvider};

/// Build the rate service for the given options
///
/// Offline mode and manual overrides never touch the network; overrides are
/// applied on top of an empty table.
pub fn build_rate_service(
    settings: &RateSourceSettings,
    offline: bool,
    overrides: &[RateOverride],
) -> RateService<Box<dyn RateProvider>> {
    let ttl = settings.cache_ttl();
    let provider: Box<dyn RateProvider> = if offline || !overrides.is_empty() {
        let table: ExchangeRateTable = overrides
            .iter()
            .map(|o| (o.currency.code(), o.rate))
            .collect();
        Box::new(StaticRateProvider::new(table))
    } else {
        Box::new(HttpRateProvider::from_settings(settings))
    };
    RateService::new(provider, ttl)
}
