//! Time-bounded memoization of exchange rates
//!
//! The cache holds at most one entry `{value, fetched_at}` and checks its age
//! on every access. A failed fetch is stored with its warning too, so the
//! provider is asked at most once per time-to-live; `invalidate` forces a
//! retry.

use chrono::{DateTime, Duration, Utc};

use super::provider::RateProvider;
use crate::models::{Currency, ExchangeRateTable};

/// A cached value and when it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Whether the entry is still within `ttl` at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.fetched_at) < ttl
    }
}

/// Result of the last fetch: the table, or the warning it failed with
pub type FetchOutcome = Result<ExchangeRateTable, String>;

/// Single-entry rate cache with a fixed time-to-live
#[derive(Debug, Clone)]
pub struct RateCache {
    entry: Option<CacheEntry<FetchOutcome>>,
    ttl: Duration,
}

impl RateCache {
    /// Create an empty cache
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// The cached outcome if it is still fresh at `now`
    pub fn get(&self, now: DateTime<Utc>) -> Option<&CacheEntry<FetchOutcome>> {
        self.entry
            .as_ref()
            .filter(|entry| entry.is_fresh(now, self.ttl))
    }

    /// Store the outcome of a fetch
    pub fn store(&mut self, value: FetchOutcome, fetched_at: DateTime<Utc>) {
        self.entry = Some(CacheEntry { value, fetched_at });
    }

    /// Drop the cached entry
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Time-to-live of entries
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Where a rate lookup's table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// Served from a fresh cache entry
    Cached,
    /// Fetched from the provider just now
    Fetched,
    /// The fetch failed, now or within the time-to-live, and an empty table is used
    Unavailable,
}

/// Outcome of a rate lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RateLookup {
    pub table: ExchangeRateTable,
    pub source: RateSource,
    pub fetched_at: Option<DateTime<Utc>>,
    /// User-facing warning when the fetch failed
    pub warning: Option<String>,
}

/// A rate provider behind a time-bounded cache
///
/// Lookups never fail: a provider error yields an empty table plus a warning,
/// which downstream turns into the 1:1 conversion fallback.
pub struct RateService<P: RateProvider> {
    provider: P,
    cache: RateCache,
    currencies: Vec<Currency>,
}

impl<P: RateProvider> RateService<P> {
    /// Create a service requesting every supported currency
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self {
            provider,
            cache: RateCache::new(ttl),
            currencies: Currency::ALL.to_vec(),
        }
    }

    /// Current rates, fetching only when the cache is empty or stale
    pub fn rates(&mut self) -> RateLookup {
        self.rates_at(Utc::now())
    }

    /// Current rates as of `now`
    pub fn rates_at(&mut self, now: DateTime<Utc>) -> RateLookup {
        if let Some(entry) = self.cache.get(now) {
            tracing::debug!(fetched_at = %entry.fetched_at, "using cached exchange rate lookup");
            return match &entry.value {
                Ok(table) => RateLookup {
                    table: table.clone(),
                    source: RateSource::Cached,
                    fetched_at: Some(entry.fetched_at),
                    warning: None,
                },
                Err(warning) => unavailable(warning.clone()),
            };
        }

        match self.provider.fetch_rates(&self.currencies) {
            Ok(table) => {
                self.cache.store(Ok(table.clone()), now);
                RateLookup {
                    table,
                    source: RateSource::Fetched,
                    fetched_at: Some(now),
                    warning: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "exchange rate fetch failed; falling back to 1:1");
                let warning = err.to_string();
                self.cache.store(Err(warning.clone()), now);
                unavailable(warning)
            }
        }
    }

    /// Forget cached rates so the next lookup fetches
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Access the underlying cache
    pub fn cache(&self) -> &RateCache {
        &self.cache
    }
}

fn unavailable(warning: String) -> RateLookup {
    RateLookup {
        table: ExchangeRateTable::new(),
        source: RateSource::Unavailable,
        fetched_at: None,
        warning: Some(warning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CostError, CostResult};
    use std::cell::{Cell, RefCell};

    /// Provider that counts calls and replays scripted results
    struct ScriptedProvider {
        calls: Cell<usize>,
        results: RefCell<Vec<CostResult<ExchangeRateTable>>>,
    }

    impl ScriptedProvider {
        fn new(results: Vec<CostResult<ExchangeRateTable>>) -> Self {
            Self {
                calls: Cell::new(0),
                results: RefCell::new(results),
            }
        }
    }

    impl RateProvider for &ScriptedProvider {
        fn fetch_rates(&self, currencies: &[Currency]) -> CostResult<ExchangeRateTable> {
            assert_eq!(currencies.len(), 5);
            self.calls.set(self.calls.get() + 1);
            self.results.borrow_mut().remove(0)
        }
    }

    fn table(usd: f64) -> ExchangeRateTable {
        vec![("USD", usd), ("EUR", 1.0)].into_iter().collect()
    }

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_cache_entry_freshness() {
        let entry = CacheEntry {
            value: (),
            fetched_at: t0(),
        };
        let ttl = Duration::hours(1);
        assert!(entry.is_fresh(t0() + Duration::minutes(59), ttl));
        assert!(!entry.is_fresh(t0() + Duration::hours(1), ttl));
    }

    #[test]
    fn test_fetches_once_within_ttl() {
        let provider = ScriptedProvider::new(vec![Ok(table(1.1))]);
        let mut service = RateService::new(&provider, Duration::hours(1));

        let first = service.rates_at(t0());
        assert_eq!(first.source, RateSource::Fetched);

        let second = service.rates_at(t0() + Duration::minutes(30));
        assert_eq!(second.source, RateSource::Cached);
        assert_eq!(second.table, table(1.1));
        assert_eq!(second.fetched_at, Some(t0()));
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_refetches_after_expiry() {
        let provider = ScriptedProvider::new(vec![Ok(table(1.1)), Ok(table(1.2))]);
        let mut service = RateService::new(&provider, Duration::hours(1));

        service.rates_at(t0());
        let later = service.rates_at(t0() + Duration::hours(2));

        assert_eq!(later.source, RateSource::Fetched);
        assert_eq!(later.table.get("USD"), Some(1.2));
        assert_eq!(provider.calls.get(), 2);
    }

    #[test]
    fn test_failure_is_cached_within_ttl() {
        let provider = ScriptedProvider::new(vec![
            Err(CostError::rate_status(401)),
            Err(CostError::rate_status(401)),
        ]);
        let mut service = RateService::new(&provider, Duration::hours(1));

        let failed = service.rates_at(t0());
        assert_eq!(failed.source, RateSource::Unavailable);
        assert!(failed.table.is_empty());
        assert!(failed.warning.unwrap().contains("401"));

        let again = service.rates_at(t0() + Duration::seconds(1));
        assert_eq!(again.source, RateSource::Unavailable);
        assert!(again.table.is_empty());
        assert!(again.warning.unwrap().contains("401"));
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_failure_retried_after_expiry_or_invalidate() {
        let provider = ScriptedProvider::new(vec![
            Err(CostError::rate_status(500)),
            Ok(table(1.1)),
            Err(CostError::rate_status(503)),
            Ok(table(1.2)),
        ]);
        let mut service = RateService::new(&provider, Duration::hours(1));

        service.rates_at(t0());
        let expired = service.rates_at(t0() + Duration::hours(1));
        assert_eq!(expired.source, RateSource::Fetched);
        assert_eq!(provider.calls.get(), 2);

        let later = t0() + Duration::hours(3);
        assert_eq!(service.rates_at(later).source, RateSource::Unavailable);
        service.invalidate();
        let retried = service.rates_at(later);
        assert_eq!(retried.source, RateSource::Fetched);
        assert_eq!(retried.table.get("USD"), Some(1.2));
        assert_eq!(provider.calls.get(), 4);
    }

    #[test]
    fn test_invalidate_forces_fetch() {
        let provider = ScriptedProvider::new(vec![Ok(table(1.1)), Ok(table(1.3))]);
        let mut service = RateService::new(&provider, Duration::hours(1));

        service.rates_at(t0());
        service.invalidate();
        assert!(service.cache().get(t0()).is_none());

        let refreshed = service.rates_at(t0());
        assert_eq!(refreshed.table.get("USD"), Some(1.3));
    }
}
