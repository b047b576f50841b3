//! User settings for the cost calculator
//!
//! Manages default display choices, the exchange rate source and the unit
//! prices used by the cost engine.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::paths::CostPaths;
use crate::error::CostError;
use crate::models::{BillingCycle, Currency};
use crate::services::cost::UnitPricing;

/// Default exchange rate endpoint
pub const DEFAULT_RATES_ENDPOINT: &str = "https://api.exchangeratesapi.io/v1/latest";

/// Exchange rate source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSourceSettings {
    /// Endpoint queried with `access_key` and `symbols` parameters
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API access key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// How long fetched rates stay valid
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// HTTP timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_RATES_ENDPOINT.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_timeout_secs() -> u64 {
    10
}

impl RateSourceSettings {
    /// Cache time-to-live, or `None` when `cache_ttl_secs` is out of range
    pub fn try_cache_ttl(&self) -> Option<Duration> {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
    }

    /// Cache time-to-live, saturating at the largest representable duration
    pub fn cache_ttl(&self) -> Duration {
        self.try_cache_ttl().unwrap_or(Duration::MAX)
    }
}

impl Default for RateSourceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: None,
            cache_ttl_secs: default_cache_ttl_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when none is given
    #[serde(default)]
    pub default_currency: Currency,

    /// Billing cycle used when none is given
    #[serde(default)]
    pub default_cycle: BillingCycle,

    /// Exchange rate source
    #[serde(default)]
    pub rates: RateSourceSettings,

    /// Unit prices for the base cost categories
    #[serde(default)]
    pub pricing: UnitPricing,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            default_cycle: BillingCycle::default(),
            rates: RateSourceSettings::default(),
            pricing: UnitPricing::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CostPaths) -> Result<Self, CostError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CostError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CostError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that cannot be used
    pub fn validate(&self) -> Result<(), CostError> {
        if self.rates.try_cache_ttl().is_none() {
            return Err(CostError::Config(format!(
                "rates.cache_ttl_secs {} is out of range (max {})",
                self.rates.cache_ttl_secs,
                Duration::MAX.num_seconds()
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CostPaths) -> Result<(), CostError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CostError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CostError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }
}
