//! Path management for the cost calculator
//!
//! ## Path Resolution Order
//!
//! 1. `SAAS_COST_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `saas-cost-cli`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CostError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SAAS_COST_DATA_DIR";

const APP_DIR_NAME: &str = "saas-cost-cli";

/// Manages all paths used by the calculator
#[derive(Debug, Clone)]
pub struct CostPaths {
    base_dir: PathBuf,
}

impl CostPaths {
    /// Create a new CostPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CostError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CostPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory the TUI writes exported reports into
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and exports directories exist
    pub fn ensure_directories(&self) -> Result<(), CostError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CostError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| CostError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, CostError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CostError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
