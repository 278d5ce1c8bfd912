//! Path management for the income ledger
//!
//! ## Path Resolution Order
//!
//! 1. `INCOME_LEDGER_HOME` environment variable (if set)
//! 2. The platform config directory joined with `income-ledger`
//!    (`~/.config/income-ledger` on Linux, `%APPDATA%\income-ledger` on Windows)
//!
//! The backing record file is resolved separately: an explicit override wins,
//! otherwise `Settings::data_file` is used as given (relative paths resolve
//! against the working directory).

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::settings::Settings;
use crate::error::LedgerError;

/// Environment variable overriding the config directory
pub const HOME_ENV_VAR: &str = "INCOME_LEDGER_HOME";

const APP_DIR_NAME: &str = "income-ledger";

/// Manages the paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding `config.json`
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => BaseDirs::new()
                .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine the home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Pick the backing record file: `override_path` if given, else the configured one
    pub fn data_file(&self, settings: &Settings, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| settings.data_file.clone())
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }
}
