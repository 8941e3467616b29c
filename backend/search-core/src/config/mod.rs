//! Application configuration: catalog endpoint settings and message
//! overrides, persisted as JSON.
//!
//! The API key deliberately lives outside the config file - it is read
//! from the environment (optionally via a `.env` file) and wrapped in
//! [`RedactedApiKey`] immediately, so it is never written to disk and
//! never logged.

use crate::BOOKS_API_BASE_URL;
use crate::error::config::ConfigError;
use crate::messages::Messages;

use common::{ErrorLocation, RedactedApiKey};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

/// Environment variable holding the catalog API key.
pub const API_KEY_ENV_VAR: &str = "BOOKFIND_API_KEY";

/// Upstream page-size ceiling for `maxResults`.
const MAX_RESULTS_LIMIT: u32 = 40;

/// Catalog endpoint settings for one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Single fixed-size result page; the API caps this at 40.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// ISO 639-1 language restriction code.
    #[serde(default = "default_lang_restrict")]
    pub lang_restrict: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_results: default_max_results(),
            lang_restrict: default_lang_restrict(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub messages: Messages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
            messages: Messages::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    String::from(BOOKS_API_BASE_URL)
}
fn default_max_results() -> u32 {
    10
}
fn default_lang_restrict() -> String {
    String::from("en")
}
fn default_connect_timeout_secs() -> u64 {
    15
}
fn default_read_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// A missing file is not an error - defaults are returned. A file
    /// that exists but cannot be read, parsed, or validated is.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Uses temp file + rename so a crash mid-write never leaves a
    /// corrupt config behind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if directory creation, serialization,
    /// write, or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base URL: {}", self.api.base_url),
            });
        }

        if self.api.max_results == 0 || self.api.max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid max results: {} (must be 1-{})",
                    self.api.max_results, MAX_RESULTS_LIMIT
                ),
            });
        }

        if self.api.connect_timeout_secs == 0 || self.api.read_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("Timeouts must be at least 1 second"),
            });
        }

        Ok(())
    }
}

/// Read the catalog API key from the environment.
///
/// A `.env` file in the working directory is honored when present; a key
/// already set in the real environment wins.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] when the variable is unset or
/// blank.
pub fn api_key_from_env() -> Result<RedactedApiKey, ConfigError> {
    // Optional; the variable may come from the real environment instead.
    dotenvy::dotenv().ok();

    let value = std::env::var(API_KEY_ENV_VAR).map_err(|_| ConfigError::MissingApiKey {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("{} is not set", API_KEY_ENV_VAR),
    })?;

    let key = RedactedApiKey::new(value);
    if key.is_empty() {
        return Err(ConfigError::MissingApiKey {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("{} is empty", API_KEY_ENV_VAR),
        });
    }

    Ok(key)
}
