//! Configuration for the smoke test
//!
//! All values are fixed defaults. The struct exists so that the location, the
//! API endpoint and the logging level live in one validated place, and so tests
//! can point the pipeline at another base URL.

use crate::{NwsError, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NwsCheckConfig {
    /// Coordinate to check
    pub location: LocationConfig,
    /// api.weather.gov settings
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// The fixed point the grid lookup is made for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Human readable label shown in the report
    #[serde(default = "default_location_label")]
    pub label: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

/// HTTP settings for api.weather.gov
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Identifying User-Agent, required by the NWS usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_location_label() -> String {
    "Nashville, TN 37203".to_string()
}

fn default_latitude() -> f64 {
    36.1627
}

fn default_longitude() -> f64 {
    -86.7816
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    "(Nashville Weather Test App, test@example.com)".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for NwsCheckConfig {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                label: default_location_label(),
                latitude: default_latitude(),
                longitude: default_longitude(),
            },
            api: ApiConfig {
                base_url: default_base_url(),
                user_agent: default_user_agent(),
                timeout_seconds: default_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

impl NwsCheckConfig {
    /// Same defaults, but talking to another API host
    #[must_use]
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        let mut config = Self::default();
        config.api.base_url = base_url.into();
        config
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_location()?;
        self.validate_api()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_location(&self) -> Result<()> {
        let LocationConfig {
            latitude,
            longitude,
            ..
        } = self.location;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(NwsError::config(format!(
                "Latitude {latitude} is outside -90..=90"
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(NwsError::config(format!(
                "Longitude {longitude} is outside -180..=180"
            )));
        }

        Ok(())
    }

    fn validate_api(&self) -> Result<()> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(NwsError::config(
                "API base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        // api.weather.gov rejects anonymous clients
        if self.api.user_agent.trim().is_empty() {
            return Err(NwsError::config("User-Agent cannot be empty"));
        }

        if self.api.timeout_seconds == 0 {
            return Err(NwsError::config("API timeout must be at least 1 second"));
        }

        if self.api.timeout_seconds > 300 {
            return Err(NwsError::config("API timeout cannot exceed 300 seconds"));
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(NwsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        Ok(())
    }
}
