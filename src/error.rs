//! Error types and handling for `nws_check`

use thiserror::Error;

/// Main error type for the smoke test
#[derive(Error, Debug)]
pub enum NwsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failures, including timeouts
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// Response body was not the JSON document we expected
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the console report failed
    #[error("Report output error: {source}")]
    Report {
        #[from]
        source: std::io::Error,
    },
}

impl NwsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error for the given URL
    pub fn network<U: Into<String>, M: std::fmt::Display>(url: U, message: M) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a new decode error for the given URL
    pub fn decode<U: Into<String>>(url: U, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            NwsError::Config { message } => format!("Configuration error: {message}"),
            NwsError::Network { .. } => {
                "Unable to reach api.weather.gov. Please check your internet connection."
                    .to_string()
            }
            NwsError::Decode { url, .. } => {
                format!("Unexpected data received from {url}")
            }
            NwsError::Report { .. } => "Unable to write the report to the console.".to_string(),
        }
    }
}
