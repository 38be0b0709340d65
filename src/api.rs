//! HTTP access to api.weather.gov
//!
//! The pipeline talks to the network through [`HttpFetch`], so the same stage
//! logic runs against the real service ([`NwsClient`]) or an in-memory fake.
//! Non-200 responses are not errors here: the caller decides what a status
//! means for its stage.

use crate::config::ApiConfig;
use crate::{NwsError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Status code and body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success for the smoke test
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parse the body, attributing failures to `url`
    pub fn json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| NwsError::decode(url, e))
    }
}

/// Blocking GET. Transport failures are errors; every HTTP status is a response.
pub trait HttpFetch {
    fn get(&self, url: &str) -> Result<ApiResponse>;
}

/// api.weather.gov client
pub struct NwsClient {
    /// HTTP client
    client: Client,
    timeout: Duration,
}

impl NwsClient {
    /// Create a client that sends the configured User-Agent on every request
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| NwsError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }
}

impl HttpFetch for NwsClient {
    #[instrument(skip(self))]
    fn get(&self, url: &str) -> Result<ApiResponse> {
        let request_start = Instant::now();
        debug!("Making HTTP request");

        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                NwsError::network(
                    url,
                    format!("request timed out after {}s", self.timeout.as_secs()),
                )
            } else {
                NwsError::network(url, e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| NwsError::network(url, format!("failed to read body: {e}")))?;

        let duration = request_start.elapsed();
        debug!(
            "HTTP response received: {} ({} bytes) in {:.3}s",
            status,
            body.len(),
            duration.as_secs_f64()
        );

        if duration.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", duration.as_secs_f64());
        }

        Ok(ApiResponse { status, body })
    }
}
