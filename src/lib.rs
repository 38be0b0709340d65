//! `nws_check` - smoke test for the National Weather Service API
//!
//! Resolves the api.weather.gov grid point for a fixed coordinate, prints the
//! first forecast periods and the latest observation from the nearest station.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod report;

// Re-export core types for public API
pub use api::{ApiResponse, HttpFetch, NwsClient};
pub use config::NwsCheckConfig;
pub use error::NwsError;
pub use models::{Coordinate, ForecastPeriod, GridMetadata, Observation, StationList};
pub use pipeline::{RunSummary, SmokeTest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, NwsError>;
