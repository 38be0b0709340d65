//! Data models for api.weather.gov responses

pub mod forecast;
pub mod grid;
pub mod location;
pub mod observation;

pub use forecast::{ForecastPeriod, ForecastResponse};
pub use grid::{GridMetadata, PointsResponse, StationList};
pub use location::Coordinate;
pub use observation::{Observation, ObservationResponse, QuantitativeValue};
