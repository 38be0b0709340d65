//! Grid point metadata and the observation station list

use serde::Deserialize;

/// Body of `GET /points/{lat},{lon}`
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    pub forecast: String,
    pub observation_stations: String,
}

/// The two endpoints the later stages depend on
#[derive(Debug, Clone, PartialEq)]
pub struct GridMetadata {
    pub forecast_url: String,
    pub stations_url: String,
}

impl From<PointsResponse> for GridMetadata {
    fn from(response: PointsResponse) -> Self {
        Self {
            forecast_url: response.properties.forecast,
            stations_url: response.properties.observation_stations,
        }
    }
}

/// Body of the observation stations endpoint. Only the station URLs are read;
/// a missing or null list reads the same as an empty one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationList {
    #[serde(default)]
    pub observation_stations: Option<Vec<String>>,
}

impl StationList {
    /// The nearest station, which the API lists first
    #[must_use]
    pub fn nearest(&self) -> Option<&str> {
        self.observation_stations
            .as_deref()
            .and_then(<[String]>::first)
            .map(String::as_str)
    }
}

/// `{station}/observations/latest`
#[must_use]
pub fn latest_observation_url(station: &str) -> String {
    format!("{station}/observations/latest")
}
