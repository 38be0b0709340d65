//! Coordinate model for the point being checked

use crate::config::LocationConfig;

/// Fixed latitude/longitude pair with a display label
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Location name (city, postal code, etc.)
    pub label: String,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, label: String) -> Self {
        Self {
            latitude,
            longitude,
            label,
        }
    }

    /// Format as `36.1627°N, 86.7816°W`
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        format!(
            "{}°{ns}, {}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }

    /// Grid point lookup URL, `{base}/points/{lat},{lon}`
    #[must_use]
    pub fn points_url(&self, base_url: &str) -> String {
        format!(
            "{}/points/{},{}",
            base_url.trim_end_matches('/'),
            self.latitude,
            self.longitude
        )
    }
}

impl From<&LocationConfig> for Coordinate {
    fn from(config: &LocationConfig) -> Self {
        Self::new(config.latitude, config.longitude, config.label.clone())
    }
}
