//! Forecast periods from the gridpoint forecast endpoint

use serde::Deserialize;
use serde_json::Number;

/// Number of detail characters kept for display
pub const DETAIL_LIMIT: usize = 100;

/// Body of `GET /gridpoints/{wfo}/{x},{y}/forecast`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// A named forecast time segment ("Tonight", "Tuesday", ...)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    /// Kept as a JSON number so whole degrees print without a decimal point
    pub temperature: Option<Number>,
    #[serde(default)]
    pub temperature_unit: String,
    #[serde(default)]
    pub short_forecast: String,
    #[serde(default)]
    pub detailed_forecast: String,
}

impl ForecastPeriod {
    /// Format temperature as `<value>°<unit>`
    #[must_use]
    pub fn format_temperature(&self) -> String {
        match &self.temperature {
            Some(value) => format!("{value}°{}", self.temperature_unit),
            None => "N/A".to_string(),
        }
    }

    /// First [`DETAIL_LIMIT`] characters of the detailed forecast, always
    /// followed by `...`
    #[must_use]
    pub fn truncated_details(&self) -> String {
        truncate_with_ellipsis(&self.detailed_forecast, DETAIL_LIMIT)
    }
}

impl ForecastResponse {
    /// The leading `count` periods, or all of them when there are fewer
    #[must_use]
    pub fn first_periods(&self, count: usize) -> &[ForecastPeriod] {
        let periods = &self.properties.periods;
        &periods[..count.min(periods.len())]
    }
}

/// Cuts on character boundaries and appends the ellipsis unconditionally.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}
