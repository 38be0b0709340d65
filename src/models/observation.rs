//! Latest station observation and unit conversions

use serde::Deserialize;

/// Metres per second to miles per hour
pub const MPS_TO_MPH: f64 = 0.621371;

/// Body of `GET /stations/{id}/observations/latest`
#[derive(Debug, Deserialize)]
pub struct ObservationResponse {
    pub properties: Observation,
}

/// The `value` half of a `{ "unitCode": ..., "value": ... }` pair. `value` is
/// null when the station did not report the quantity.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct QuantitativeValue {
    pub value: Option<f64>,
}

/// Current conditions at a station
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Degrees Celsius
    #[serde(default)]
    pub temperature: Option<QuantitativeValue>,
    /// Percent
    #[serde(default)]
    pub relative_humidity: Option<QuantitativeValue>,
    /// Metres per second
    #[serde(default)]
    pub wind_speed: Option<QuantitativeValue>,
    #[serde(default)]
    pub text_description: Option<String>,
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}

fn value_of(quantity: Option<&QuantitativeValue>) -> Option<f64> {
    quantity.and_then(|q| q.value)
}

impl Observation {
    #[must_use]
    pub fn temperature_fahrenheit(&self) -> Option<f64> {
        value_of(self.temperature.as_ref()).map(celsius_to_fahrenheit)
    }

    #[must_use]
    pub fn humidity(&self) -> Option<f64> {
        value_of(self.relative_humidity.as_ref())
    }

    #[must_use]
    pub fn wind_speed_mph(&self) -> Option<f64> {
        value_of(self.wind_speed.as_ref()).map(mps_to_mph)
    }

    /// Format temperature as `68.0°F`
    #[must_use]
    pub fn format_temperature(&self) -> String {
        self.temperature_fahrenheit()
            .map_or_else(|| "N/A".to_string(), |f| format!("{f:.1}°F"))
    }

    /// Humidity as reported, e.g. `65.5%`
    #[must_use]
    pub fn format_humidity(&self) -> String {
        self.humidity()
            .map_or_else(|| "N/A".to_string(), |h| format!("{h}%"))
    }

    /// Format wind speed as `3.1 mph`
    #[must_use]
    pub fn format_wind(&self) -> String {
        self.wind_speed_mph()
            .map_or_else(|| "N/A".to_string(), |mph| format!("{mph:.1} mph"))
    }

    #[must_use]
    pub fn format_conditions(&self) -> String {
        self.text_description
            .clone()
            .unwrap_or_else(|| "N/A".to_string())
    }
}
