//! Shared fixtures for pipeline tests

use nws_check::{ApiResponse, HttpFetch, NwsCheckConfig, NwsError};
use std::cell::RefCell;
use std::collections::HashMap;

pub const BASE_URL: &str = "https://nws.test";
pub const POINTS_URL: &str = "https://nws.test/points/36.1627,-86.7816";
pub const FORECAST_URL: &str = "https://nws.test/gridpoints/OHX/50,57/forecast";
pub const STATIONS_URL: &str = "https://nws.test/gridpoints/OHX/50,57/stations";
pub const STATION: &str = "https://nws.test/stations/KBNA";
pub const OBSERVATION_URL: &str = "https://nws.test/stations/KBNA/observations/latest";

enum Reply {
    Response(ApiResponse),
    NetworkError(String),
}

/// In-memory `HttpFetch` that records every URL it is asked for
#[derive(Default)]
pub struct FakeFetcher {
    replies: HashMap<String, Reply>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .insert(url.to_string(), Reply::Response(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.replies
            .insert(url.to_string(), Reply::NetworkError(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpFetch for FakeFetcher {
    fn get(&self, url: &str) -> nws_check::Result<ApiResponse> {
        self.requests.borrow_mut().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::NetworkError(message)) => Err(NwsError::network(url, message)),
            None => Ok(ApiResponse::new(404, "not found")),
        }
    }
}

pub fn config() -> NwsCheckConfig {
    NwsCheckConfig::with_base_url(BASE_URL)
}

pub fn points_body() -> String {
    format!(
        r#"{{
            "id": "{POINTS_URL}",
            "properties": {{
                "gridId": "OHX",
                "gridX": 50,
                "gridY": 57,
                "forecast": "{FORECAST_URL}",
                "observationStations": "{STATIONS_URL}"
            }}
        }}"#
    )
}

/// Forecast with `count` periods named "Period 1".."Period n"
pub fn forecast_body(count: usize) -> String {
    let long_details = "Mostly sunny with a high near 75 and a light south wind. ".repeat(4);
    let periods: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{
                    "number": {n},
                    "name": "Period {n}",
                    "isDaytime": true,
                    "temperature": {},
                    "temperatureUnit": "F",
                    "shortForecast": "Sunny {n}",
                    "detailedForecast": "{long_details}"
                }}"#,
                60 + n
            )
        })
        .collect();
    format!(r#"{{"properties": {{"periods": [{}]}}}}"#, periods.join(","))
}

pub fn stations_body(stations: &[&str]) -> String {
    let quoted: Vec<String> = stations.iter().map(|s| format!("\"{s}\"")).collect();
    format!(
        r#"{{"type": "FeatureCollection", "observationStations": [{}]}}"#,
        quoted.join(",")
    )
}

pub fn observation_body(celsius: &str, humidity: &str, wind_mps: &str) -> String {
    format!(
        r#"{{
            "properties": {{
                "station": "{STATION}",
                "textDescription": "Partly Cloudy",
                "temperature": {{"unitCode": "wmoUnit:degC", "value": {celsius}}},
                "relativeHumidity": {{"unitCode": "wmoUnit:percent", "value": {humidity}}},
                "windSpeed": {{"unitCode": "wmoUnit:m_s-1", "value": {wind_mps}}}
            }}
        }}"#
    )
}

/// Every endpoint answering 200
pub fn healthy_api() -> FakeFetcher {
    FakeFetcher::new()
        .respond(POINTS_URL, 200, points_body())
        .respond(FORECAST_URL, 200, forecast_body(5))
        .respond(
            STATIONS_URL,
            200,
            stations_body(&[STATION, "https://nws.test/stations/KJWN"]),
        )
        .respond(OBSERVATION_URL, 200, observation_body("20.0", "65.5", "5.0"))
}
