//! The three-stage smoke test
//!
//! 1. Resolve the grid point for the configured coordinate.
//! 2. Show the first forecast periods.
//! 3. Show the latest observation from the nearest station.
//!
//! Stage 2 and 3 only run when stage 1 got HTTP 200. A non-200 from stage 2
//! does not stop stage 3. Transport and decode errors abort the whole run.

use crate::api::HttpFetch;
use crate::config::NwsCheckConfig;
use crate::models::grid::latest_observation_url;
use crate::models::{
    Coordinate, ForecastResponse, GridMetadata, Observation, ObservationResponse, PointsResponse,
    StationList,
};
use crate::report::Reporter;
use crate::Result;
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Forecast periods shown in step 2
pub const FORECAST_PERIODS: usize = 3;

/// What a run got through
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Set when the grid lookup returned 200
    pub grid: Option<GridMetadata>,
    pub forecast_periods_shown: usize,
    pub nearest_station: Option<String>,
    /// Set when the latest observation returned 200
    pub observation: Option<Observation>,
}

pub struct SmokeTest<'a, F: HttpFetch, W: Write> {
    fetcher: &'a F,
    config: &'a NwsCheckConfig,
    coordinate: Coordinate,
    report: Reporter<W>,
}

impl<'a, F: HttpFetch, W: Write> SmokeTest<'a, F, W> {
    pub fn new(fetcher: &'a F, config: &'a NwsCheckConfig, out: W) -> Self {
        Self {
            fetcher,
            config,
            coordinate: Coordinate::from(&config.location),
            report: Reporter::new(out),
        }
    }

    /// Run every stage, printing failures instead of returning them. The
    /// closing footer is always written. Only a failure to write the report
    /// itself is returned as an error.
    pub fn run_to_completion(&mut self) -> Result<Option<RunSummary>> {
        let summary = match self.run() {
            Ok(summary) => Some(summary),
            Err(error) => {
                warn!("Smoke test aborted: {:#}", error);
                self.report.error(&error)?;
                None
            }
        };

        self.report.section("API Test Complete")?;
        self.report.flush()?;
        Ok(summary)
    }

    /// Run every stage, stopping at the first transport or decode error
    pub fn run(&mut self) -> anyhow::Result<RunSummary> {
        self.print_header()?;

        let mut summary = RunSummary::default();

        let Some(grid) = self.resolve_grid().context("Grid point lookup failed")? else {
            return Ok(summary);
        };

        summary.forecast_periods_shown = self
            .fetch_forecast(&grid.forecast_url)
            .context("Forecast stage failed")?;

        let (station, observation) = self
            .fetch_observation(&grid.stations_url)
            .context("Observation stage failed")?;
        summary.nearest_station = station;
        summary.observation = observation;
        summary.grid = Some(grid);

        self.report
            .section("✅ ALL TESTS PASSED - NWS API is working correctly!")?;

        Ok(summary)
    }

    pub fn into_writer(self) -> W {
        self.report.into_inner()
    }

    fn print_header(&mut self) -> Result<()> {
        self.report.banner("Testing National Weather Service (NWS) API")?;
        self.report.blank()?;
        self.report
            .line(format!("Location: {}", self.coordinate.label))?;
        self.report.line(format!(
            "Coordinates: {}",
            self.coordinate.format_coordinates()
        ))?;
        self.report.blank()?;
        self.report
            .line(format!("Base URL: {}", self.config.api.base_url))
    }

    #[instrument(skip(self))]
    fn resolve_grid(&mut self) -> Result<Option<GridMetadata>> {
        self.report.section("STEP 1: Getting grid point data...")?;

        let url = self.coordinate.points_url(&self.config.api.base_url);
        self.report.line(format!("URL: {url}"))?;

        let response = self.fetcher.get(&url)?;
        self.report.status(response.status)?;

        if !response.is_ok() {
            warn!("Grid point lookup returned HTTP {}", response.status);
            self.report
                .failure(&format!("Failed to get grid point: {}", response.status))?;
            self.report.line(format!("Response: {}", response.body))?;
            return Ok(None);
        }

        let points: PointsResponse = response.json(&url)?;
        let grid = GridMetadata::from(points);
        info!(
            forecast = %grid.forecast_url,
            stations = %grid.stations_url,
            "Resolved grid point"
        );

        self.report.success("Grid point data retrieved successfully!")?;
        self.report.blank()?;
        self.report
            .line(format!("Forecast URL: {}", grid.forecast_url))?;
        self.report
            .line(format!("Stations URL: {}", grid.stations_url))?;

        Ok(Some(grid))
    }

    /// Returns how many periods were printed
    #[instrument(skip(self))]
    fn fetch_forecast(&mut self, forecast_url: &str) -> Result<usize> {
        self.report.section("STEP 2: Getting forecast data...")?;

        let response = self.fetcher.get(forecast_url)?;
        self.report.status(response.status)?;

        if !response.is_ok() {
            warn!("Forecast returned HTTP {}", response.status);
            self.report
                .failure(&format!("Failed to get forecast: {}", response.status))?;
            return Ok(0);
        }

        let forecast: ForecastResponse = response.json(forecast_url)?;
        self.report.success("Forecast data retrieved successfully!")?;

        let periods = forecast.first_periods(FORECAST_PERIODS);
        debug!(
            "Forecast has {} periods, showing {}",
            forecast.properties.periods.len(),
            periods.len()
        );

        self.report.blank()?;
        self.report.line(format!(
            "📅 Showing first {FORECAST_PERIODS} forecast periods:"
        ))?;
        self.report.rule()?;

        for (i, period) in periods.iter().enumerate() {
            self.report.blank()?;
            self.report.line(format!("{}. {}", i + 1, period.name))?;
            self.report
                .line(format!("   Temperature: {}", period.format_temperature()))?;
            self.report
                .line(format!("   Conditions: {}", period.short_forecast))?;
            self.report
                .line(format!("   Details: {}", period.truncated_details()))?;
        }

        Ok(periods.len())
    }

    #[instrument(skip(self))]
    fn fetch_observation(
        &mut self,
        stations_url: &str,
    ) -> Result<(Option<String>, Option<Observation>)> {
        self.report.section("STEP 3: Getting current observations...")?;

        let response = self.fetcher.get(stations_url)?;
        self.report.status(response.status)?;

        if !response.is_ok() {
            warn!("Station list returned HTTP {}", response.status);
            self.report
                .failure(&format!("Failed to get stations: {}", response.status))?;
            return Ok((None, None));
        }

        let stations: StationList = response.json(stations_url)?;
        self.report.success("Stations data retrieved successfully!")?;

        let Some(station) = stations.nearest() else {
            debug!("No observation stations listed");
            return Ok((None, None));
        };
        let station = station.to_string();

        self.report.blank()?;
        self.report.line(format!("Nearest Station: {station}"))?;

        let observation_url = latest_observation_url(&station);
        let response = self.fetcher.get(&observation_url)?;
        self.report
            .line(format!("Observation URL: {observation_url}"))?;
        self.report.status(response.status)?;

        if !response.is_ok() {
            warn!("Latest observation returned HTTP {}", response.status);
            self.report
                .failure(&format!("Failed to get observations: {}", response.status))?;
            return Ok((Some(station), None));
        }

        let observation = response
            .json::<ObservationResponse>(&observation_url)?
            .properties;
        self.report
            .success("Current observations retrieved successfully!")?;

        self.report.blank()?;
        self.report.line("🌡️  Current Conditions:")?;
        self.report.rule()?;
        self.report
            .line(format!("Temperature: {}", observation.format_temperature()))?;
        self.report
            .line(format!("Humidity: {}", observation.format_humidity()))?;
        self.report
            .line(format!("Wind Speed: {}", observation.format_wind()))?;
        self.report
            .line(format!("Conditions: {}", observation.format_conditions()))?;

        Ok((Some(station), Some(observation)))
    }
}
