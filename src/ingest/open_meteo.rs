/// Open-Meteo Daily Precipitation Client
///
/// Second rainfall source alongside WeatherAPI. Two endpoints share one
/// response shape:
/// - forecast: daily `precipitation_sum` for the next few days, used to
///   cross-check the WeatherAPI figure (the headline takes the worse of
///   the two sources);
/// - ERA5 archive: actual daily rainfall for the recent past, used for the
///   "past rain" table.
///
/// API Documentation: https://open-meteo.com/en/docs
///
/// # Clock injection
/// URL builders take explicit dates rather than calling `Utc::now()`
/// internally, so window construction is deterministic in tests.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::model::{Coordinates, DailyRainfall, WeatherError};

const FORECAST_BASE_URL: &str = "https://api.open-meteo.com";
const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com";

// ============================================================================
// Open-Meteo Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoResponse {
    /// Missing entirely when the requested window has no data.
    pub daily: Option<DailySeries>,
}

/// Parallel arrays: `time[i]` is the date of `precipitation_sum[i]`.
/// Individual sums may be null for archive gaps.
#[derive(Debug, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub precipitation_sum: Vec<Option<f64>>,
}

// ============================================================================
// Date Windows
// ============================================================================

/// Forecast window starting today: `[today, today + days - 1]`.
pub fn forecast_window(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(days - 1))
}

/// Archive window of the `days` fully-elapsed days before `today`:
/// `[today - days, today - 1]`. Today itself is excluded since its total
/// is still accumulating.
pub fn past_window(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(days), today - Duration::days(1))
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the daily-precipitation forecast URL for a date window.
pub fn build_forecast_url(coords: Coordinates, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/v1/forecast?latitude={}&longitude={}&start_date={}&end_date={}&daily=precipitation_sum&timezone=auto",
        FORECAST_BASE_URL,
        coords.latitude,
        coords.longitude,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

/// Builds the ERA5 archive URL for a date window.
pub fn build_archive_url(coords: Coordinates, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/v1/era5?latitude={}&longitude={}&start_date={}&end_date={}&daily=precipitation_sum&timezone=auto",
        ARCHIVE_BASE_URL,
        coords.latitude,
        coords.longitude,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

/// Fetch forecast daily precipitation sums for a window.
pub fn fetch_daily_forecast(
    client: &reqwest::blocking::Client,
    coords: Coordinates,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyRainfall>, WeatherError> {
    fetch_daily(client, &build_forecast_url(coords, start, end))
}

/// Fetch actual daily precipitation sums from the ERA5 archive.
pub fn fetch_archive(
    client: &reqwest::blocking::Client,
    coords: Coordinates,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyRainfall>, WeatherError> {
    fetch_daily(client, &build_archive_url(coords, start, end))
}

fn fetch_daily(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Vec<DailyRainfall>, WeatherError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WeatherError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    parse_daily_response(&body)
}

/// Parses a daily-series response into per-day rainfall rows.
///
/// A missing `daily` block is `NoDataAvailable`. Mismatched array lengths
/// mean the response is structurally broken and parse as an error rather
/// than a truncated zip.
pub fn parse_daily_response(body: &str) -> Result<Vec<DailyRainfall>, WeatherError> {
    let response: OpenMeteoResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

    let daily = response.daily.ok_or_else(|| {
        WeatherError::NoDataAvailable("response had no daily block".to_string())
    })?;

    if daily.time.len() != daily.precipitation_sum.len() {
        return Err(WeatherError::ParseError(format!(
            "daily arrays disagree: {} dates vs {} sums",
            daily.time.len(),
            daily.precipitation_sum.len()
        )));
    }

    daily
        .time
        .iter()
        .zip(daily.precipitation_sum)
        .map(|(date_str, rain_mm)| {
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                WeatherError::ParseError(format!("bad date '{}': {}", date_str, e))
            })?;
            Ok(DailyRainfall { date, rain_mm })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
