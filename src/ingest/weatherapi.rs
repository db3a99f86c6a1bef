/// WeatherAPI.com Forecast Client
///
/// Retrieves the 3-day district forecast used for the headline risk banner
/// and the trends table. Only the daily aggregates are consumed: total
/// precipitation, max temperature, average humidity, and max wind.
///
/// API Documentation: https://www.weatherapi.com/docs/

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Coordinates, DailyForecast, WeatherError};

const WEATHERAPI_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Number of forecast days the dashboard requests.
pub const FORECAST_DAYS: u8 = 3;

// ============================================================================
// WeatherAPI Response Structures
// ============================================================================

/// Top-level forecast response. Location/current blocks are ignored.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub forecast: ForecastBlock,
}

#[derive(Debug, Deserialize)]
pub struct ForecastBlock {
    #[serde(rename = "forecastday")]
    pub forecast_days: Vec<ForecastDay>,
}

/// One entry of `forecast.forecastday[]`.
#[derive(Debug, Deserialize)]
pub struct ForecastDay {
    pub date: String, // "2026-08-25"
    pub day: DayAggregates,
}

/// Daily aggregate block for a forecast day.
#[derive(Debug, Deserialize)]
pub struct DayAggregates {
    #[serde(rename = "totalprecip_mm")]
    pub total_precip_mm: f64,
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: f64,
    #[serde(rename = "avghumidity")]
    pub avg_humidity: f64,
    #[serde(rename = "maxwind_kph")]
    pub max_wind_kph: f64,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the forecast request URL for a coordinate pair.
pub fn build_forecast_url(api_key: &str, coords: Coordinates, days: u8) -> String {
    format!(
        "{}/forecast.json?key={}&q={},{}&days={}",
        WEATHERAPI_BASE_URL, api_key, coords.latitude, coords.longitude, days
    )
}

/// Fetch the daily forecast for a location.
///
/// # Parameters
/// - `client`: HTTP client, constructed by the caller
/// - `api_key`: WeatherAPI key (see `config::AppConfig`)
/// - `coords`: geocoded district coordinates
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    api_key: &str,
    coords: Coordinates,
) -> Result<Vec<DailyForecast>, WeatherError> {
    let url = build_forecast_url(api_key, coords, FORECAST_DAYS);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WeatherError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    parse_forecast_response(&body)
}

/// Parses a forecast response body into daily rows.
///
/// Returns `NoDataAvailable` if the forecast block is present but empty —
/// WeatherAPI does this for coordinates it cannot resolve to a grid cell.
pub fn parse_forecast_response(body: &str) -> Result<Vec<DailyForecast>, WeatherError> {
    let response: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

    if response.forecast.forecast_days.is_empty() {
        return Err(WeatherError::NoDataAvailable(
            "forecast contained no days".to_string(),
        ));
    }

    response
        .forecast
        .forecast_days
        .into_iter()
        .map(|fd| {
            let date = NaiveDate::parse_from_str(&fd.date, "%Y-%m-%d").map_err(|e| {
                WeatherError::ParseError(format!("bad forecast date '{}': {}", fd.date, e))
            })?;
            Ok(DailyForecast {
                date,
                rain_mm: fd.day.total_precip_mm,
                max_temp_c: fd.day.max_temp_c,
                avg_humidity_pct: fd.day.avg_humidity,
                max_wind_kph: fd.day.max_wind_kph,
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
