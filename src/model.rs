/// Core data types for the Malaysia flood risk service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond chrono —
/// only types.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// A single day's forecast for a district, as assembled from the WeatherAPI
/// `forecast.forecastday[]` array.
///
/// `rain_mm` is the accumulated precipitation for the day, in millimeters.
/// It is the only field the risk classifier consumes; the rest are carried
/// for the trends display.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub rain_mm: f64,
    pub max_temp_c: f64,
    pub avg_humidity_pct: f64,
    pub max_wind_kph: f64,
}

/// A single day's precipitation total from Open-Meteo, either the forecast
/// endpoint or the ERA5 archive endpoint.
///
/// `rain_mm` may be `None` when the archive has a gap for that day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRainfall {
    pub date: NaiveDate,
    pub rain_mm: Option<f64>,
}

// ---------------------------------------------------------------------------
// Location types
// ---------------------------------------------------------------------------

/// A WGS84 coordinate pair, produced by geocoding a district or by parsing
/// a manual "lat,lon" override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// News types
// ---------------------------------------------------------------------------

/// A flood-related news article from the NewsData.io search API, after
/// keyword filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    pub published: Option<String>, // as returned by the API, e.g. "2026-08-24 09:15:00"
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Contract violations reported by the risk classifier.
///
/// The classifier is total over the reals; the only rejected input is a
/// value that is not a number at all. Negative rainfall is clamped, not
/// rejected — upstream feeds occasionally carry sentinel negatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// The rainfall value was NaN. A NaN compares false against every
    /// threshold, so without this check it would silently classify as Low.
    InvalidInput,
}

impl std::fmt::Display for RiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskError::InvalidInput => write!(f, "rainfall value is not a number"),
        }
    }
}

impl std::error::Error for RiskError {}

/// Errors that can arise when fetching or processing upstream weather,
/// geocoding, or news data.
#[derive(Debug, PartialEq)]
pub enum WeatherError {
    /// The request never produced a response (connect failure, timeout).
    RequestFailed(String),
    /// Non-2xx HTTP response from an upstream API.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The geocoder returned no match for the requested place.
    LocationNotFound(String),
    /// The response parsed but contained no usable data values.
    NoDataAvailable(String),
    /// A caller-supplied value was rejected before any request was made
    /// (e.g. a malformed or out-of-range coordinate override).
    InvalidInput(String),
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            WeatherError::HttpError(code) => write!(f, "HTTP error: {}", code),
            WeatherError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            WeatherError::LocationNotFound(place) => write!(f, "Location not found: {}", place),
            WeatherError::NoDataAvailable(what) => write!(f, "No data available: {}", what),
            WeatherError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for WeatherError {}
