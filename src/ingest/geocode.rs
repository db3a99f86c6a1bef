/// Nominatim Forward Geocoding Client
///
/// Resolves a "{district}, {state}, Malaysia" query to coordinates for the
/// weather APIs. Nominatim's usage policy requires an identifying
/// User-Agent on every request; the caller supplies it from config.
///
/// Also home to the manual "lat,lon" override parser, since a parsed
/// override and a geocoder hit produce the same `Coordinates` and callers
/// treat them interchangeably.
///
/// API Documentation: https://nominatim.org/release-docs/latest/api/Search/

use serde::Deserialize;

use crate::model::{Coordinates, WeatherError};

const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

// ============================================================================
// Nominatim Response Structures
// ============================================================================

/// One search hit. Nominatim returns lat/lon as strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the search URL for a free-text place query.
pub fn build_search_url(query: &str) -> String {
    format!(
        "{}/search?q={}&format=json&limit=1",
        NOMINATIM_BASE_URL,
        urlencode(query)
    )
}

/// Resolve a place query to coordinates.
///
/// Takes the first (best-ranked) hit. Returns `LocationNotFound` when the
/// geocoder has no match, so the caller can prompt for a manual override.
pub fn fetch_coordinates(
    client: &reqwest::blocking::Client,
    user_agent: &str,
    query: &str,
) -> Result<Coordinates, WeatherError> {
    let url = build_search_url(query);

    let response = client
        .get(&url)
        .header("User-Agent", user_agent)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WeatherError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    parse_search_response(&body, query)
}

/// Parses a search response, taking the first hit.
pub fn parse_search_response(body: &str, query: &str) -> Result<Coordinates, WeatherError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::LocationNotFound(query.to_string()))?;

    let latitude: f64 = place.lat.parse().map_err(|_| {
        WeatherError::ParseError(format!("unparseable latitude '{}'", place.lat))
    })?;
    let longitude: f64 = place.lon.parse().map_err(|_| {
        WeatherError::ParseError(format!("unparseable longitude '{}'", place.lon))
    })?;

    validate_coordinates(latitude, longitude)
}

// ============================================================================
// Manual Override Parsing
// ============================================================================

/// Parses a manual "lat,lon" override string.
///
/// Accepts surrounding whitespace around either component. Rejects
/// anything that is not exactly two finite numbers in WGS84 range —
/// the original dashboard forwarded any `float,float` pair straight to
/// the weather APIs, which then failed opaquely on values like `999,999`.
pub fn parse_coord_override(input: &str) -> Result<Coordinates, WeatherError> {
    let mut parts = input.split(',');
    let (lat_str, lon_str) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => (lat.trim(), lon.trim()),
        _ => {
            return Err(WeatherError::InvalidInput(format!(
                "expected 'lat,lon', got '{}'",
                input
            )));
        }
    };

    let latitude: f64 = lat_str.parse().map_err(|_| {
        WeatherError::InvalidInput(format!("unparseable latitude '{}'", lat_str))
    })?;
    let longitude: f64 = lon_str.parse().map_err(|_| {
        WeatherError::InvalidInput(format!("unparseable longitude '{}'", lon_str))
    })?;

    validate_coordinates(latitude, longitude)
        .map_err(|_| WeatherError::InvalidInput(format!("coordinates out of range: '{}'", input)))
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<Coordinates, WeatherError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(WeatherError::ParseError(format!(
            "latitude {} outside [-90, 90]",
            latitude
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(WeatherError::ParseError(format!(
            "longitude {} outside [-180, 180]",
            longitude
        )));
    }
    Ok(Coordinates { latitude, longitude })
}

fn urlencode(s: &str) -> String {
    // Minimal percent-encoding for place queries: space and comma are the
    // only characters our registry names contain that need escaping.
    s.replace('%', "%25").replace(' ', "%20").replace(',', "%2C")
}

// ============================================================================
// Tests
// ============================================================================
