/// Upstream API clients for the flood risk service.
///
/// Every fetch function takes a `&reqwest::blocking::Client` built by the
/// caller — transport policy (timeouts, proxies) is decided once at the
/// edge, not per module, and tests can exercise the parsers without any
/// client at all.
///
/// Submodules:
/// - `weatherapi` — WeatherAPI.com 3-day district forecast.
/// - `open_meteo` — Open-Meteo daily precipitation, forecast and ERA5 archive.
/// - `geocode` — Nominatim forward geocoding and manual coordinate overrides.
/// - `news` — NewsData.io flood news search and keyword filtering.

pub mod geocode;
pub mod news;
pub mod open_meteo;
pub mod weatherapi;
