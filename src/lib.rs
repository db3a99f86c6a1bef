//! Flood risk service for Malaysian districts.
//!
//! Fetches daily rainfall forecasts from two weather models, classifies
//! them into ordered flood-risk levels with fixed preparedness advisories,
//! and assembles the derived figures a dashboard front end renders. The
//! front end itself (tables, charts, maps) is not part of this crate.
//!
//! Module map:
//! - [`model`] — shared domain types and error enums.
//! - [`locations`] — registry of flood-prone states and districts.
//! - [`ingest`] — WeatherAPI, Open-Meteo, Nominatim, and NewsData clients.
//! - [`alert`] — rainfall risk classification and advisories.
//! - [`analysis`] — headline figures, risk distributions, cumulative rain.
//! - [`config`] — TOML + environment configuration.
//! - [`logging`] — structured logging with failure classification.

pub mod alert;
pub mod analysis;
pub mod config;
pub mod ingest;
pub mod locations;
pub mod logging;
pub mod model;
