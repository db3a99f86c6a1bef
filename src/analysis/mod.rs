/// Derived figures for the flood risk service.
///
/// This module turns raw ingest output into the numbers the dashboard
/// shows: the headline rainfall figure, the risk-bucket distribution over
/// a forecast window, and cumulative totals.
///
/// Submodules:
/// - `summary` — headline rainfall, risk distribution, cumulative rain.

pub mod summary;
