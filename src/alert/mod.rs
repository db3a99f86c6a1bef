/// Risk alerting for the flood risk service.
///
/// Submodules:
/// - `risk` — rainfall classification, advisories, and presentation severity.

pub mod risk;
