//! Summary figures derived from ingest output.

use crate::alert::risk::{self, RiskLevel};
use crate::model::{DailyRainfall, RiskError};

// ---------------------------------------------------------------------------
// Headline rainfall
// ---------------------------------------------------------------------------

/// Picks the headline rainfall figure from the two forecast sources.
///
/// The banner classifies the *worse* of the WeatherAPI and Open-Meteo
/// day-0 totals — the two models disagree often enough that taking either
/// one alone understates risk. Missing sources are skipped; `None` only
/// when both are missing. A NaN from one source defers to the other
/// (`f64::max` ignores NaN), so a single bad feed cannot poison the
/// headline.
pub fn headline_rainfall(primary_mm: Option<f64>, secondary_mm: Option<f64>) -> Option<f64> {
    match (primary_mm, secondary_mm) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

// ---------------------------------------------------------------------------
// Risk distribution
// ---------------------------------------------------------------------------

/// Counts of classified days per risk level over a forecast window.
/// Feeds the risk-overview breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskDistribution {
    counts: [usize; 4],
}

impl RiskDistribution {
    /// Days classified at the given level.
    pub fn count(&self, level: RiskLevel) -> usize {
        self.counts[level as usize]
    }

    /// Total days classified.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (level, count) pairs in ascending level order, zero counts included.
    pub fn buckets(&self) -> impl Iterator<Item = (RiskLevel, usize)> + '_ {
        RiskLevel::ALL.iter().map(|&l| (l, self.count(l)))
    }

    /// The worst level with at least one day, or `None` for an empty window.
    pub fn peak(&self) -> Option<RiskLevel> {
        RiskLevel::ALL
            .iter()
            .rev()
            .copied()
            .find(|&l| self.count(l) > 0)
    }
}

/// Classifies each daily rainfall total and tallies the buckets.
///
/// Fails on the first NaN rather than skipping it — a distribution built
/// from partially-dropped days would misrepresent the window.
pub fn risk_distribution(daily_rain_mm: &[f64]) -> Result<RiskDistribution, RiskError> {
    let mut counts = [0usize; 4];
    for &mm in daily_rain_mm {
        let level = risk::classify(mm)?;
        counts[level as usize] += 1;
    }
    Ok(RiskDistribution { counts })
}

// ---------------------------------------------------------------------------
// Cumulative rainfall
// ---------------------------------------------------------------------------

/// Sums rainfall over a window, skipping days the archive has no value for.
pub fn cumulative_rainfall_mm(days: &[DailyRainfall]) -> f64 {
    days.iter().filter_map(|d| d.rain_mm).sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
