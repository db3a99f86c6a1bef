//! Rainfall risk classification and advisory mapping.
//!
//! This is the decision core of the service: a daily rainfall total in
//! millimeters is bucketed into an ordered risk level, and each level maps
//! to a fixed preparedness advisory and a presentation severity. Everything
//! here is pure and stateless, so it is safe to call from any number of
//! threads without coordination.

use crate::model::RiskError;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Rainfall above this is Moderate, in mm. Exactly 10.0 mm is still Low.
pub const MODERATE_THRESHOLD_MM: f64 = 10.0;
/// Rainfall above this is High, in mm. Exactly 30.0 mm is still Moderate.
pub const HIGH_THRESHOLD_MM: f64 = 30.0;
/// Rainfall above this is Extreme, in mm. Exactly 50.0 mm is still High.
pub const EXTREME_THRESHOLD_MM: f64 = 50.0;

// ---------------------------------------------------------------------------
// Risk levels
// ---------------------------------------------------------------------------

/// Flood risk levels, in ascending order of severity.
///
/// The derive order gives `Low < Moderate < High < Extreme`, so callers can
/// compare levels directly (e.g. `level >= RiskLevel::High`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLevel {
    /// All levels in ascending order. Useful for iterating distribution
    /// buckets in a stable order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Presentation severity for a risk level, consumed by whatever renders the
/// headline banner. The original dashboard picked its display call by string
/// key; here the mapping is an exhaustive match so a new `RiskLevel` variant
/// cannot be forgotten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Buckets a daily rainfall total (mm) into a risk level.
///
/// Buckets are right-open on the lower side with strict `>` comparisons:
///
///   Low      = [0, 10]
///   Moderate = (10, 30]
///   High     = (30, 50]
///   Extreme  = (50, ∞)
///
/// A boundary value lands in the lower bucket: `classify(30.0)` is
/// `Moderate`, not `High`.
///
/// Negative rainfall is clamped to `Low` rather than rejected — upstream
/// feeds occasionally carry sentinel negatives and a crash on those would
/// take the whole forecast down. NaN is the one rejected input: it compares
/// false against every threshold and would otherwise fall through to `Low`
/// silently.
pub fn classify(rain_mm: f64) -> Result<RiskLevel, RiskError> {
    if rain_mm.is_nan() {
        return Err(RiskError::InvalidInput);
    }
    let level = if rain_mm > EXTREME_THRESHOLD_MM {
        RiskLevel::Extreme
    } else if rain_mm > HIGH_THRESHOLD_MM {
        RiskLevel::High
    } else if rain_mm > MODERATE_THRESHOLD_MM {
        RiskLevel::Moderate
    } else {
        // Covers [0, 10] and, by clamping, anything negative.
        RiskLevel::Low
    };
    Ok(level)
}

/// Returns the fixed preparedness advisory for a risk level.
///
/// Total one-to-one mapping. The match is exhaustive with no wildcard arm,
/// so adding a `RiskLevel` variant without an advisory is a compile error —
/// there is no runtime "unknown level" case to guess at.
pub fn advisory(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Extreme => "Evacuate if needed; avoid floodwaters.",
        RiskLevel::High => "Charge devices; avoid low areas.",
        RiskLevel::Moderate => "Monitor alerts; stay indoors.",
        RiskLevel::Low => "Stay aware.",
    }
}

/// Returns the presentation severity for a risk level.
pub fn severity(level: RiskLevel) -> Severity {
    match level {
        RiskLevel::Extreme => Severity::Error,
        RiskLevel::High => Severity::Warning,
        RiskLevel::Moderate => Severity::Info,
        RiskLevel::Low => Severity::Success,
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// A classified rainfall figure with its advisory, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub advisory: &'static str,
    pub severity: Severity,
}

/// Classifies a rainfall total and attaches its advisory and severity.
///
/// Convenience composition of [`classify`], [`advisory`], and [`severity`];
/// no additional logic.
pub fn evaluate(rain_mm: f64) -> Result<RiskAssessment, RiskError> {
    let level = classify(rain_mm)?;
    Ok(RiskAssessment {
        level,
        advisory: advisory(level),
        severity: severity(level),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
