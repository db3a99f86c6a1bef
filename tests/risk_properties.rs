//! Whole-range properties of the rainfall risk classifier.
//!
//! The unit tests in `alert::risk` pin individual values; these tests
//! sweep the bucket boundaries densely and check the published scenarios
//! end to end through the public API.

use floodrisk_service::alert::risk::{self, RiskLevel, Severity};
use floodrisk_service::model::RiskError;

/// Sweeps [0, 100] mm in 0.01 mm steps and checks every value lands in
/// the bucket its interval says it should.
#[test]
fn every_value_lands_in_its_interval() {
    for hundredths in 0..=10_000u32 {
        let mm = f64::from(hundredths) / 100.0;
        let expected = if mm > 50.0 {
            RiskLevel::Extreme
        } else if mm > 30.0 {
            RiskLevel::High
        } else if mm > 10.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };
        assert_eq!(
            risk::classify(mm),
            Ok(expected),
            "wrong bucket for {} mm",
            mm
        );
    }
}

#[test]
fn boundaries_are_exact() {
    assert_eq!(risk::classify(10.0), Ok(RiskLevel::Low));
    assert_eq!(risk::classify(10.0001), Ok(RiskLevel::Moderate));
    assert_eq!(risk::classify(30.0), Ok(RiskLevel::Moderate));
    assert_eq!(risk::classify(30.0001), Ok(RiskLevel::High));
    assert_eq!(risk::classify(50.0), Ok(RiskLevel::High));
    assert_eq!(risk::classify(50.0001), Ok(RiskLevel::Extreme));
}

#[test]
fn negative_rainfall_is_clamped_not_rejected() {
    assert_eq!(risk::classify(-5.0), Ok(RiskLevel::Low));
    assert_eq!(risk::classify(-1e9), Ok(RiskLevel::Low));
}

#[test]
fn nan_is_the_only_rejected_input() {
    assert_eq!(risk::classify(f64::NAN), Err(RiskError::InvalidInput));
    // Both infinities are ordinary, classifiable reals here.
    assert_eq!(risk::classify(f64::INFINITY), Ok(RiskLevel::Extreme));
    assert_eq!(risk::classify(f64::NEG_INFINITY), Ok(RiskLevel::Low));
}

#[test]
fn published_scenarios_hold_end_to_end() {
    let cases = [
        (0.0, RiskLevel::Low, "Stay aware.", Severity::Success),
        (15.0, RiskLevel::Moderate, "Monitor alerts; stay indoors.", Severity::Info),
        (35.0, RiskLevel::High, "Charge devices; avoid low areas.", Severity::Warning),
        (75.0, RiskLevel::Extreme, "Evacuate if needed; avoid floodwaters.", Severity::Error),
    ];
    for (mm, level, advisory, severity) in cases {
        let assessment = risk::evaluate(mm).expect("finite rainfall must evaluate");
        assert_eq!(assessment.level, level, "level for {} mm", mm);
        assert_eq!(assessment.advisory, advisory, "advisory for {} mm", mm);
        assert_eq!(assessment.severity, severity, "severity for {} mm", mm);
    }
}

#[test]
fn evaluate_agrees_with_its_parts() {
    for hundredths in (0..=6_000u32).step_by(7) {
        let mm = f64::from(hundredths) / 100.0;
        let assessment = risk::evaluate(mm).unwrap();
        let level = risk::classify(mm).unwrap();
        assert_eq!(assessment.level, level);
        assert_eq!(assessment.advisory, risk::advisory(level));
        assert_eq!(assessment.severity, risk::severity(level));
    }
}
