//! Comparison metrics for the "your value vs healthy target" visualization.
//!
//! The four metrics, their fixed axis maxima, and the warning/danger
//! thresholds (1.2x and 1.5x the healthy target) are shared by the ASCII
//! bars (`plot::ascii`) and the TUI chart widget (`tui::plotters_chart`).

use crate::domain::ClinicalInput;

/// Multiplier above the healthy target at which a metric turns `Warning`.
pub const WARNING_FACTOR: f64 = 1.2;

/// Multiplier above the healthy target at which a metric turns `Danger`.
pub const DANGER_FACTOR: f64 = 1.5;

/// Severity of one observed value relative to its healthy target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Normal,
    Warning,
    Danger,
}

impl MetricStatus {
    /// Short lowercase tag for terminal output ("", "warning", "danger").
    pub fn tag(self) -> &'static str {
        match self {
            MetricStatus::Normal => "",
            MetricStatus::Warning => "warning",
            MetricStatus::Danger => "danger",
        }
    }
}

/// One row of the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricComparison {
    pub label: &'static str,
    /// Observed value from the input record.
    pub value: f64,
    pub unit: &'static str,
    /// Fixed axis maximum for bar scaling.
    pub max_scale: f64,
    /// Healthy target value.
    pub healthy: f64,
    pub status: MetricStatus,
}

/// Build the four fixed comparison rows for an input record.
///
/// The max-heart-rate target is age-dependent (`220 - age`); the other three
/// targets are constants. The ST-depression target of 0 means any positive
/// value is `Danger`, matching the threshold arithmetic.
pub fn comparison_metrics(input: &ClinicalInput) -> Vec<MetricComparison> {
    let rows = [
        ("Blood Pressure", f64::from(input.resting_bp), "mm Hg", 200.0, 120.0),
        ("Cholesterol", f64::from(input.cholesterol), "mg/dl", 400.0, 200.0),
        (
            "Max Heart Rate",
            f64::from(input.max_heart_rate),
            "bpm",
            220.0,
            220.0 - f64::from(input.age),
        ),
        ("ST Depression", input.st_depression, "", 6.0, 0.0),
    ];

    rows.into_iter()
        .map(|(label, value, unit, max_scale, healthy)| MetricComparison {
            label,
            value,
            unit,
            max_scale,
            healthy,
            status: status_for(value, healthy),
        })
        .collect()
}

/// Classify a value against its healthy target.
fn status_for(value: f64, healthy: f64) -> MetricStatus {
    if value > healthy * DANGER_FACTOR {
        MetricStatus::Danger
    } else if value > healthy * WARNING_FACTOR {
        MetricStatus::Warning
    } else {
        MetricStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};

    fn input() -> ClinicalInput {
        ClinicalInput {
            age: 50,
            sex: Sex::Male,
            chest_pain: ChestPainType::Asymptomatic,
            resting_bp: 120,
            cholesterol: 200,
            fasting_bs_high: false,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 170,
            exercise_angina: false,
            st_depression: 0.0,
            st_slope: StSlope::Upsloping,
            major_vessels: 0,
            thalassemia: Thalassemia::Normal,
        }
    }

    #[test]
    fn four_fixed_rows_with_documented_scales() {
        let metrics = comparison_metrics(&input());
        assert_eq!(metrics.len(), 4);
        assert_eq!(metrics[0].label, "Blood Pressure");
        assert_eq!(metrics[0].max_scale, 200.0);
        assert_eq!(metrics[1].max_scale, 400.0);
        assert_eq!(metrics[2].max_scale, 220.0);
        assert_eq!(metrics[3].max_scale, 6.0);
    }

    #[test]
    fn heart_rate_target_tracks_age() {
        let mut i = input();
        i.age = 40;
        assert_eq!(comparison_metrics(&i)[2].healthy, 180.0);
        i.age = 70;
        assert_eq!(comparison_metrics(&i)[2].healthy, 150.0);
    }

    #[test]
    fn threshold_boundaries_are_strict() {
        // Exactly 1.2x / 1.5x the target stays in the lower band; the original
        // comparisons are strict greater-than.
        assert_eq!(status_for(144.0, 120.0), MetricStatus::Normal); // = 1.2x
        assert_eq!(status_for(144.1, 120.0), MetricStatus::Warning);
        assert_eq!(status_for(180.0, 120.0), MetricStatus::Warning); // = 1.5x
        assert_eq!(status_for(180.1, 120.0), MetricStatus::Danger);
    }

    #[test]
    fn zero_target_makes_any_positive_value_danger() {
        let mut i = input();
        i.st_depression = 0.1;
        assert_eq!(comparison_metrics(&i)[3].status, MetricStatus::Danger);
        i.st_depression = 0.0;
        assert_eq!(comparison_metrics(&i)[3].status, MetricStatus::Normal);
    }
}
