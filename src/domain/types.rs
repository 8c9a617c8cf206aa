//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during assessment
//! - exported to session JSON
//! - reloaded later to re-render a report

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Patient sex as recorded on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Human-readable label for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Chest pain presentation, four variants.
///
/// The scoring contribution of these variants is intentionally non-monotonic
/// (asymptomatic scores lowest); see `score::chest_pain_points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChestPainType {
    Asymptomatic,
    AtypicalAngina,
    NonAnginal,
    TypicalAngina,
}

impl ChestPainType {
    pub fn display_name(self) -> &'static str {
        match self {
            ChestPainType::Asymptomatic => "Asymptomatic",
            ChestPainType::AtypicalAngina => "Atypical Angina",
            ChestPainType::NonAnginal => "Non-Anginal Pain",
            ChestPainType::TypicalAngina => "Typical Angina",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ChestPainType::Asymptomatic => ChestPainType::AtypicalAngina,
            ChestPainType::AtypicalAngina => ChestPainType::NonAnginal,
            ChestPainType::NonAnginal => ChestPainType::TypicalAngina,
            ChestPainType::TypicalAngina => ChestPainType::Asymptomatic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ChestPainType::Asymptomatic => ChestPainType::TypicalAngina,
            ChestPainType::AtypicalAngina => ChestPainType::Asymptomatic,
            ChestPainType::NonAnginal => ChestPainType::AtypicalAngina,
            ChestPainType::TypicalAngina => ChestPainType::NonAnginal,
        }
    }
}

/// Resting electrocardiogram result, three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RestingEcg {
    Normal,
    SttAbnormality,
    LvHypertrophy,
}

impl RestingEcg {
    pub fn display_name(self) -> &'static str {
        match self {
            RestingEcg::Normal => "Normal",
            RestingEcg::SttAbnormality => "ST-T Wave Abnormality",
            RestingEcg::LvHypertrophy => "LV Hypertrophy",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RestingEcg::Normal => RestingEcg::SttAbnormality,
            RestingEcg::SttAbnormality => RestingEcg::LvHypertrophy,
            RestingEcg::LvHypertrophy => RestingEcg::Normal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RestingEcg::Normal => RestingEcg::LvHypertrophy,
            RestingEcg::SttAbnormality => RestingEcg::Normal,
            RestingEcg::LvHypertrophy => RestingEcg::SttAbnormality,
        }
    }
}

/// Slope of the peak-exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    pub fn display_name(self) -> &'static str {
        match self {
            StSlope::Upsloping => "Upsloping",
            StSlope::Flat => "Flat",
            StSlope::Downsloping => "Downsloping",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StSlope::Upsloping => StSlope::Flat,
            StSlope::Flat => StSlope::Downsloping,
            StSlope::Downsloping => StSlope::Upsloping,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StSlope::Upsloping => StSlope::Downsloping,
            StSlope::Flat => StSlope::Upsloping,
            StSlope::Downsloping => StSlope::Flat,
        }
    }
}

/// Thalassemia test result, including "unset" when the test was not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Thalassemia {
    Unset,
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl Thalassemia {
    pub fn display_name(self) -> &'static str {
        match self {
            Thalassemia::Unset => "Unset",
            Thalassemia::Normal => "Normal",
            Thalassemia::FixedDefect => "Fixed Defect",
            Thalassemia::ReversibleDefect => "Reversible Defect",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Thalassemia::Unset => Thalassemia::Normal,
            Thalassemia::Normal => Thalassemia::FixedDefect,
            Thalassemia::FixedDefect => Thalassemia::ReversibleDefect,
            Thalassemia::ReversibleDefect => Thalassemia::Unset,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Thalassemia::Unset => Thalassemia::ReversibleDefect,
            Thalassemia::Normal => Thalassemia::Unset,
            Thalassemia::FixedDefect => Thalassemia::Normal,
            Thalassemia::ReversibleDefect => Thalassemia::FixedDefect,
        }
    }
}

/// The fixed set of clinical fields collected before scoring.
///
/// The scorer takes this record as an explicit parameter on every call; there
/// is no module-level form state anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    /// Age in years.
    pub age: u32,
    pub sex: Sex,
    pub chest_pain: ChestPainType,
    /// Resting blood pressure (mm Hg).
    pub resting_bp: u32,
    /// Serum cholesterol (mg/dl).
    pub cholesterol: u32,
    /// Fasting blood sugar > 120 mg/dl.
    pub fasting_bs_high: bool,
    pub resting_ecg: RestingEcg,
    /// Maximum heart rate achieved (bpm).
    pub max_heart_rate: u32,
    pub exercise_angina: bool,
    /// ST depression induced by exercise relative to rest (oldpeak).
    pub st_depression: f64,
    pub st_slope: StSlope,
    /// Number of major vessels colored by fluoroscopy (0-3 nominal).
    pub major_vessels: u32,
    pub thalassemia: Thalassemia,
}

/// Coarse risk classification derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Human-readable label for terminal output and reports.
    pub fn display_name(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }
}

/// A single titled recommendation shown for a tier.
///
/// Entries live in static per-tier tables (`score::recommend`); the display
/// order within a tier is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationEntry {
    pub title: &'static str,
    pub desc: &'static str,
}

/// Everything derived from one scoring call.
///
/// Recomputed on demand and never stored; re-deriving from the same input
/// always yields the same assessment.
#[derive(Debug, Clone, Copy)]
pub struct RiskAssessment {
    /// Normalized score, 0-99.
    pub percentage: u32,
    pub tier: RiskTier,
    /// Tier-specific recommendations in display order.
    pub recommendations: &'static [RecommendationEntry],
}

/// A saved session file (JSON).
///
/// Stores the input record plus the derived score so a report can be
/// re-rendered later. Recommendations are not stored: they are re-derived
/// from the tier on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub tool: String,
    /// RFC 3339 timestamp of when the session was saved.
    pub created: String,
    pub input: ClinicalInput,
    pub percentage: u32,
    pub tier: RiskTier,
}

/// Validate a clinical input record at the presentation boundary.
///
/// The scoring core itself is permissive and total; this check runs ahead of
/// it so malformed CLI values surface as errors instead of degraded scores.
pub fn validate(input: &ClinicalInput) -> Result<(), AppError> {
    if input.age == 0 || input.age >= 120 {
        return Err(AppError::new(
            2,
            format!("Age must be in 1-119 years (got {}).", input.age),
        ));
    }
    if input.resting_bp == 0 {
        return Err(AppError::new(2, "Resting blood pressure must be > 0 mm Hg."));
    }
    if input.cholesterol == 0 {
        return Err(AppError::new(2, "Cholesterol must be > 0 mg/dl."));
    }
    if input.max_heart_rate == 0 {
        return Err(AppError::new(2, "Max heart rate must be > 0 bpm."));
    }
    if !input.st_depression.is_finite() || input.st_depression < 0.0 {
        return Err(AppError::new(
            2,
            format!(
                "ST depression must be finite and >= 0 (got {}).",
                input.st_depression
            ),
        ));
    }
    if input.major_vessels > 3 {
        return Err(AppError::new(
            2,
            format!("Major vessel count must be 0-3 (got {}).", input.major_vessels),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> ClinicalInput {
        ClinicalInput {
            age: 52,
            sex: Sex::Female,
            chest_pain: ChestPainType::Asymptomatic,
            resting_bp: 128,
            cholesterol: 210,
            fasting_bs_high: false,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 155,
            exercise_angina: false,
            st_depression: 0.4,
            st_slope: StSlope::Upsloping,
            major_vessels: 0,
            thalassemia: Thalassemia::Normal,
        }
    }

    #[test]
    fn validate_accepts_baseline() {
        assert!(validate(&baseline()).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let mut input = baseline();
        input.age = 0;
        assert!(validate(&input).is_err());

        let mut input = baseline();
        input.age = 220;
        assert!(validate(&input).is_err());

        let mut input = baseline();
        input.major_vessels = 4;
        assert!(validate(&input).is_err());

        let mut input = baseline();
        input.st_depression = f64::NAN;
        assert!(validate(&input).is_err());

        let mut input = baseline();
        input.st_depression = -0.5;
        assert!(validate(&input).is_err());

        let mut input = baseline();
        input.max_heart_rate = 0;
        assert!(validate(&input).is_err());
    }

    #[test]
    fn enum_cycling_round_trips() {
        assert_eq!(ChestPainType::Asymptomatic.next().prev(), ChestPainType::Asymptomatic);
        assert_eq!(Thalassemia::ReversibleDefect.next(), Thalassemia::Unset);
        assert_eq!(StSlope::Upsloping.prev(), StSlope::Downsloping);
        assert_eq!(Sex::Male.next(), Sex::Female);
        assert_eq!(RestingEcg::LvHypertrophy.next(), RestingEcg::Normal);
    }

    #[test]
    fn tier_order_is_low_medium_high() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }
}
