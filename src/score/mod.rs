//! The heuristic scoring core.
//!
//! A weighted-sum rule table maps a `ClinicalInput` to a raw score, which is
//! normalized to a 0-99 percentage and classified into a tier. Every function
//! here is a pure function of its arguments: no stored state, no I/O, no
//! error paths. Callers wanting stricter input handling run
//! `domain::validate` first (the CLI and TUI both do).

use crate::domain::{
    ChestPainType, ClinicalInput, RestingEcg, RiskAssessment, RiskTier, Sex, StSlope, Thalassemia,
};

pub mod recommend;

pub use recommend::recommendations_for;

/// Designed maximum attainable raw score (sum of all bucket maxima).
///
/// This is a nominal maximum, not a hard one: an unclamped vessel count above
/// 3 can push the raw sum past it, which is why `score` clamps at 99.
pub const MAX_RAW_SCORE: u32 = 132;

/// Tier boundary: percentages below this are `Low`.
pub const LOW_BOUND: u32 = 40;

/// Tier boundary: percentages below this (and >= `LOW_BOUND`) are `Medium`.
pub const MEDIUM_BOUND: u32 = 70;

/// Compute the unnormalized weighted sum of all rule contributions.
pub fn raw_score(input: &ClinicalInput) -> u32 {
    age_points(input.age)
        + sex_points(input.sex)
        + chest_pain_points(input.chest_pain)
        + resting_bp_points(input.resting_bp)
        + cholesterol_points(input.cholesterol)
        + if input.fasting_bs_high { 5 } else { 0 }
        + resting_ecg_points(input.resting_ecg)
        + heart_rate_points(input.age, input.max_heart_rate)
        + if input.exercise_angina { 8 } else { 0 }
        + st_depression_points(input.st_depression)
        + st_slope_points(input.st_slope)
        + input.major_vessels * 4
        + thalassemia_points(input.thalassemia)
}

/// Normalize the raw score to a 0-99 percentage.
///
/// The ceiling clamp is hard (raw sums above `MAX_RAW_SCORE` still yield 99);
/// no floor clamp is needed since every contribution is non-negative.
pub fn score(input: &ClinicalInput) -> u32 {
    let raw = raw_score(input);
    let pct = (f64::from(raw) / f64::from(MAX_RAW_SCORE) * 100.0).round() as u32;
    pct.min(99)
}

/// Classify a percentage into a tier.
///
/// Boundaries are inclusive-exclusive: 40 and 70 belong to the higher tier.
pub fn classify(percentage: u32) -> RiskTier {
    if percentage < LOW_BOUND {
        RiskTier::Low
    } else if percentage < MEDIUM_BOUND {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Score, classify, and look up recommendations in one call.
pub fn assess(input: &ClinicalInput) -> RiskAssessment {
    let percentage = score(input);
    let tier = classify(percentage);
    RiskAssessment {
        percentage,
        tier,
        recommendations: recommendations_for(tier),
    }
}

/// Age contribution (0-20 points).
fn age_points(age: u32) -> u32 {
    if age > 70 {
        20
    } else if age > 60 {
        15
    } else if age > 50 {
        10
    } else if age > 40 {
        5
    } else {
        0
    }
}

/// Sex contribution (5-10 points).
fn sex_points(sex: Sex) -> u32 {
    match sex {
        Sex::Male => 10,
        Sex::Female => 5,
    }
}

/// Chest pain contribution (4-15 points).
///
/// This mapping is intentionally non-monotonic: asymptomatic presentation
/// scores lowest of the four variants. Preserve the exact bucket values.
fn chest_pain_points(cp: ChestPainType) -> u32 {
    match cp {
        ChestPainType::Asymptomatic => 4,
        ChestPainType::TypicalAngina => 8,
        ChestPainType::AtypicalAngina => 12,
        ChestPainType::NonAnginal => 15,
    }
}

/// Resting blood pressure contribution (0-10 points).
fn resting_bp_points(bp: u32) -> u32 {
    if bp > 160 {
        10
    } else if bp > 140 {
        7
    } else if bp > 130 {
        4
    } else {
        0
    }
}

/// Cholesterol contribution (2-10 points). Never zero: normal or low
/// cholesterol still contributes the 2-point floor.
fn cholesterol_points(chol: u32) -> u32 {
    if chol >= 280 {
        10
    } else if chol >= 240 {
        7
    } else if chol >= 200 {
        4
    } else {
        2
    }
}

/// Resting ECG contribution (0-10 points).
fn resting_ecg_points(ecg: RestingEcg) -> u32 {
    match ecg {
        RestingEcg::LvHypertrophy => 10,
        RestingEcg::SttAbnormality => 6,
        RestingEcg::Normal => 0,
    }
}

/// Heart rate response contribution (0-8 points).
///
/// Buckets the achieved rate as a percentage of the age-expected maximum
/// (`220 - age`). For age >= 220 the expected maximum is zero or negative;
/// the f64 arithmetic keeps the function total (infinite percentage falls in
/// the 0-point bucket, negative percentage in the 8-point bucket) but the
/// result is meaningless. Left unguarded here on purpose; `domain::validate`
/// rejects such ages at the boundary.
pub fn heart_rate_points(age: u32, max_heart_rate: u32) -> u32 {
    let expected = 220.0 - f64::from(age);
    let pct = f64::from(max_heart_rate) / expected * 100.0;
    if pct < 50.0 {
        8
    } else if pct < 60.0 {
        6
    } else if pct < 70.0 {
        4
    } else if pct < 80.0 {
        2
    } else {
        0
    }
}

/// ST depression (oldpeak) contribution (0-8 points).
fn st_depression_points(oldpeak: f64) -> u32 {
    if oldpeak > 3.0 {
        8
    } else if oldpeak > 2.0 {
        6
    } else if oldpeak > 1.0 {
        4
    } else if oldpeak > 0.0 {
        2
    } else {
        0
    }
}

/// ST slope contribution (0-6 points).
fn st_slope_points(slope: StSlope) -> u32 {
    match slope {
        StSlope::Downsloping => 6,
        StSlope::Flat => 3,
        StSlope::Upsloping => 0,
    }
}

/// Thalassemia contribution (0-10 points).
fn thalassemia_points(thal: Thalassemia) -> u32 {
    match thal {
        Thalassemia::ReversibleDefect => 10,
        Thalassemia::FixedDefect => 6,
        Thalassemia::Unset | Thalassemia::Normal => 0,
    }
}
