//! Synthetic cohort generation for exercising the scorer at scale.
//!
//! Profiles are sampled around age-correlated baselines with Gaussian noise,
//! so older synthetic patients skew toward higher blood pressure and
//! cholesterol and lower achieved heart rates. Deterministic for a fixed
//! seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use rayon::prelude::*;

use crate::domain::{ChestPainType, ClinicalInput, RestingEcg, RiskTier, Sex, StSlope, Thalassemia};
use crate::error::AppError;
use crate::score;

/// Cohort generation settings (derived from CLI flags plus defaults).
#[derive(Debug, Clone, Copy)]
pub struct CohortConfig {
    pub count: usize,
    pub seed: u64,
    /// Youngest sampled age (years).
    pub age_min: u32,
    /// Oldest sampled age (years), inclusive.
    pub age_max: u32,
}

/// Aggregate view of a scored cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortSummary {
    pub n: usize,
    /// Counts per tier in `[Low, Medium, High]` order.
    pub tier_counts: [usize; 3],
    pub mean_pct: f64,
    pub min_pct: u32,
    pub max_pct: u32,
}

/// Generate `config.count` plausible clinical input records.
pub fn generate_cohort(config: &CohortConfig) -> Result<Vec<ClinicalInput>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Cohort count must be > 0."));
    }
    if config.age_min == 0 || config.age_max >= 120 || config.age_max < config.age_min {
        return Err(AppError::new(
            2,
            format!(
                "Invalid cohort age range {}-{} (must be within 1-119).",
                config.age_min, config.age_max
            ),
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let unit_normal =
        Normal::new(0.0, 1.0).map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut out = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        out.push(sample_patient(&mut rng, &unit_normal, config));
    }
    Ok(out)
}

/// Score a cohort (in parallel) and summarize tiers and percentages.
pub fn summarize(inputs: &[ClinicalInput]) -> CohortSummary {
    let percentages: Vec<u32> = inputs.par_iter().map(score::score).collect();

    let mut tier_counts = [0usize; 3];
    let mut sum = 0u64;
    let mut min_pct = u32::MAX;
    let mut max_pct = 0u32;

    for &pct in &percentages {
        match score::classify(pct) {
            RiskTier::Low => tier_counts[0] += 1,
            RiskTier::Medium => tier_counts[1] += 1,
            RiskTier::High => tier_counts[2] += 1,
        }
        sum += u64::from(pct);
        min_pct = min_pct.min(pct);
        max_pct = max_pct.max(pct);
    }

    let n = percentages.len();
    CohortSummary {
        n,
        tier_counts,
        mean_pct: if n == 0 { 0.0 } else { sum as f64 / n as f64 },
        min_pct: if n == 0 { 0 } else { min_pct },
        max_pct,
    }
}

fn sample_patient(rng: &mut StdRng, unit_normal: &Normal<f64>, config: &CohortConfig) -> ClinicalInput {
    let age = rng.gen_range(config.age_min..=config.age_max);
    let age_f = f64::from(age);

    // Baselines drift with age; noise keeps individual profiles varied.
    let resting_bp = (112.0 + 0.55 * (age_f - 30.0) + 12.0 * unit_normal.sample(rng))
        .round()
        .clamp(85.0, 230.0) as u32;
    let cholesterol = (185.0 + 0.9 * (age_f - 30.0) + 32.0 * unit_normal.sample(rng))
        .round()
        .clamp(120.0, 420.0) as u32;

    // Achieved rate as a fraction of the age-expected maximum.
    let hr_fraction = rng.gen_range(0.55..1.0);
    let max_heart_rate = ((220.0 - age_f) * hr_fraction).round().max(60.0) as u32;

    ClinicalInput {
        age,
        sex: if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female },
        chest_pain: weighted_chest_pain(rng),
        resting_bp,
        cholesterol,
        fasting_bs_high: rng.gen_bool(0.2),
        resting_ecg: weighted_ecg(rng),
        max_heart_rate,
        exercise_angina: rng.gen_bool(0.25),
        st_depression: (rng.gen_range(0.0..4.0_f64) * 10.0).round() / 10.0,
        st_slope: weighted_slope(rng),
        major_vessels: rng.gen_range(0..=3),
        thalassemia: weighted_thalassemia(rng),
    }
}

fn weighted_chest_pain(rng: &mut StdRng) -> ChestPainType {
    match rng.gen_range(0..100) {
        0..=44 => ChestPainType::Asymptomatic,
        45..=64 => ChestPainType::AtypicalAngina,
        65..=84 => ChestPainType::NonAnginal,
        _ => ChestPainType::TypicalAngina,
    }
}

fn weighted_ecg(rng: &mut StdRng) -> RestingEcg {
    match rng.gen_range(0..100) {
        0..=54 => RestingEcg::Normal,
        55..=79 => RestingEcg::SttAbnormality,
        _ => RestingEcg::LvHypertrophy,
    }
}

fn weighted_slope(rng: &mut StdRng) -> StSlope {
    match rng.gen_range(0..100) {
        0..=49 => StSlope::Upsloping,
        50..=84 => StSlope::Flat,
        _ => StSlope::Downsloping,
    }
}

fn weighted_thalassemia(rng: &mut StdRng) -> Thalassemia {
    match rng.gen_range(0..100) {
        0..=9 => Thalassemia::Unset,
        10..=59 => Thalassemia::Normal,
        60..=79 => Thalassemia::FixedDefect,
        _ => Thalassemia::ReversibleDefect,
    }
}
