//! Command-line parsing for the heart-disease risk calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{
    ChestPainType, ClinicalInput, RestingEcg, Sex, StSlope, Thalassemia,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cardio", version, about = "Heart disease risk calculator (heuristic rule table)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one clinical input record and print the assessment.
    Assess(AssessArgs),
    /// Re-render a report from a previously exported session JSON.
    Report(ReportArgs),
    /// Score a seeded synthetic cohort and print a tier summary.
    Cohort(CohortArgs),
    /// Launch the interactive TUI form.
    ///
    /// This uses the same underlying assessment pipeline as `cardio assess`,
    /// but renders results in a terminal UI using Ratatui.
    Tui,
}

/// Clinical input fields plus output options for `assess`.
#[derive(Debug, Parser, Clone)]
pub struct AssessArgs {
    /// Age in years.
    #[arg(long)]
    pub age: u32,

    /// Patient sex.
    #[arg(long, value_enum)]
    pub sex: Sex,

    /// Chest pain type.
    #[arg(long, value_enum, default_value = "asymptomatic")]
    pub chest_pain: ChestPainType,

    /// Resting blood pressure (mm Hg).
    #[arg(long)]
    pub resting_bp: u32,

    /// Serum cholesterol (mg/dl).
    #[arg(long)]
    pub cholesterol: u32,

    /// Fasting blood sugar > 120 mg/dl.
    #[arg(long)]
    pub fasting_bs_high: bool,

    /// Resting electrocardiogram result.
    #[arg(long, value_enum, default_value = "normal")]
    pub resting_ecg: RestingEcg,

    /// Maximum heart rate achieved (bpm).
    #[arg(long)]
    pub max_heart_rate: u32,

    /// Exercise-induced angina.
    #[arg(long)]
    pub exercise_angina: bool,

    /// ST depression induced by exercise relative to rest (oldpeak).
    #[arg(long, default_value_t = 0.0)]
    pub st_depression: f64,

    /// Slope of the peak-exercise ST segment.
    #[arg(long, value_enum, default_value = "upsloping")]
    pub st_slope: StSlope,

    /// Number of major vessels colored by fluoroscopy (0-3).
    #[arg(long, default_value_t = 0)]
    pub major_vessels: u32,

    /// Thalassemia test result.
    #[arg(long, value_enum, default_value = "unset")]
    pub thalassemia: Thalassemia,

    /// Suppress the comparison bars.
    #[arg(long)]
    pub no_chart: bool,

    /// Comparison bar width (cells).
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Export the plain-text report to a file.
    #[arg(long, value_name = "TXT")]
    pub export: Option<PathBuf>,

    /// Export the session (input + derived score) to JSON.
    #[arg(long = "export-session", value_name = "JSON")]
    pub export_session: Option<PathBuf>,
}

impl AssessArgs {
    /// Assemble the clinical input record from the parsed flags.
    pub fn to_input(&self) -> ClinicalInput {
        ClinicalInput {
            age: self.age,
            sex: self.sex,
            chest_pain: self.chest_pain,
            resting_bp: self.resting_bp,
            cholesterol: self.cholesterol,
            fasting_bs_high: self.fasting_bs_high,
            resting_ecg: self.resting_ecg,
            max_heart_rate: self.max_heart_rate,
            exercise_angina: self.exercise_angina,
            st_depression: self.st_depression,
            st_slope: self.st_slope,
            major_vessels: self.major_vessels,
            thalassemia: self.thalassemia,
        }
    }
}

/// Options for re-rendering a saved session.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Session JSON file produced by `cardio assess --export-session`.
    #[arg(long, value_name = "JSON")]
    pub session: PathBuf,

    /// Write the report to a file instead of stdout.
    #[arg(long, value_name = "TXT")]
    pub out: Option<PathBuf>,
}

/// Options for the synthetic cohort run.
#[derive(Debug, Parser)]
pub struct CohortArgs {
    /// Number of synthetic patients to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed for cohort generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Youngest sampled age (years).
    #[arg(long, default_value_t = 30)]
    pub age_min: u32,

    /// Oldest sampled age (years), inclusive.
    #[arg(long, default_value_t = 79)]
    pub age_max: u32,
}
