//! Shared assessment pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> score -> classify -> recommendations -> comparison metrics
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::chart::{comparison_metrics, MetricComparison};
use crate::domain::{validate, ClinicalInput, RiskAssessment};
use crate::error::AppError;
use crate::score;

/// All computed outputs for a single input record.
#[derive(Debug, Clone)]
pub struct AssessmentRun {
    pub input: ClinicalInput,
    pub assessment: RiskAssessment,
    pub metrics: Vec<MetricComparison>,
}

/// Validate the input, then derive the assessment and comparison metrics.
pub fn run_assessment(input: &ClinicalInput) -> Result<AssessmentRun, AppError> {
    validate(input)?;

    let assessment = score::assess(input);
    let metrics = comparison_metrics(input);

    Ok(AssessmentRun {
        input: *input,
        assessment,
        metrics,
    })
}
