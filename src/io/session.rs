//! Read/write session JSON files.
//!
//! Session JSON is the "portable" representation of one assessment:
//! - the full clinical input record
//! - the derived percentage and tier
//! - a creation timestamp
//!
//! Recommendations are not stored; they are re-derived from the tier on
//! load. The schema is defined by `domain::SessionFile`.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::domain::{ClinicalInput, RiskAssessment, SessionFile};
use crate::error::AppError;

/// Write a session JSON file.
pub fn write_session_json(
    path: &Path,
    input: &ClinicalInput,
    assessment: &RiskAssessment,
    created: DateTime<Local>,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create session JSON '{}': {e}", path.display()),
        )
    })?;

    let session = SessionFile {
        tool: "cardio".to_string(),
        created: created.to_rfc3339(),
        input: *input,
        percentage: assessment.percentage,
        tier: assessment.tier,
    };

    serde_json::to_writer_pretty(file, &session)
        .map_err(|e| AppError::new(2, format!("Failed to write session JSON: {e}")))?;

    Ok(())
}

/// Read a session JSON file.
pub fn read_session_json(path: &Path) -> Result<SessionFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open session JSON '{}': {e}", path.display()),
        )
    })?;
    let session: SessionFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid session JSON: {e}")))?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChestPainType, RestingEcg, RiskTier, Sex, StSlope, Thalassemia};
    use crate::score::assess;

    #[test]
    fn session_round_trips_input_and_derived_values() {
        let input = ClinicalInput {
            age: 58,
            sex: Sex::Female,
            chest_pain: ChestPainType::AtypicalAngina,
            resting_bp: 145,
            cholesterol: 245,
            fasting_bs_high: false,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 130,
            exercise_angina: false,
            st_depression: 2.5,
            st_slope: StSlope::Flat,
            major_vessels: 2,
            thalassemia: Thalassemia::ReversibleDefect,
        };
        let assessment = assess(&input);

        let path = std::env::temp_dir().join("cardio_session_roundtrip_test.json");
        write_session_json(&path, &input, &assessment, Local::now()).unwrap();
        let session = read_session_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(session.tool, "cardio");
        assert_eq!(session.input, input);
        assert_eq!(session.percentage, assessment.percentage);
        assert_eq!(session.tier, assessment.tier);
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&RiskTier::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = read_session_json(Path::new("/nonexistent/cardio_session.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
