//! Formatted output: the plain-text report, the terminal summary, and the
//! cohort summary.
//!
//! We keep formatting code in one place so:
//! - the scoring code stays clean and testable
//! - output changes are localized (important for golden/snapshot tests)

use chrono::{DateTime, Local};

use crate::data::cohort::CohortSummary;
use crate::domain::{ClinicalInput, RiskAssessment};

const RULE_HEAVY: &str = "===================================================";
const RULE_LIGHT: &str = "---------------------------------------------------";

/// Build the full plain-text report for one assessment.
///
/// The timestamp is injected rather than read inside so tests can pin it.
pub fn format_report(
    input: &ClinicalInput,
    assessment: &RiskAssessment,
    now: DateTime<Local>,
) -> String {
    let mut out = String::new();

    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str("                 CARDIO-RISK REPORT\n");
    out.push_str("           Heart Disease Risk Assessment\n");
    out.push_str(RULE_HEAVY);
    out.push_str("\n\n");

    out.push_str(&format!("Date: {}\n", now.format("%Y-%m-%d")));
    out.push_str(&format!("Time: {}\n\n", now.format("%H:%M:%S")));

    out.push_str("PATIENT INFORMATION:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!("Age: {} years\n", input.age));
    out.push_str(&format!("Sex: {}\n", input.sex.display_name()));
    out.push_str(&format!(
        "Chest Pain Type: {}\n\n",
        input.chest_pain.display_name()
    ));

    out.push_str("VITAL SIGNS:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!(
        "Resting Blood Pressure: {} mm Hg\n",
        input.resting_bp
    ));
    out.push_str(&format!("Serum Cholesterol: {} mg/dl\n", input.cholesterol));
    out.push_str(&format!(
        "Fasting Blood Sugar > 120: {}\n",
        yes_no(input.fasting_bs_high)
    ));
    out.push_str(&format!(
        "Maximum Heart Rate: {} bpm\n\n",
        input.max_heart_rate
    ));

    out.push_str("CARDIAC TESTS:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!("Resting ECG: {}\n", input.resting_ecg.display_name()));
    out.push_str(&format!(
        "Exercise Induced Angina: {}\n",
        yes_no(input.exercise_angina)
    ));
    out.push_str(&format!(
        "ST Depression (Oldpeak): {:.1}\n",
        input.st_depression
    ));
    out.push_str(&format!("ST Slope: {}\n", input.st_slope.display_name()));
    out.push_str(&format!("Major Vessels: {}\n", input.major_vessels));
    out.push_str(&format!(
        "Thalassemia: {}\n\n",
        input.thalassemia.display_name()
    ));

    out.push_str("RISK ASSESSMENT:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    out.push_str(&format!("Risk Score: {}%\n", assessment.percentage));
    out.push_str(&format!("Risk Level: {}\n\n", assessment.tier.display_name()));

    out.push_str("RECOMMENDATIONS:\n");
    out.push_str(RULE_LIGHT);
    out.push('\n');
    for (i, entry) in assessment.recommendations.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n\n", i + 1, entry.title, entry.desc));
    }

    out.push_str(RULE_HEAVY);
    out.push('\n');
    out.push_str("DISCLAIMER: This report provides an educational risk\n");
    out.push_str("assessment. It is NOT a substitute for professional\n");
    out.push_str("medical advice. Consult a qualified healthcare\n");
    out.push_str("provider regarding your heart health.\n");
    out.push_str(RULE_HEAVY);
    out.push('\n');

    out
}

/// Format the terminal summary printed by `cardio assess`.
pub fn format_summary(input: &ClinicalInput, assessment: &RiskAssessment) -> String {
    let mut out = String::new();

    out.push_str("=== cardio - Heart Disease Risk Assessment ===\n");
    out.push_str(&format!(
        "Patient: {} years, {} | {}\n",
        input.age,
        input.sex.display_name(),
        input.chest_pain.display_name()
    ));
    out.push_str(&format!(
        "Risk score: {}% ({})\n",
        assessment.percentage,
        assessment.tier.display_name()
    ));

    out.push_str("\nRecommendations:\n");
    for (i, entry) in assessment.recommendations.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n    {}\n", i + 1, entry.title, entry.desc));
    }

    out
}

/// Format the cohort simulation summary printed by `cardio cohort`.
pub fn format_cohort_summary(summary: &CohortSummary) -> String {
    let mut out = String::new();

    out.push_str("=== cardio - Synthetic Cohort Summary ===\n");
    out.push_str(&format!("Cohort size: {}\n", summary.n));
    out.push_str(&format!(
        "Score: mean={:.1}% | min={}% | max={}%\n",
        summary.mean_pct, summary.min_pct, summary.max_pct
    ));

    out.push_str("\nTier distribution:\n");
    let labels = ["Low", "Medium", "High"];
    for (label, &count) in labels.iter().zip(summary.tier_counts.iter()) {
        let share = if summary.n == 0 {
            0.0
        } else {
            count as f64 / summary.n as f64 * 100.0
        };
        out.push_str(&format!("{label:<8} {count:>6}  ({share:>5.1}%)\n"));
    }

    out
}

fn yes_no(v: bool) -> &'static str {
    if v { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::domain::{ChestPainType, RestingEcg, Sex, StSlope, Thalassemia};
    use crate::score::assess;

    fn input() -> ClinicalInput {
        ClinicalInput {
            age: 62,
            sex: Sex::Male,
            chest_pain: ChestPainType::TypicalAngina,
            resting_bp: 150,
            cholesterol: 260,
            fasting_bs_high: true,
            resting_ecg: RestingEcg::SttAbnormality,
            max_heart_rate: 120,
            exercise_angina: true,
            st_depression: 1.5,
            st_slope: StSlope::Flat,
            major_vessels: 1,
            thalassemia: Thalassemia::FixedDefect,
        }
    }

    #[test]
    fn report_contains_fields_tier_and_all_recommendations() {
        let input = input();
        let assessment = assess(&input);
        let now = Local.with_ymd_and_hms(2026, 8, 30, 10, 15, 0).unwrap();
        let report = format_report(&input, &assessment, now);

        assert!(report.contains("Date: 2026-08-30"));
        assert!(report.contains("Time: 10:15:00"));
        assert!(report.contains("Age: 62 years"));
        assert!(report.contains("Resting Blood Pressure: 150 mm Hg"));
        assert!(report.contains("ST Depression (Oldpeak): 1.5"));
        assert!(report.contains(&format!("Risk Score: {}%", assessment.percentage)));
        assert!(report.contains(assessment.tier.display_name()));

        let numbered = assessment.recommendations.len();
        assert!(report.contains(&format!("{numbered}. ")));
        assert!(!report.contains(&format!("{}. ", numbered + 1)));
    }

    #[test]
    fn summary_shows_score_and_recommendation_titles() {
        let input = input();
        let assessment = assess(&input);
        let summary = format_summary(&input, &assessment);

        assert!(summary.contains(&format!(
            "Risk score: {}% ({})",
            assessment.percentage,
            assessment.tier.display_name()
        )));
        for entry in assessment.recommendations {
            assert!(summary.contains(entry.title));
        }
    }

    #[test]
    fn cohort_summary_lists_all_tiers() {
        let summary = CohortSummary {
            n: 10,
            tier_counts: [6, 3, 1],
            mean_pct: 41.5,
            min_pct: 12,
            max_pct: 88,
        };
        let txt = format_cohort_summary(&summary);
        assert!(txt.contains("Cohort size: 10"));
        assert!(txt.contains("Low"));
        assert!(txt.contains("Medium"));
        assert!(txt.contains("High"));
        assert!(txt.contains("( 60.0%)"));
    }
}
