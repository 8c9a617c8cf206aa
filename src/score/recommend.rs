//! Static tier -> recommendation tables.
//!
//! Plain data, looked up by tier: exactly 5 entries for `Low`, 6 for
//! `Medium`, 7 for `High`. Order within a table is display order and fixed.

use crate::domain::{RecommendationEntry, RiskTier};

const LOW: &[RecommendationEntry] = &[
    RecommendationEntry {
        title: "Maintain a Healthy Diet",
        desc: "Continue eating plenty of fruits, vegetables, whole grains, and lean proteins. Limit saturated fats, trans fats, and sodium.",
    },
    RecommendationEntry {
        title: "Stay Active",
        desc: "Aim for at least 150 minutes of moderate aerobic activity per week. Regular exercise keeps your heart strong.",
    },
    RecommendationEntry {
        title: "Quality Sleep",
        desc: "Get 7-9 hours of quality sleep each night. Good sleep is essential for heart health.",
    },
    RecommendationEntry {
        title: "Stress Management",
        desc: "Practice stress-reduction techniques like meditation, yoga, or deep breathing exercises.",
    },
    RecommendationEntry {
        title: "Regular Checkups",
        desc: "Continue annual health checkups to monitor your cardiovascular health and catch any changes early.",
    },
];

const MEDIUM: &[RecommendationEntry] = &[
    RecommendationEntry {
        title: "Consult Your Doctor",
        desc: "Schedule an appointment with your healthcare provider to discuss your results and create a personalized prevention plan.",
    },
    RecommendationEntry {
        title: "Improve Your Diet",
        desc: "Adopt a heart-healthy diet like the Mediterranean or DASH diet. Reduce sodium intake to less than 2,300mg per day.",
    },
    RecommendationEntry {
        title: "Increase Physical Activity",
        desc: "Work up to 30 minutes of moderate exercise most days. Start slowly and gradually increase intensity.",
    },
    RecommendationEntry {
        title: "Weight Management",
        desc: "If overweight, losing even 5-10% of body weight can significantly reduce heart disease risk.",
    },
    RecommendationEntry {
        title: "Quit Smoking",
        desc: "If you smoke, quitting is the single best thing you can do for your heart. Seek support programs.",
    },
    RecommendationEntry {
        title: "Monitor Health Metrics",
        desc: "Regularly check blood pressure, cholesterol, and blood sugar. Take prescribed medications as directed.",
    },
];

const HIGH: &[RecommendationEntry] = &[
    RecommendationEntry {
        title: "URGENT: See a Cardiologist",
        desc: "Schedule an appointment with a cardiologist immediately. Your risk level requires professional medical evaluation and intervention.",
    },
    RecommendationEntry {
        title: "Medication Adherence",
        desc: "If prescribed medications for blood pressure, cholesterol, or diabetes, take them exactly as directed. Never skip doses.",
    },
    RecommendationEntry {
        title: "Strict Dietary Changes",
        desc: "Work with a nutritionist to create a strict heart-healthy meal plan. Eliminate trans fats, limit saturated fats to 5-6%, and reduce sodium significantly.",
    },
    RecommendationEntry {
        title: "Immediate Smoking Cessation",
        desc: "If you smoke, quit immediately. Ask your doctor about smoking cessation programs and medications.",
    },
    RecommendationEntry {
        title: "Supervised Exercise Program",
        desc: "Start a cardiac rehabilitation or supervised exercise program. Do not begin intense exercise without medical clearance.",
    },
    RecommendationEntry {
        title: "Frequent Monitoring",
        desc: "Monitor blood pressure daily, track symptoms, and have regular follow-ups with your healthcare team.",
    },
    RecommendationEntry {
        title: "Family Support",
        desc: "Inform family members about your risk level. Create an emergency plan and ensure they know warning signs of heart attack.",
    },
];

/// Look up the fixed recommendation list for a tier.
pub fn recommendations_for(tier: RiskTier) -> &'static [RecommendationEntry] {
    match tier {
        RiskTier::Low => LOW,
        RiskTier::Medium => MEDIUM,
        RiskTier::High => HIGH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths_are_fixed() {
        assert_eq!(recommendations_for(RiskTier::Low).len(), 5);
        assert_eq!(recommendations_for(RiskTier::Medium).len(), 6);
        assert_eq!(recommendations_for(RiskTier::High).len(), 7);
    }

    #[test]
    fn display_order_is_stable() {
        let low = recommendations_for(RiskTier::Low);
        assert_eq!(low[0].title, "Maintain a Healthy Diet");
        assert_eq!(low[4].title, "Regular Checkups");

        let medium = recommendations_for(RiskTier::Medium);
        assert_eq!(medium[0].title, "Consult Your Doctor");
        assert_eq!(medium[5].title, "Monitor Health Metrics");

        let high = recommendations_for(RiskTier::High);
        assert_eq!(high[0].title, "URGENT: See a Cardiologist");
        assert_eq!(high[6].title, "Family Support");
    }

    #[test]
    fn entries_are_non_empty() {
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            for entry in recommendations_for(tier) {
                assert!(!entry.title.is_empty());
                assert!(!entry.desc.is_empty());
            }
        }
    }
}
