use serde::{Deserialize, Serialize};
use stroke_data::{PatientRecord, SmokingStatus, YesNo};

use crate::risk::{Prediction, SeverityBand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub rationale: String,
    pub priority: String,
}

fn rec(action: &str, rationale: String, priority: &str) -> Recommendation {
    Recommendation {
        action: action.to_string(),
        rationale,
        priority: priority.to_string(),
    }
}

pub fn suggest_next_steps(record: &PatientRecord, prediction: &Prediction) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let pct = prediction.percentage;

    match prediction.severity() {
        SeverityBand::High => {
            out.push(rec(
                "consult_neurologist",
                format!("predicted stroke risk {pct:.2}%"),
                "high",
            ));
            out.push(rec(
                "schedule_follow_up",
                "follow up due to elevated risk".to_string(),
                "medium",
            ));
        }
        SeverityBand::Medium => {
            out.push(rec(
                "take_precautions",
                format!("moderate stroke risk {pct:.2}%"),
                "medium",
            ));
        }
        SeverityBand::Low => {
            out.push(rec(
                "routine_care",
                "no elevated risk detected".to_string(),
                "low",
            ));
        }
    }

    // Modifiable factors are worth mentioning once risk is no longer low.
    if prediction.severity() >= SeverityBand::Medium {
        if record.hypertension == YesNo::Yes {
            out.push(rec(
                "monitor_blood_pressure",
                "hypertension reported".to_string(),
                "medium",
            ));
        }
        if record.smoking_status == SmokingStatus::Smokes {
            out.push(rec(
                "smoking_cessation",
                "current smoker".to_string(),
                "medium",
            ));
        }
    }

    out
}
