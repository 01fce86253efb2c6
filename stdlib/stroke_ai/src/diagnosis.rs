//! What the result panel shows before and after a submission

use serde::Serialize;

use crate::risk::{MessageStyle, Prediction, ProbabilityDistribution, SeverityBand};

pub const SUBMIT_PROMPT: &str = "Please press 'Stroke Test Result' button for prediction!!";

/// Result panel state.
///
/// `NotSubmitted` is an explicit state of its own: a prediction of 0% after a
/// submission is still an assessment, not a missing one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Diagnosis {
    #[default]
    NotSubmitted,
    Assessed(Prediction),
}

/// Text and styling of the status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub style: MessageStyle,
    pub text: String,
}

impl Diagnosis {
    pub fn severity(&self) -> Option<SeverityBand> {
        match self {
            Self::NotSubmitted => None,
            Self::Assessed(p) => Some(p.severity()),
        }
    }

    /// The distribution is only shown once something was assessed.
    pub fn distribution(&self) -> Option<ProbabilityDistribution> {
        match self {
            Self::NotSubmitted => None,
            Self::Assessed(p) => Some(p.distribution),
        }
    }

    pub fn message(&self) -> StatusMessage {
        match self {
            Self::NotSubmitted => StatusMessage {
                style: MessageStyle::Info,
                text: SUBMIT_PROMPT.to_string(),
            },
            Self::Assessed(p) => {
                let band = p.severity();
                StatusMessage {
                    style: band.style(),
                    text: assessment_text(band, p.percentage),
                }
            }
        }
    }
}

fn assessment_text(band: SeverityBand, percentage: f64) -> String {
    let lead = format!("You have {percentage:.2}% chance of having a stroke.");
    match band {
        SeverityBand::High => format!("{lead} Please consult a Neurologist."),
        SeverityBand::Medium => format!("{lead} It is advised to take precautions."),
        SeverityBand::Low => lead,
    }
}
