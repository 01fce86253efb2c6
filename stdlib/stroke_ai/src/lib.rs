//! Stroke risk prediction on top of a loaded model artifact
//!
//! [`Predictor`] runs one patient record through the encoder and classifier,
//! [`SeverityBand`] and [`Diagnosis`] turn the resulting percentage into the
//! message shown to the user, and [`suggest_next_steps`] adds follow-up
//! recommendations.

pub mod assessment;
pub mod decision_support;
pub mod diagnosis;
pub mod predictor;
pub mod risk;

pub use assessment::{assess, Assessment};
pub use decision_support::{suggest_next_steps, Recommendation};
pub use diagnosis::{Diagnosis, StatusMessage, SUBMIT_PROMPT};
pub use predictor::{Model, PredictError, Predictor};
pub use risk::{
    MessageStyle, Prediction, ProbabilityDistribution, SeverityBand, HIGH_THRESHOLD,
    MEDIUM_THRESHOLD,
};
