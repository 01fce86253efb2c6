//! Everything shown for one submission, in a serializable form

use serde::Serialize;
use stroke_data::PatientRecord;
use stroke_model::FeatureVector;

use crate::decision_support::{suggest_next_steps, Recommendation};
use crate::diagnosis::Diagnosis;
use crate::predictor::{PredictError, Predictor};
use crate::risk::{MessageStyle, ProbabilityDistribution, SeverityBand};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub input: PatientRecord,
    pub features: FeatureVector,
    pub probabilities: ProbabilityDistribution,
    pub percentage: f64,
    pub severity: SeverityBand,
    pub style: MessageStyle,
    pub message: String,
    pub recommendations: Vec<Recommendation>,
}

/// Predict for `record` and derive the message and follow-up steps.
pub fn assess(predictor: &Predictor, record: &PatientRecord) -> Result<Assessment, PredictError> {
    let prediction = predictor.predict(record)?;
    let message = Diagnosis::Assessed(prediction).message();
    Ok(Assessment {
        input: *record,
        features: prediction.features,
        probabilities: prediction.distribution,
        percentage: prediction.percentage,
        severity: prediction.severity(),
        style: message.style,
        message: message.text,
        recommendations: suggest_next_steps(record, &prediction),
    })
}
