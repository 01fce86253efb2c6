//! Inference invocation: record -> features -> class probabilities

use std::sync::Arc;

use log::debug;
use stroke_data::PatientRecord;
use stroke_model::{
    BackendError, EncoderConfig, EncoderError, FeatureVector, ModelBundle, ModelMetadata,
};
use thiserror::Error;

use crate::risk::{Prediction, ProbabilityDistribution};

const PROBABILITY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid feature vector: {0}")]
    Features(#[from] EncoderError),
    #[error("model inference failed: {0}")]
    Backend(#[from] BackendError),
    #[error("model returned an invalid distribution: {0}")]
    InvalidOutput(String),
}

/// Minimal trait for prediction models
pub trait Model {
    fn name(&self) -> &str;
}

/// Shared handle on a loaded model; cloning is cheap.
#[derive(Debug, Clone)]
pub struct Predictor {
    bundle: Arc<ModelBundle>,
}

impl Model for Predictor {
    fn name(&self) -> &str {
        &self.bundle.metadata().name
    }
}

impl Predictor {
    pub fn new(bundle: ModelBundle) -> Self {
        Self {
            bundle: Arc::new(bundle),
        }
    }

    pub fn metadata(&self) -> &ModelMetadata {
        self.bundle.metadata()
    }

    pub fn encoder_config(&self) -> &EncoderConfig {
        self.bundle.encoder().config()
    }

    pub fn backend_name(&self) -> &str {
        self.bundle.backend_name()
    }

    pub fn encode(&self, record: &PatientRecord) -> FeatureVector {
        self.bundle.encode(record)
    }

    pub fn predict(&self, record: &PatientRecord) -> Result<Prediction, PredictError> {
        let features = self.encode(record);
        self.predict_features(features.as_slice())
    }

    /// Run the classifier on raw feature values, checking their shape first.
    pub fn predict_features(&self, values: &[f64]) -> Result<Prediction, PredictError> {
        let features = FeatureVector::from_slice(values)?;
        let [no_stroke, stroke] = self.bundle.predict_proba(&features)?;
        let distribution = check_distribution(no_stroke, stroke)?;
        let prediction = Prediction::new(features, distribution);
        debug!(
            "prediction {:.4}% ({})",
            prediction.percentage,
            prediction.severity()
        );
        Ok(prediction)
    }
}

fn check_distribution(no_stroke: f64, stroke: f64) -> Result<ProbabilityDistribution, PredictError> {
    for p in [no_stroke, stroke] {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(PredictError::InvalidOutput(format!(
                "probability {p} outside [0, 1]"
            )));
        }
    }
    if (no_stroke + stroke - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(PredictError::InvalidOutput(format!(
            "probabilities sum to {}",
            no_stroke + stroke
        )));
    }
    Ok(ProbabilityDistribution { no_stroke, stroke })
}
