//! Model artifact on disk and its loaded, immutable form
//!
//! An artifact is a JSON document bundling the model metadata, the encoder
//! configuration the model was trained against and the fitted classifier:
//!
//! ```json
//! { "metadata": { ... }, "encoder": { ... }, "classifier": { "coefficients": [...], "intercept": -4.3 } }
//! ```

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use stroke_data::PatientRecord;
use thiserror::Error;

use crate::backend::{BackendError, ModelBackend, Tensor, INPUT_TENSOR, PROBABILITIES_TENSOR};
use crate::backends::logistic::{LogisticBackend, LogisticParams};
use crate::encoder::{Encoder, EncoderConfig, EncoderError};
use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::metadata::{ModelMetadata, ModelType, ModelVersion};

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid encoder configuration: {0}")]
    Encoder(#[from] EncoderError),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("model was trained against encoder {model} but the artifact ships encoder {encoder}")]
    EncoderVersionMismatch {
        model: ModelVersion,
        encoder: ModelVersion,
    },
    #[error("classifier expects {found} features, the encoder produces {expected}")]
    WidthMismatch { expected: usize, found: usize },
    #[error("unsupported model type {0:?}")]
    UnsupportedModelType(ModelType),
}

/// Serialized form of a model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,
    pub encoder: EncoderConfig,
    pub classifier: LogisticParams,
}

/// A loaded model: metadata, validated encoder and a ready backend.
///
/// Built once at start-up and only read afterwards.
pub struct ModelBundle {
    metadata: ModelMetadata,
    encoder: Encoder,
    backend: Box<dyn ModelBackend>,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("metadata", &self.metadata)
            .field("encoder_version", self.encoder.version())
            .field("backend", &self.backend.backend_name())
            .finish()
    }
}

impl ModelBundle {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        debug!("reading model artifact {}", path.display());
        let s = read_to_string(path).map_err(|source| BundleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&s)
    }

    pub fn from_json(s: &str) -> Result<Self, BundleError> {
        let artifact: ModelArtifact = serde_json::from_str(s)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, BundleError> {
        match &artifact.metadata.model_type {
            ModelType::LogisticRegression => {}
            other => return Err(BundleError::UnsupportedModelType(other.clone())),
        }
        let backend = Box::new(LogisticBackend::new(artifact.classifier));
        Self::with_backend(artifact.metadata, &artifact.encoder, backend)
    }

    /// Assemble a bundle around any backend, running every consistency check.
    pub fn with_backend(
        metadata: ModelMetadata,
        encoder: &EncoderConfig,
        mut backend: Box<dyn ModelBackend>,
    ) -> Result<Self, BundleError> {
        let encoder = Encoder::new(encoder)?;
        if &metadata.encoder_version != encoder.version() {
            return Err(BundleError::EncoderVersionMismatch {
                model: metadata.encoder_version.clone(),
                encoder: encoder.version().clone(),
            });
        }
        if backend.input_width() != FEATURE_COUNT {
            return Err(BundleError::WidthMismatch {
                expected: FEATURE_COUNT,
                found: backend.input_width(),
            });
        }
        backend.load_model(&metadata)?;
        info!(
            "loaded model '{}' v{} ({} backend, encoder v{})",
            metadata.id,
            metadata.version,
            backend.backend_name(),
            encoder.version()
        );
        Ok(Self {
            metadata,
            encoder,
            backend,
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    pub fn encode(&self, record: &PatientRecord) -> FeatureVector {
        self.encoder.encode(record)
    }

    /// Class probabilities `[no stroke, stroke]` for one feature vector.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], BackendError> {
        let mut inputs = HashMap::new();
        inputs.insert(
            INPUT_TENSOR.to_string(),
            Tensor::vector(INPUT_TENSOR, features.to_vec()),
        );
        let mut outputs = self.backend.infer(inputs)?;
        let probs = outputs.remove(PROBABILITIES_TENSOR).ok_or_else(|| {
            BackendError::InvalidOutput(format!("missing '{PROBABILITIES_TENSOR}' tensor"))
        })?;
        match probs.data.as_slice() {
            [no, yes] => Ok([*no, *yes]),
            other => Err(BackendError::InvalidOutput(format!(
                "expected 2 class probabilities, got {}",
                other.len()
            ))),
        }
    }
}

/// Artifact for the default encoder with the given classifier.
pub fn artifact_for(id: &str, classifier: LogisticParams) -> ModelArtifact {
    let encoder = EncoderConfig::default();
    let metadata = ModelMetadata::new(
        id.to_string(),
        "Heart Stroke Prediction".to_string(),
        ModelVersion::new(1, 0, 0),
        ModelType::LogisticRegression,
        encoder.version.clone(),
    )
    .with_input_shape(INPUT_TENSOR.into(), vec![FEATURE_COUNT])
    .with_output_shape(PROBABILITIES_TENSOR.into(), vec![2]);
    ModelArtifact {
        metadata,
        encoder,
        classifier,
    }
}
