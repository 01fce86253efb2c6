//! Model artifact and feature pipeline for the stroke risk predictor
//!
//! Loads a versioned model artifact (metadata, encoder configuration and
//! classifier), encodes [`stroke_data::PatientRecord`]s into the ordered
//! feature vector the classifier expects, and runs inference through a
//! pluggable [`ModelBackend`].

pub mod backend;
pub mod backends;
pub mod bundle;
pub mod encoder;
pub mod features;
pub mod metadata;

pub use backend::{BackendError, ModelBackend, Tensor, INPUT_TENSOR, PROBABILITIES_TENSOR};
pub use backends::{LogisticBackend, LogisticParams};
pub use bundle::{artifact_for, BundleError, ModelArtifact, ModelBundle};
pub use encoder::{CategoryTables, CodeTable, Encoder, EncoderConfig, EncoderError, Scaler, Scalers};
pub use features::{FeatureName, FeatureVector, FEATURE_COUNT, FEATURE_ORDER};
pub use metadata::{ModelMetadata, ModelType, ModelVersion};
