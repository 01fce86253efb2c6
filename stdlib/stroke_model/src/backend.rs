//! Pluggable backend trait and error types for model inference

use crate::metadata::ModelMetadata;
use std::collections::HashMap;
use thiserror::Error;

/// Name of the feature tensor handed to a backend
pub const INPUT_TENSOR: &str = "input";
/// Name of the class-probability tensor a classifier backend returns
pub const PROBABILITIES_TENSOR: &str = "probabilities";

/// Errors that can occur during backend operations
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Model loading failed: {0}")]
    LoadError(String),
    #[error("Inference failed: {0}")]
    InferenceError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}

/// Tensor data wrapper for inputs/outputs
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    pub name: String,
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl Tensor {
    pub fn new(name: String, shape: Vec<usize>, data: Vec<f64>) -> Result<Self, BackendError> {
        let expected_size: usize = shape.iter().product();
        if data.len() != expected_size {
            return Err(BackendError::InvalidInput(format!(
                "Tensor {} data length {} does not match shape {:?} (expected {})",
                name,
                data.len(),
                shape,
                expected_size
            )));
        }
        Ok(Self { name, shape, data })
    }

    /// A 1-D tensor over `data`.
    pub fn vector(name: &str, data: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            shape: vec![data.len()],
            data,
        }
    }
}

/// Pluggable backend trait for model inference
///
/// Implementations provide framework-specific model loading and inference.
/// After `load_model` a backend is only ever used through `&self`, so one
/// loaded instance can serve concurrent requests.
pub trait ModelBackend: Send + Sync {
    /// Prepare the backend for the model described by `metadata`
    fn load_model(&mut self, metadata: &ModelMetadata) -> Result<(), BackendError>;

    /// Run inference with the loaded model
    fn infer(
        &self,
        inputs: HashMap<String, Tensor>,
    ) -> Result<HashMap<String, Tensor>, BackendError>;

    /// Get backend name/identifier
    fn backend_name(&self) -> &str;

    /// Number of features the model consumes
    fn input_width(&self) -> usize;
}
