//! Binary logistic-regression backend: p = sigmoid(W·x + b)

use crate::backend::{BackendError, ModelBackend, Tensor, INPUT_TENSOR, PROBABILITIES_TENSOR};
use crate::metadata::ModelMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fitted parameters as stored in the model artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Logistic function
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[derive(Debug, Clone)]
pub struct LogisticBackend {
    params: LogisticParams,
    loaded: bool,
}

impl LogisticBackend {
    pub fn new(params: LogisticParams) -> Self {
        Self {
            params,
            loaded: false,
        }
    }

    pub fn params(&self) -> &LogisticParams {
        &self.params
    }

    /// Decision value W·x + b
    pub fn logit(&self, x: &[f64]) -> f64 {
        x.iter()
            .zip(self.params.coefficients.iter())
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.params.intercept
    }
}

impl ModelBackend for LogisticBackend {
    fn load_model(&mut self, metadata: &ModelMetadata) -> Result<(), BackendError> {
        let width = self.params.coefficients.len();
        if width == 0 {
            return Err(BackendError::LoadError("no coefficients".into()));
        }
        if let Some((i, w)) = self
            .params
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite())
        {
            return Err(BackendError::LoadError(format!(
                "coefficient {i} is not finite ({w})"
            )));
        }
        if !self.params.intercept.is_finite() {
            return Err(BackendError::LoadError("intercept is not finite".into()));
        }
        if let Some(shape) = metadata.input_shapes.get(INPUT_TENSOR) {
            if shape.as_slice() != [width] {
                return Err(BackendError::LoadError(format!(
                    "model '{}' declares input shape {:?} but has {} coefficients",
                    metadata.id, shape, width
                )));
            }
        }
        self.loaded = true;
        Ok(())
    }

    fn infer(
        &self,
        mut inputs: HashMap<String, Tensor>,
    ) -> Result<HashMap<String, Tensor>, BackendError> {
        if !self.loaded {
            return Err(BackendError::InferenceError("Model not loaded".into()));
        }
        let input = inputs
            .remove(INPUT_TENSOR)
            .ok_or_else(|| BackendError::InvalidInput("missing 'input' tensor".into()))?;
        if input.shape.len() != 1 {
            return Err(BackendError::InvalidInput("input must be 1-D".into()));
        }
        if input.data.len() != self.params.coefficients.len() {
            return Err(BackendError::InvalidInput(format!(
                "input length {} != coefficients length {}",
                input.data.len(),
                self.params.coefficients.len()
            )));
        }
        if input.data.iter().any(|x| !x.is_finite()) {
            return Err(BackendError::InvalidInput(
                "input contains non-finite values".into(),
            ));
        }
        let p = sigmoid(self.logit(&input.data));
        let output = Tensor::new(PROBABILITIES_TENSOR.into(), vec![2], vec![1.0 - p, p])?;
        let mut out = HashMap::new();
        out.insert(PROBABILITIES_TENSOR.into(), output);
        Ok(out)
    }

    fn backend_name(&self) -> &str {
        "logistic"
    }

    fn input_width(&self) -> usize {
        self.params.coefficients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ModelType, ModelVersion};

    fn metadata() -> ModelMetadata {
        ModelMetadata::new(
            "id".into(),
            "name".into(),
            ModelVersion::new(1, 0, 0),
            ModelType::LogisticRegression,
            ModelVersion::new(1, 0, 0),
        )
    }

    fn loaded(coefficients: Vec<f64>, intercept: f64) -> LogisticBackend {
        let mut backend = LogisticBackend::new(LogisticParams {
            coefficients,
            intercept,
        });
        backend.load_model(&metadata()).unwrap();
        backend
    }

    fn run(backend: &LogisticBackend, x: Vec<f64>) -> Result<Vec<f64>, BackendError> {
        let mut inputs = HashMap::new();
        inputs.insert(INPUT_TENSOR.into(), Tensor::vector(INPUT_TENSOR, x));
        let mut out = backend.infer(inputs)?;
        Ok(out.remove(PROBABILITIES_TENSOR).unwrap().data)
    }

    #[test]
    fn logistic_infer() {
        let backend = loaded(vec![0.5, 1.5, -1.0], 0.25);
        // z = 0.5*2.0 + 1.5*(-1.0) + (-1.0)*0.5 + 0.25 = -0.75
        let p = run(&backend, vec![2.0, -1.0, 0.5]).unwrap();
        let expected = sigmoid(-0.75);
        assert!((p[1] - expected).abs() < 1e-12);
        assert!((p[0] + p[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_logit_is_even_odds() {
        let backend = loaded(vec![1.0, -1.0], 0.0);
        let p = run(&backend, vec![3.0, 3.0]).unwrap();
        assert_eq!(p, vec![0.5, 0.5]);
    }

    #[test]
    fn infer_before_load_fails() {
        let backend = LogisticBackend::new(LogisticParams {
            coefficients: vec![1.0],
            intercept: 0.0,
        });
        let err = run(&backend, vec![1.0]).unwrap_err();
        assert!(matches!(err, BackendError::InferenceError(_)));
    }

    #[test]
    fn wrong_width_is_invalid_input() {
        let backend = loaded(vec![1.0, 2.0, 3.0], 0.0);
        let err = run(&backend, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, BackendError::InvalidInput(_)));
    }

    #[test]
    fn load_checks_declared_input_shape() {
        let mut backend = LogisticBackend::new(LogisticParams {
            coefficients: vec![1.0; 3],
            intercept: 0.0,
        });
        let meta = metadata().with_input_shape(INPUT_TENSOR.into(), vec![10]);
        assert!(matches!(
            backend.load_model(&meta),
            Err(BackendError::LoadError(_))
        ));
    }

    #[test]
    fn load_rejects_nan_coefficient() {
        let mut backend = LogisticBackend::new(LogisticParams {
            coefficients: vec![1.0, f64::NAN],
            intercept: 0.0,
        });
        assert!(backend.load_model(&metadata()).is_err());
    }
}
