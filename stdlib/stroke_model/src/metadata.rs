//! Model metadata and versioning structures

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Semantic version for models and encoders
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ModelVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(format!("Invalid version format: {s}"));
        }
        let major = parts[0]
            .parse()
            .map_err(|_| format!("Invalid major version: {}", parts[0]))?;
        let minor = parts[1]
            .parse()
            .map_err(|_| format!("Invalid minor version: {}", parts[1]))?;
        let patch = parts[2]
            .parse()
            .map_err(|_| format!("Invalid patch version: {}", parts[2]))?;
        Ok(Self::new(major, minor, patch))
    }
}

impl std::fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// Artifacts spell versions as "1.2.3" strings.
impl Serialize for ModelVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModelVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Model type/framework identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    LogisticRegression,
    Custom(String),
}

/// Comprehensive metadata for a model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Unique model identifier
    pub id: String,
    /// Model name
    pub name: String,
    /// Model version
    pub version: ModelVersion,
    /// Model type/framework
    pub model_type: ModelType,
    /// Version of the encoder configuration the model was trained against
    pub encoder_version: ModelVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Input tensor shapes (name -> shape)
    #[serde(default)]
    pub input_shapes: HashMap<String, Vec<usize>>,
    /// Output tensor shapes (name -> shape)
    #[serde(default)]
    pub output_shapes: HashMap<String, Vec<usize>>,
    /// Additional custom tags/labels
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl ModelMetadata {
    pub fn new(
        id: String,
        name: String,
        version: ModelVersion,
        model_type: ModelType,
        encoder_version: ModelVersion,
    ) -> Self {
        Self {
            id,
            name,
            version,
            model_type,
            encoder_version,
            description: None,
            author: None,
            created_at: chrono::Utc::now().to_rfc3339(),
            input_shapes: HashMap::new(),
            output_shapes: HashMap::new(),
            tags: HashMap::new(),
        }
    }

    pub fn with_input_shape(mut self, name: String, shape: Vec<usize>) -> Self {
        self.input_shapes.insert(name, shape);
        self
    }

    pub fn with_output_shape(mut self, name: String, shape: Vec<usize>) -> Self {
        self.output_shapes.insert(name, shape);
        self
    }
}
