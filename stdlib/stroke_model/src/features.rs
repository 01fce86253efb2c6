//! Ordered numeric feature vector consumed by the classifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encoder::EncoderError;

pub const FEATURE_COUNT: usize = 10;

/// Columns of the feature vector, in the order the classifier was fit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureName {
    Gender,
    Age,
    Hypertension,
    HeartDisease,
    EverMarried,
    WorkType,
    ResidenceType,
    AvgGlucoseLevel,
    Bmi,
    SmokingStatus,
}

pub const FEATURE_ORDER: [FeatureName; FEATURE_COUNT] = [
    FeatureName::Gender,
    FeatureName::Age,
    FeatureName::Hypertension,
    FeatureName::HeartDisease,
    FeatureName::EverMarried,
    FeatureName::WorkType,
    FeatureName::ResidenceType,
    FeatureName::AvgGlucoseLevel,
    FeatureName::Bmi,
    FeatureName::SmokingStatus,
];

impl FeatureName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heart_disease",
            Self::EverMarried => "ever_married",
            Self::WorkType => "work_type",
            Self::ResidenceType => "residence_type",
            Self::AvgGlucoseLevel => "avg_glucose_level",
            Self::Bmi => "bmi",
            Self::SmokingStatus => "smoking_status",
        }
    }

    /// Slot of this feature in a [`FeatureVector`].
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ten encoded values in [`FEATURE_ORDER`]; always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a vector from raw values, checking length and finiteness.
    pub fn from_slice(values: &[f64]) -> Result<Self, EncoderError> {
        let arr: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| EncoderError::Shape {
            expected: FEATURE_COUNT,
            found: values.len(),
        })?;
        Self::from_array(arr)
    }

    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Result<Self, EncoderError> {
        for (name, value) in FEATURE_ORDER.iter().zip(values.iter()) {
            if !value.is_finite() {
                return Err(EncoderError::NonFinite {
                    feature: *name,
                    value: *value,
                });
            }
        }
        Ok(Self(values))
    }

    /// For values produced by the encoder, which are finite by construction.
    pub(crate) fn from_trusted(values: [f64; FEATURE_COUNT]) -> Self {
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self(values)
    }

    pub fn get(&self, name: FeatureName) -> f64 {
        self.0[name.position()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureName, f64)> + '_ {
        FEATURE_ORDER.iter().copied().zip(self.0.iter().copied())
    }
}

impl<'de> Deserialize<'de> for FeatureVector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        Self::from_slice(&values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_feature_order() {
        for (i, name) in FEATURE_ORDER.iter().enumerate() {
            assert_eq!(name.position(), i);
        }
        assert_eq!(FeatureName::Bmi.as_str(), "bmi");
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = FeatureVector::from_slice(&[0.0; 9]).unwrap_err();
        assert!(matches!(
            err,
            EncoderError::Shape {
                expected: 10,
                found: 9
            }
        ));
    }

    #[test]
    fn from_slice_rejects_nan() {
        let mut values = [0.0; FEATURE_COUNT];
        values[7] = f64::NAN;
        let err = FeatureVector::from_slice(&values).unwrap_err();
        assert!(matches!(
            err,
            EncoderError::NonFinite {
                feature: FeatureName::AvgGlucoseLevel,
                ..
            }
        ));
    }

    #[test]
    fn serializes_as_plain_array() {
        let v = FeatureVector::from_array([1.0, 0.5, 0.0, 0.0, 1.0, 2.0, 1.0, 0.25, 0.0, 2.0])
            .unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,0.5,0.0,0.0,1.0,2.0,1.0,0.25,0.0,2.0]");
        let back: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
