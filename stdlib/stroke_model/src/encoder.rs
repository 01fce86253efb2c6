//! Categorical encoding and feature scaling
//!
//! The code tables and scaling constants are part of the model artifact rather
//! than literals in the code: a classifier is only meaningful together with the
//! exact encoding it was trained on, so both travel (and are versioned)
//! together. [`EncoderConfig::default`] holds the constants of the shipped
//! stroke model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stroke_data::{
    Category, Gender, PatientRecord, ResidenceType, SmokingStatus, WorkType, YesNo,
};
use thiserror::Error;

use crate::features::{FeatureName, FeatureVector, FEATURE_COUNT, FEATURE_ORDER};
use crate::metadata::ModelVersion;

/// Label -> integer code for one categorical control
pub type CodeTable = BTreeMap<String, i64>;

#[derive(Debug, Error, PartialEq)]
pub enum EncoderError {
    #[error("feature order {found:?} does not match the expected order {expected:?}")]
    FeatureOrder {
        expected: Vec<FeatureName>,
        found: Vec<FeatureName>,
    },
    #[error("invalid scaler for {feature}: {reason}")]
    InvalidScaler {
        feature: FeatureName,
        reason: String,
    },
    #[error("code table '{table}' has no code for '{label}'")]
    MissingCode { table: &'static str, label: String },
    #[error("code table '{table}' contains unknown label '{label}'")]
    UnknownLabel { table: &'static str, label: String },
    #[error("feature vector has {found} values, expected {expected}")]
    Shape { expected: usize, found: usize },
    #[error("feature {feature} is not finite ({value})")]
    NonFinite { feature: FeatureName, value: f64 },
}

/// Standardisation constants captured from the training data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: f64,
    pub std: f64,
}

impl Scaler {
    pub const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    pub fn normalize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std
    }

    fn check(&self, feature: FeatureName) -> Result<(), EncoderError> {
        if !self.mean.is_finite() {
            return Err(EncoderError::InvalidScaler {
                feature,
                reason: format!("mean {} is not finite", self.mean),
            });
        }
        if !self.std.is_finite() || self.std <= 0.0 {
            return Err(EncoderError::InvalidScaler {
                feature,
                reason: format!("std {} must be finite and positive", self.std),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scalers {
    pub age: Scaler,
    pub avg_glucose_level: Scaler,
    pub bmi: Scaler,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTables {
    pub gender: CodeTable,
    /// Shared by hypertension, heart disease and ever married
    pub yes_no: CodeTable,
    pub work_type: CodeTable,
    pub residence_type: CodeTable,
    pub smoking_status: CodeTable,
}

/// Versioned encoding of a [`PatientRecord`] into model features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    pub version: ModelVersion,
    pub feature_order: Vec<FeatureName>,
    pub scalers: Scalers,
    pub categories: CategoryTables,
}

fn table(entries: &[(&str, i64)]) -> CodeTable {
    entries
        .iter()
        .map(|(label, code)| (label.to_string(), *code))
        .collect()
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            version: ModelVersion::new(1, 0, 0),
            feature_order: FEATURE_ORDER.to_vec(),
            scalers: Scalers {
                age: Scaler::new(43.22661448140902, 22.61043402711303),
                avg_glucose_level: Scaler::new(106.14767710371795, 45.27912905705893),
                bmi: Scaler::new(28.90337865973328, 7.698534094073452),
            },
            categories: CategoryTables {
                gender: table(&[("Male", 1), ("Female", 0), ("Other", 2)]),
                yes_no: table(&[("Yes", 1), ("No", 0)]),
                work_type: table(&[
                    ("Government Job", 0),
                    ("Never Worked", 1),
                    ("Private", 2),
                    ("Self-employed", 3),
                    ("Children", 4),
                ]),
                residence_type: table(&[("Rural", 0), ("Urban", 1)]),
                smoking_status: table(&[
                    ("Formerly Smoked", 1),
                    ("Never Smoked", 2),
                    ("Smokes", 3),
                    ("Unknown", 0),
                ]),
            },
        }
    }
}

impl EncoderConfig {
    /// Check the configuration is usable with the closed form options.
    pub fn validate(&self) -> Result<(), EncoderError> {
        Encoder::new(self).map(|_| ())
    }
}

/// Code table resolved against the option order of `C`
#[derive(Debug, Clone)]
struct ResolvedCodes(Vec<f64>);

impl ResolvedCodes {
    fn resolve<C: Category>(name: &'static str, table: &CodeTable) -> Result<Self, EncoderError> {
        if let Some(label) = table.keys().find(|label| C::from_label(label).is_err()) {
            return Err(EncoderError::UnknownLabel {
                table: name,
                label: label.clone(),
            });
        }
        let mut codes = Vec::with_capacity(C::ALL.len());
        for option in C::ALL {
            let code = table
                .get(option.label())
                .ok_or_else(|| EncoderError::MissingCode {
                    table: name,
                    label: option.label().to_string(),
                })?;
            codes.push(*code as f64);
        }
        Ok(Self(codes))
    }

    fn code<C: Category>(&self, option: C) -> f64 {
        // Built from C::ALL, so every index is present.
        self.0[option.index()]
    }
}

/// Validated, ready-to-use encoder
#[derive(Debug, Clone)]
pub struct Encoder {
    config: EncoderConfig,
    gender: ResolvedCodes,
    yes_no: ResolvedCodes,
    work_type: ResolvedCodes,
    residence_type: ResolvedCodes,
    smoking_status: ResolvedCodes,
}

impl Encoder {
    pub fn new(config: &EncoderConfig) -> Result<Self, EncoderError> {
        if config.feature_order.as_slice() != FEATURE_ORDER.as_slice() {
            return Err(EncoderError::FeatureOrder {
                expected: FEATURE_ORDER.to_vec(),
                found: config.feature_order.clone(),
            });
        }
        config.scalers.age.check(FeatureName::Age)?;
        config
            .scalers
            .avg_glucose_level
            .check(FeatureName::AvgGlucoseLevel)?;
        config.scalers.bmi.check(FeatureName::Bmi)?;

        let tables = &config.categories;
        Ok(Self {
            gender: ResolvedCodes::resolve::<Gender>("gender", &tables.gender)?,
            yes_no: ResolvedCodes::resolve::<YesNo>("yes_no", &tables.yes_no)?,
            work_type: ResolvedCodes::resolve::<WorkType>("work_type", &tables.work_type)?,
            residence_type: ResolvedCodes::resolve::<ResidenceType>(
                "residence_type",
                &tables.residence_type,
            )?,
            smoking_status: ResolvedCodes::resolve::<SmokingStatus>(
                "smoking_status",
                &tables.smoking_status,
            )?,
            config: config.clone(),
        })
    }

    pub fn version(&self) -> &ModelVersion {
        &self.config.version
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one record in [`FEATURE_ORDER`].
    pub fn encode(&self, r: &PatientRecord) -> FeatureVector {
        let s = &self.config.scalers;
        let values: [f64; FEATURE_COUNT] = [
            self.gender.code(r.gender),
            s.age.normalize(r.age.as_f64()),
            self.yes_no.code(r.hypertension),
            self.yes_no.code(r.heart_disease),
            self.yes_no.code(r.ever_married),
            self.work_type.code(r.work_type),
            self.residence_type.code(r.residence_type),
            s.avg_glucose_level.normalize(r.avg_glucose_level.as_f64()),
            s.bmi.normalize(r.bmi.as_f64()),
            self.smoking_status.code(r.smoking_status),
        ];
        FeatureVector::from_trusted(values)
    }
}
