//! Raw form submissions and their validation

use serde::{Deserialize, Serialize};

use crate::categories::{parse_yes_no, Category, Gender, ResidenceType, SmokingStatus, WorkType};
use crate::error::ValidationErrors;
use crate::measure::{Age, Bmi, GlucoseLevel};
use crate::record::PatientRecord;

/// Values exactly as posted by the browser, one string per control.
///
/// Missing keys deserialize to empty strings so that validation can report
/// them alongside every other problem instead of failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub gender: String,
    pub age: String,
    pub hypertension: String,
    pub heart_disease: String,
    pub ever_married: String,
    pub work_type: String,
    pub residence_type: String,
    pub avg_glucose_level: String,
    pub bmi: String,
    pub smoking_status: String,
}

impl PatientForm {
    /// Check every control and build the record, or report all bad fields.
    pub fn validate(&self) -> Result<PatientRecord, ValidationErrors> {
        let mut errs = ValidationErrors::default();

        let gender = errs.capture(Gender::from_label(&self.gender));
        let age = errs.capture(Age::parse(&self.age));
        let hypertension = errs.capture(parse_yes_no("hypertension", &self.hypertension));
        let heart_disease = errs.capture(parse_yes_no("heart_disease", &self.heart_disease));
        let ever_married = errs.capture(parse_yes_no("ever_married", &self.ever_married));
        let work_type = errs.capture(WorkType::from_label(&self.work_type));
        let residence_type = errs.capture(ResidenceType::from_label(&self.residence_type));
        let avg_glucose_level = errs.capture(GlucoseLevel::parse(&self.avg_glucose_level));
        let bmi = errs.capture(Bmi::parse(&self.bmi));
        let smoking_status = errs.capture(SmokingStatus::from_label(&self.smoking_status));

        match (
            gender,
            age,
            hypertension,
            heart_disease,
            ever_married,
            work_type,
            residence_type,
            avg_glucose_level,
            bmi,
            smoking_status,
        ) {
            (
                Some(gender),
                Some(age),
                Some(hypertension),
                Some(heart_disease),
                Some(ever_married),
                Some(work_type),
                Some(residence_type),
                Some(avg_glucose_level),
                Some(bmi),
                Some(smoking_status),
            ) => Ok(PatientRecord {
                gender,
                age,
                hypertension,
                heart_disease,
                ever_married,
                work_type,
                residence_type,
                avg_glucose_level,
                bmi,
                smoking_status,
            }),
            _ => Err(errs),
        }
    }
}

impl From<&PatientRecord> for PatientForm {
    fn from(r: &PatientRecord) -> Self {
        Self {
            gender: r.gender.label().to_string(),
            age: r.age.to_string(),
            hypertension: r.hypertension.label().to_string(),
            heart_disease: r.heart_disease.label().to_string(),
            ever_married: r.ever_married.label().to_string(),
            work_type: r.work_type.label().to_string(),
            residence_type: r.residence_type.label().to_string(),
            avg_glucose_level: r.avg_glucose_level.to_string(),
            bmi: r.bmi.to_string(),
            smoking_status: r.smoking_status.label().to_string(),
        }
    }
}
