//! The patient input record

use serde::{Deserialize, Serialize};

use crate::categories::{Category, Gender, ResidenceType, SmokingStatus, WorkType, YesNo};
use crate::measure::{Age, Bmi, GlucoseLevel};

/// Column headings of the input echo table, in display order.
pub const DISPLAY_COLUMNS: [&str; 10] = [
    "Gender",
    "Age",
    "Hypertension",
    "Heart Disease",
    "Ever Married",
    "Work Type",
    "Residence Type",
    "Avg Glucose Level",
    "BMI",
    "Smoking Status",
];

/// Ten risk factors of one patient, as selected on the form.
///
/// This is the only representation kept around: the numeric feature vector is
/// always derived from it, so the echoed values and the model input cannot
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientRecord {
    pub gender: Gender,
    pub age: Age,
    pub hypertension: YesNo,
    pub heart_disease: YesNo,
    pub ever_married: YesNo,
    pub work_type: WorkType,
    pub residence_type: ResidenceType,
    pub avg_glucose_level: GlucoseLevel,
    pub bmi: Bmi,
    pub smoking_status: SmokingStatus,
}

impl Default for PatientRecord {
    /// Initial state of the form controls: first option, slider minimum.
    fn default() -> Self {
        Self {
            gender: Gender::ALL[0],
            age: Age::default(),
            hypertension: YesNo::ALL[0],
            heart_disease: YesNo::ALL[0],
            ever_married: YesNo::ALL[0],
            work_type: WorkType::ALL[0],
            residence_type: ResidenceType::ALL[0],
            avg_glucose_level: GlucoseLevel::default(),
            bmi: Bmi::default(),
            smoking_status: SmokingStatus::ALL[0],
        }
    }
}

impl PatientRecord {
    /// Rows of the input echo table, `(column, value)`.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.gender.label().to_string(),
            self.age.to_string(),
            self.hypertension.label().to_string(),
            self.heart_disease.label().to_string(),
            self.ever_married.label().to_string(),
            self.work_type.label().to_string(),
            self.residence_type.label().to_string(),
            self.avg_glucose_level.to_string(),
            self.bmi.to_string(),
            self.smoking_status.label().to_string(),
        ];
        DISPLAY_COLUMNS.into_iter().zip(values).collect()
    }
}
