//! Shared fixtures for the end-to-end scenarios

use std::path::PathBuf;

use stroke_ai::Predictor;
use stroke_data::{PatientForm, PatientRecord, ValidationErrors};
use stroke_model::{BundleError, ModelBundle};

pub fn shipped_model_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/stroke_model.json"))
}

pub fn shipped_predictor() -> Result<Predictor, BundleError> {
    Ok(Predictor::new(ModelBundle::load(shipped_model_path())?))
}

/// Shipped artifact as a JSON value, for tests that tamper with it.
pub fn shipped_artifact_json() -> serde_json::Value {
    let text = std::fs::read_to_string(shipped_model_path()).unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(serde_json::Value::Null)
}

/// Build a form from `(field, value)` pairs; unnamed fields stay empty.
pub fn form(pairs: &[(&str, &str)]) -> PatientForm {
    let mut form = PatientForm::default();
    for &(key, value) in pairs {
        let slot = match key {
            "gender" => &mut form.gender,
            "age" => &mut form.age,
            "hypertension" => &mut form.hypertension,
            "heart_disease" => &mut form.heart_disease,
            "ever_married" => &mut form.ever_married,
            "work_type" => &mut form.work_type,
            "residence_type" => &mut form.residence_type,
            "avg_glucose_level" => &mut form.avg_glucose_level,
            "bmi" => &mut form.bmi,
            "smoking_status" => &mut form.smoking_status,
            _ => continue,
        };
        *slot = value.to_string();
    }
    form
}

/// Male, 43, married, private sector, urban, glucose 106, BMI 29, never smoked.
pub fn reference_form() -> PatientForm {
    form(&[
        ("gender", "Male"),
        ("age", "43"),
        ("hypertension", "No"),
        ("heart_disease", "No"),
        ("ever_married", "Yes"),
        ("work_type", "Private"),
        ("residence_type", "Urban"),
        ("avg_glucose_level", "106"),
        ("bmi", "29"),
        ("smoking_status", "Never Smoked"),
    ])
}

pub fn reference_record() -> Result<PatientRecord, ValidationErrors> {
    reference_form().validate()
}
