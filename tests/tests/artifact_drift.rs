use stroke_model::{BundleError, ModelBundle};
use tests::{reference_record, shipped_artifact_json};

fn load(value: &serde_json::Value) -> Result<ModelBundle, BundleError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stroke_model.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    ModelBundle::load(&path)
}

#[test]
fn untouched_copy_loads() {
    let bundle = load(&shipped_artifact_json()).unwrap();
    assert_eq!(bundle.metadata().id, "stroke-logreg");
}

#[test]
fn encoder_version_drift_is_rejected() {
    let mut artifact = shipped_artifact_json();
    artifact["encoder"]["version"] = "2.0.0".into();
    let err = load(&artifact).unwrap_err();
    assert!(matches!(err, BundleError::EncoderVersionMismatch { .. }), "{err}");
}

#[test]
fn classifier_width_drift_is_rejected() {
    let mut artifact = shipped_artifact_json();
    if let Some(coefs) = artifact["classifier"]["coefficients"].as_array_mut() {
        coefs.pop();
    }
    assert!(load(&artifact).is_err());
}

#[test]
fn incomplete_code_table_is_rejected_at_load() {
    let mut artifact = shipped_artifact_json();
    if let Some(table) = artifact["encoder"]["categories"]["smoking_status"].as_object_mut() {
        table.remove("Unknown");
    }
    let err = load(&artifact).unwrap_err();
    assert!(matches!(err, BundleError::Encoder(_)), "{err}");
}

#[test]
fn retrained_code_table_travels_with_the_model() {
    let mut artifact = shipped_artifact_json();
    artifact["encoder"]["categories"]["work_type"]["Private"] = 7.into();
    let bundle = load(&artifact).unwrap();
    let features = bundle.encode(&reference_record().unwrap());
    assert_eq!(features.as_slice()[5], 7.0);
}
