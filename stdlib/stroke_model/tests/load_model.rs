use pretty_assertions::assert_eq;
use stroke_model::{
    artifact_for, BundleError, FeatureName, LogisticParams, ModelBundle, ModelVersion,
    FEATURE_COUNT,
};

fn write_artifact(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("model.json");
    std::fs::write(&path, json).expect("write");
    path
}

#[test]
fn load_model_from_json_file() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let artifact = artifact_for(
        "m",
        LogisticParams {
            coefficients: vec![0.2; FEATURE_COUNT],
            intercept: -1.0,
        },
    );
    let path = write_artifact(&tmp, &serde_json::to_string_pretty(&artifact).unwrap());

    let bundle = ModelBundle::load(&path).expect("load");
    assert_eq!(bundle.metadata().id, "m");
    assert_eq!(bundle.encoder().version(), &ModelVersion::new(1, 0, 0));
}

#[test]
fn shipped_artifact_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/stroke_model.json");
    let bundle = ModelBundle::load(path).expect("shipped artifact");
    assert_eq!(bundle.metadata().id, "stroke-logreg");
    let scalers = &bundle.encoder().config().scalers;
    assert_eq!(scalers.age.mean, 43.22661448140902);
    assert_eq!(scalers.bmi.std, 7.698534094073452);
}

#[test]
fn shipped_metadata_keeps_description_and_tags() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/stroke_model.json");
    let meta = ModelBundle::load(path).expect("shipped artifact").metadata().clone();
    assert!(meta.description.is_some());
    assert_eq!(meta.author, None);
    assert_eq!(meta.tags.get("positive_class").map(String::as_str), Some("stroke"));
    assert_eq!(meta.input_shapes.get("input"), Some(&vec![FEATURE_COUNT]));
}

#[test]
fn missing_file_is_a_read_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let err = ModelBundle::load(tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, BundleError::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn truncated_json_is_a_parse_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = write_artifact(&tmp, r#"{"metadata": {"id": "m""#);
    assert!(matches!(
        ModelBundle::load(&path).unwrap_err(),
        BundleError::Parse(_)
    ));
}

#[test]
fn table_without_a_label_fails_to_load() {
    let mut artifact = artifact_for(
        "m",
        LogisticParams {
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
        },
    );
    artifact.encoder.categories.gender.remove("Other");
    let json = serde_json::to_string(&artifact).unwrap();
    let err = ModelBundle::from_json(&json).unwrap_err();
    assert!(matches!(err, BundleError::Encoder(_)));
    assert!(err.to_string().contains("Other"));
}

#[test]
fn reordered_feature_names_in_json_fail_to_load() {
    let mut artifact = artifact_for(
        "m",
        LogisticParams {
            coefficients: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
        },
    );
    artifact.encoder.feature_order.retain(|f| *f != FeatureName::Gender);
    artifact.encoder.feature_order.push(FeatureName::Gender);
    let json = serde_json::to_string(&artifact).unwrap();
    assert!(matches!(
        ModelBundle::from_json(&json).unwrap_err(),
        BundleError::Encoder(_)
    ));
}
