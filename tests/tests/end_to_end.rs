use pretty_assertions::assert_eq;
use stroke_ai::{assess, Diagnosis, MessageStyle, SeverityBand, SUBMIT_PROMPT};
use stroke_data::DISPLAY_COLUMNS;
use tests::{form, reference_form, reference_record, shipped_predictor};

#[test]
fn reference_patient_feature_vector() {
    let predictor = shipped_predictor().unwrap();
    let features = predictor.encode(&reference_record().unwrap());
    let expected = [
        1.0, -0.010023, 0.0, 0.0, 1.0, 2.0, 1.0, -0.003261, 0.012551, 2.0,
    ];
    for (i, (got, want)) in features.as_slice().iter().zip(expected).enumerate() {
        assert!((got - want).abs() < 1e-5, "feature {i}: {got} != {want}");
    }
}

#[test]
fn reference_patient_end_to_end() {
    let predictor = shipped_predictor().unwrap();
    let record = reference_record().unwrap();
    let a = assess(&predictor, &record).unwrap();

    assert_eq!(a.severity, SeverityBand::Low);
    assert_eq!(a.style, MessageStyle::Success);
    assert!((a.percentage - 1.9123).abs() < 1e-3, "{}", a.percentage);
    assert_eq!(a.message, "You have 1.91% chance of having a stroke.");
    assert!((a.probabilities.no_stroke + a.probabilities.stroke - 1.0).abs() < 1e-12);
    assert_eq!(a.recommendations.len(), 1);
}

#[test]
fn echo_table_matches_the_submitted_values() {
    let rows = reference_record().unwrap().display_rows();
    let columns: Vec<&str> = rows.iter().map(|(c, _)| *c).collect();
    assert_eq!(columns, DISPLAY_COLUMNS.to_vec());
    let values: Vec<&str> = rows.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "Male", "43", "No", "No", "Yes", "Private", "Urban", "106", "29", "Never Smoked"
        ]
    );
}

#[test]
fn before_submission_only_the_prompt_is_shown() {
    let d = Diagnosis::default();
    assert_eq!(d.message().text, SUBMIT_PROMPT);
    assert_eq!(d.message().style, MessageStyle::Info);
    assert!(d.distribution().is_none());
}

#[test]
fn severity_rises_with_risk_factors() {
    let predictor = shipped_predictor().unwrap();
    let healthy = reference_record().unwrap();
    let mut sick = reference_form();
    sick.age = "85".into();
    sick.hypertension = "Yes".into();
    sick.heart_disease = "Yes".into();
    sick.avg_glucose_level = "250".into();
    let sick = sick.validate().unwrap();

    let low = predictor.predict(&healthy).unwrap();
    let high = predictor.predict(&sick).unwrap();
    assert!(high.percentage > low.percentage);
    assert!(high.severity() >= low.severity());
}

#[test]
fn incomplete_form_reports_every_missing_field() {
    let errors = form(&[("gender", "Female"), ("age", "30")])
        .validate()
        .unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "hypertension",
            "heart_disease",
            "ever_married",
            "work_type",
            "residence_type",
            "avg_glucose_level",
            "bmi",
            "smoking_status"
        ]
    );
}

#[test]
fn slider_bounds_are_enforced() {
    for (field, value) in [
        ("age", "0"),
        ("age", "121"),
        ("avg_glucose_level", "351"),
        ("bmi", "4"),
        ("bmi", "29.5"),
    ] {
        let mut pairs = vec![
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
        ];
        pairs.retain(|(k, _)| *k != field);
        pairs.push((field, value));
        let errors = form(&pairs).validate().unwrap_err();
        assert_eq!(errors.len(), 1, "{field}={value}");
        assert_eq!(errors.iter().next().unwrap().field, field);
    }
}
