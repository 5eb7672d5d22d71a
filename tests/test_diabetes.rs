mod common;

use common::*;
use dermascan::diabetes::FEATURE_NAMES;
use dermascan::{DiabetesDiagnosis, DiabetesFeatures, DiabetesPredictor};
use std::sync::Arc;

const EXAMPLE: [&str; 8] = ["6", "148", "72", "35", "0", "33.6", "0.627", "50"];

fn build_predictor(scores: Vec<f32>) -> (DiabetesPredictor, Arc<FakeModel>) {
    let model = Arc::new(FakeModel::new("diabetes", scores));
    (DiabetesPredictor::new(model.clone()), model)
}

#[test]
fn test_example_row_parses() {
    let features = DiabetesFeatures::parse(&EXAMPLE).expect("parse failed");
    assert_eq!(
        features.values(),
        [6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0]
    );
}

#[test]
fn test_form_example_row_parses() {
    let fields = ["2", "120", "70", "30", "80", "25.0", "0.5", "30"];
    let features = DiabetesFeatures::parse(&fields).expect("parse failed");
    assert_eq!(
        features.values(),
        [2.0, 120.0, 70.0, 30.0, 80.0, 25.0, 0.5, 30.0]
    );

    let (predictor, model) = build_predictor(vec![1.0]);
    assert_eq!(predictor.predict(&features), Ok(DiabetesDiagnosis::Diabetic));
    assert_eq!(model.calls(), 1);
}

#[test]
fn test_surrounding_whitespace_is_accepted() {
    let mut fields = EXAMPLE.map(String::from);
    fields[1] = " 148 ".to_string();
    let features = DiabetesFeatures::parse(&fields).expect("parse failed");
    assert_eq!(features.values()[1], 148.0);
}

#[test]
fn test_non_numeric_field_is_rejected_before_model() {
    let (predictor, model) = build_predictor(vec![0.2, 0.8]);
    let mut fields = EXAMPLE;
    fields[1] = "abc";

    let result = predictor.assess(&fields);
    assert_eq!(
        result,
        Err(DermaError::InvalidFormInput { field: "Glucose" })
    );
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_empty_field_is_rejected() {
    let mut fields = EXAMPLE;
    fields[7] = "";
    assert_eq!(
        DiabetesFeatures::parse(&fields),
        Err(DermaError::InvalidFormInput {
            field: FEATURE_NAMES[7]
        })
    );
}

#[test]
fn test_probability_output_mapping() {
    let (predictor, model) = build_predictor(vec![0.2, 0.8]);
    assert_eq!(predictor.assess(&EXAMPLE), Ok(DiabetesDiagnosis::Diabetic));
    assert_eq!(model.calls(), 1);

    let (predictor, _) = build_predictor(vec![0.9, 0.1]);
    assert_eq!(predictor.assess(&EXAMPLE), Ok(DiabetesDiagnosis::NotDiabetic));
}

#[test]
fn test_single_score_output_mapping() {
    let (diabetic, _) = build_predictor(vec![1.0]);
    assert_eq!(diabetic.assess(&EXAMPLE), Ok(DiabetesDiagnosis::Diabetic));

    let (healthy, _) = build_predictor(vec![0.0]);
    assert_eq!(healthy.assess(&EXAMPLE), Ok(DiabetesDiagnosis::NotDiabetic));
}

#[test]
fn test_empty_output_is_unavailable() {
    let (predictor, _) = build_predictor(Vec::new());
    assert!(matches!(
        predictor.assess(&EXAMPLE),
        Err(DermaError::ClassificationUnavailable(_))
    ));
}

#[test]
fn test_artifacts_build_predictor() {
    let (artifacts, _, _, diabetes) =
        fake_artifacts(vec![0.3, 0.4, 0.3], peaked(10, 0, 0.9), vec![0.6, 0.4]);
    let result = artifacts.diabetes_predictor().assess(&EXAMPLE);
    assert_eq!(result, Ok(DiabetesDiagnosis::NotDiabetic));
    assert_eq!(diabetes.calls(), 1);
}
