mod common;

use common::*;
use dermascan::present::{
    self, INVALID_FORM_INPUT, NO_FOOD, NO_PRECAUTIONS, REFER_TO_DERMATOLOGIST,
    SCREENING_REQUIRED, Tone,
};
use dermascan::{DiabetesDiagnosis, Prediction, RecommendationTable};

fn prediction(label: &'static str, confidence: f32) -> Prediction {
    Prediction {
        label,
        index: 0,
        confidence,
    }
}

#[test]
fn test_identified_report() {
    let report = present::outcome_report(&Outcome::Identified(prediction("eczema", 0.8731)));
    assert_eq!(report.tone, Tone::Info);
    assert_eq!(report.text(), "Predicted category: eczema\nConfidence: 0.87");
}

#[test]
fn test_unknown_report_hides_raw_label() {
    let report = present::outcome_report(&Outcome::Unknown {
        raw: prediction("lupus", 0.31),
    });
    assert_eq!(report.tone, Tone::Warning);
    assert_eq!(
        report.lines,
        vec![
            "Predicted category: Unknown skin disease".to_string(),
            REFER_TO_DERMATOLOGIST.to_string(),
        ]
    );
    assert!(!report.text().contains("lupus"));
}

#[test]
fn test_diagnosis_report() {
    let report = present::diagnosis_report(DiabetesDiagnosis::Diabetic);
    assert_eq!(report.text(), "The person is diabetic");
    assert_eq!(report.tone, Tone::Danger);

    let report = present::diagnosis_report(DiabetesDiagnosis::NotDiabetic);
    assert_eq!(report.text(), "The person is not diabetic");
    assert_eq!(report.tone, Tone::Success);
}

#[test]
fn test_recommendation_report() {
    let table = RecommendationTable::embedded();
    let report = present::recommendation_report(&table.lookup("Hives", "Yes"));
    assert_eq!(
        report.lines,
        vec![
            "Medical Precautions:",
            "Choose lukewarm water.",
            "Food Recommendations:",
            "fish, chicken.",
        ]
    );

    let report = present::recommendation_report(&table.lookup("Nope", "Yes"));
    assert_eq!(report.lines, vec![NO_PRECAUTIONS, NO_FOOD]);
}

#[test]
fn test_error_reports() {
    assert_eq!(
        present::error_report(&DermaError::ScreeningRequired).text(),
        SCREENING_REQUIRED
    );
    assert_eq!(
        present::error_report(&DermaError::InvalidFormInput { field: "BMI" }).text(),
        INVALID_FORM_INPUT
    );
    let report = present::error_report(&DermaError::InvalidImageFormat("bad".to_string()));
    assert_eq!(report.tone, Tone::Danger);
    assert!(report.text().contains("invalid image format"));
}
