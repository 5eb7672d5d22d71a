use crate::diabetes::DiabetesDiagnosis;
use crate::error::{DermaError, Result};
use crate::models::Outcome;
use crate::recommendations::Recommendation;

pub const REFER_TO_DERMATOLOGIST: &str =
    "Please contact a nearby dermatologist for further evaluation.";
pub const SCREENING_REQUIRED: &str = "Please complete the Initial Screening module first.";
pub const INVALID_FORM_INPUT: &str = "Please enter valid numerical values for all input fields.";
pub const NO_PRECAUTIONS: &str =
    "No medical precautions found for the selected disease and diabetic status.";
pub const NO_FOOD: &str =
    "No food recommendations found for the selected disease and diabetic status.";

/// How a report should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
}

/// User-facing text for one result
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tone: Tone,
    pub lines: Vec<String>,
}

impl Report {
    fn new(tone: Tone, lines: Vec<String>) -> Self {
        Self { tone, lines }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn outcome_report(outcome: &Outcome) -> Report {
    match outcome {
        Outcome::Identified(prediction) => Report::new(
            Tone::Info,
            vec![
                format!("Predicted category: {}", prediction.label),
                format!("Confidence: {:.2}", prediction.confidence),
            ],
        ),
        Outcome::Unknown { .. } => Report::new(
            Tone::Warning,
            vec![
                format!("Predicted category: {}", Outcome::UNKNOWN_LABEL),
                REFER_TO_DERMATOLOGIST.to_string(),
            ],
        ),
    }
}

pub fn diagnosis_report(diagnosis: DiabetesDiagnosis) -> Report {
    match diagnosis {
        DiabetesDiagnosis::Diabetic => {
            Report::new(Tone::Danger, vec!["The person is diabetic".to_string()])
        }
        DiabetesDiagnosis::NotDiabetic => {
            Report::new(Tone::Success, vec!["The person is not diabetic".to_string()])
        }
    }
}

pub fn recommendation_report(result: &Result<&Recommendation>) -> Report {
    match result {
        Ok(rec) => Report::new(
            Tone::Info,
            vec![
                "Medical Precautions:".to_string(),
                rec.precaution.to_string(),
                "Food Recommendations:".to_string(),
                rec.food.to_string(),
            ],
        ),
        Err(_) => not_found_report(),
    }
}

fn not_found_report() -> Report {
    Report::new(
        Tone::Warning,
        vec![NO_PRECAUTIONS.to_string(), NO_FOOD.to_string()],
    )
}

pub fn error_report(err: &DermaError) -> Report {
    match err {
        DermaError::ScreeningRequired => {
            Report::new(Tone::Warning, vec![SCREENING_REQUIRED.to_string()])
        }
        DermaError::InvalidFormInput { .. } => {
            Report::new(Tone::Warning, vec![INVALID_FORM_INPUT.to_string()])
        }
        DermaError::NotFound { .. } => not_found_report(),
        other => Report::new(Tone::Danger, vec![other.to_string()]),
    }
}
