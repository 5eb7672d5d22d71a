use crate::models::{Outcome, Prediction};

/// Confidence below which a skin condition prediction is withheld
pub const UNKNOWN_THRESHOLD: f32 = 0.45;

/// How a raw prediction becomes the disclosed outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecisionPolicy {
    /// Report the arg-max label whatever its confidence (initial screening)
    ReportRaw,
    /// Replace predictions under `min_confidence` with the unknown outcome
    Threshold { min_confidence: f32 },
}

impl DecisionPolicy {
    pub fn decide(&self, prediction: Prediction) -> Outcome {
        match *self {
            DecisionPolicy::ReportRaw => Outcome::Identified(prediction),
            DecisionPolicy::Threshold { min_confidence } => {
                if prediction.confidence < min_confidence {
                    Outcome::Unknown { raw: prediction }
                } else {
                    Outcome::Identified(prediction)
                }
            }
        }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        DecisionPolicy::Threshold {
            min_confidence: UNKNOWN_THRESHOLD,
        }
    }
}
