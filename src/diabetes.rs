use rten_tensor::Tensor;
use std::sync::Arc;

use crate::error::{DermaError, Result};
use crate::inference::classify::argmax;
use crate::inference::runtime::ProbabilityModel;

/// Feature names in the order the model expects them
pub const FEATURE_NAMES: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Form labels shown next to each input, same order as `FEATURE_NAMES`
pub const FIELD_LABELS: [&str; 8] = [
    "Number of Pregnancies",
    "Glucose Level",
    "Blood Pressure value",
    "Skin Thickness value",
    "Insulin Level",
    "BMI value",
    "Diabetes Pedigree Function value",
    "Age of the Person",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiabetesFeatures {
    values: [f32; 8],
}

impl DiabetesFeatures {
    /// Parse the eight form fields. The first non-numeric field is reported.
    pub fn parse<S: AsRef<str>>(fields: &[S; 8]) -> Result<Self> {
        let mut values = [0.0f32; 8];
        for (i, field) in fields.iter().enumerate() {
            values[i] = field
                .as_ref()
                .trim()
                .parse::<f32>()
                .map_err(|_| DermaError::InvalidFormInput {
                    field: FEATURE_NAMES[i],
                })?;
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> [f32; 8] {
        self.values
    }

    fn to_tensor(self) -> Tensor<f32> {
        Tensor::from_data(&[1, 8], self.values.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiabetesDiagnosis {
    Diabetic,
    NotDiabetic,
}

/// Tabular diabetes classifier
#[derive(Clone)]
pub struct DiabetesPredictor {
    model: Arc<dyn ProbabilityModel>,
}

impl DiabetesPredictor {
    pub fn new(model: Arc<dyn ProbabilityModel>) -> Self {
        Self { model }
    }

    pub fn predict(&self, features: &DiabetesFeatures) -> Result<DiabetesDiagnosis> {
        let output = self.model.predict(&features.to_tensor())?;
        let diagnosis = match output.as_slice() {
            [] => {
                return Err(DermaError::ClassificationUnavailable(format!(
                    "{} model returned no output",
                    self.model.name()
                )));
            }
            // Single score or 0/1 label
            [score] => {
                if *score >= 0.5 {
                    DiabetesDiagnosis::Diabetic
                } else {
                    DiabetesDiagnosis::NotDiabetic
                }
            }
            // Class probabilities, index 1 is "diabetic"
            probs => match argmax(probs) {
                Some((1, _)) => DiabetesDiagnosis::Diabetic,
                Some(_) => DiabetesDiagnosis::NotDiabetic,
                None => {
                    return Err(DermaError::ClassificationUnavailable(format!(
                        "{} model returned no usable scores",
                        self.model.name()
                    )));
                }
            },
        };
        log::debug!("Diabetes prediction: {:?} from {:?}", diagnosis, output);
        Ok(diagnosis)
    }

    /// Parse the form and predict; nothing reaches the model on a parse error
    pub fn assess<S: AsRef<str>>(&self, fields: &[S; 8]) -> Result<DiabetesDiagnosis> {
        let features = DiabetesFeatures::parse(fields)?;
        self.predict(&features)
    }
}

impl std::fmt::Debug for DiabetesPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiabetesPredictor")
            .field("model", &self.model.name())
            .finish()
    }
}
