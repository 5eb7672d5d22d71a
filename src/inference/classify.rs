use std::sync::Arc;

use crate::error::{DermaError, Result};
use crate::inference::preprocessing::InputTensor;
use crate::inference::runtime::ProbabilityModel;
use crate::models::{LabelSet, Prediction};

/// Index and value of the largest entry. Ties resolve to the lowest index and
/// NaN entries are skipped.
pub fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best, (i, &val)| match best {
            Some((_, max_val)) if val <= max_val => best,
            _ => Some((i, val)),
        })
}

/// A model bound to the label set its output vector is aligned with
#[derive(Clone)]
pub struct Classifier {
    model: Arc<dyn ProbabilityModel>,
    labels: LabelSet,
}

impl Classifier {
    pub fn new(model: Arc<dyn ProbabilityModel>, labels: LabelSet) -> Self {
        Self { model, labels }
    }

    pub fn labels(&self) -> LabelSet {
        self.labels
    }

    /// Run the model and pick the top class
    pub fn classify(&self, input: &InputTensor) -> Result<Prediction> {
        let probs = self.model.predict(input)?;

        if probs.len() != self.labels.len() {
            return Err(DermaError::ClassificationUnavailable(format!(
                "{} model returned {} scores, expected {} for the {} label set",
                self.model.name(),
                probs.len(),
                self.labels.len(),
                self.labels.name()
            )));
        }

        let (index, confidence) = argmax(&probs).ok_or_else(|| {
            DermaError::ClassificationUnavailable(format!(
                "{} model returned no usable scores",
                self.model.name()
            ))
        })?;

        let label = self.labels.get(index).ok_or_else(|| {
            DermaError::ClassificationUnavailable(format!("no label at index {}", index))
        })?;

        Ok(Prediction {
            label,
            index,
            confidence,
        })
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("model", &self.model.name())
            .field("labels", &self.labels.name())
            .finish()
    }
}
