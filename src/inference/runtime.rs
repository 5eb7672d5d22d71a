use rten::{Model, Value};
use rten_tensor::prelude::*;
use std::path::Path;

use crate::error::{DermaError, Result};
use crate::inference::preprocessing::InputTensor;

/// Anything that accepts a fixed-shape tensor and returns a probability vector
/// over its fixed class count
pub trait ProbabilityModel: Send + Sync {
    fn predict(&self, input: &InputTensor) -> Result<Vec<f32>>;

    /// Human-readable name (used in log output)
    fn name(&self) -> &str;
}

/// A pre-trained model executed with the rten runtime
pub struct RtenModel {
    name: String,
    model: Model,
}

impl RtenModel {
    /// Load a `.rten` model file
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self> {
        let name = name.into();
        if !path.exists() {
            return Err(DermaError::ModelLoad {
                path: path.display().to_string(),
                reason: "file not found".to_string(),
            });
        }

        log::debug!("Loading {} model from {}", name, path.display());
        let model = Model::load_file(path).map_err(|e| DermaError::ModelLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { name, model })
    }
}

impl std::fmt::Debug for RtenModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtenModel").field("name", &self.name).finish()
    }
}

impl ProbabilityModel for RtenModel {
    fn predict(&self, input: &InputTensor) -> Result<Vec<f32>> {
        log::debug!("Running {} model on input {:?}", self.name, input.shape());
        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| DermaError::ClassificationUnavailable(format!("{}: {}", self.name, e)))?;

        output_scores(output)
            .map_err(|e| DermaError::ClassificationUnavailable(format!("{}: {}", self.name, e)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Flatten a model output into scores. Float outputs are probabilities or a
/// score; integer outputs are class labels (e.g. converted scikit-learn
/// classifiers) and are widened to `f32`.
pub fn output_scores(output: Value) -> std::result::Result<Vec<f32>, String> {
    match output {
        Value::FloatTensor(tensor) => Ok(tensor.iter().copied().collect()),
        Value::Int32Tensor(tensor) => Ok(tensor.iter().map(|&label| label as f32).collect()),
        _ => Err("unsupported output type, expected an f32 or i32 tensor".to_string()),
    }
}
