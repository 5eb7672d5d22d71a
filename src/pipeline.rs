use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;

use rten_tensor::prelude::*;

use crate::error::{DermaError, Result};
use crate::inference::preprocessing::{self, InputTensor};
use crate::models::{Outcome, Prediction};

/// Data that flows through the pipeline
/// Each step fills in the next stage: image → tensor → prediction → outcome
#[derive(Clone)]
pub struct PipelineData {
    /// The working image (decoded upload, later resized)
    pub image: RgbImage,

    /// Normalized model input
    pub tensor: Option<InputTensor>,

    /// Raw arg-max prediction
    pub prediction: Option<Prediction>,

    /// Outcome after the decision policy
    pub outcome: Option<Outcome>,
}

impl PipelineData {
    /// Create PipelineData for a decoded image
    pub fn from_image(image: RgbImage) -> Self {
        Self {
            image,
            tensor: None,
            prediction: None,
            outcome: None,
        }
    }

    /// One line per filled-in stage
    fn summary(&self) -> String {
        let (width, height) = self.image.dimensions();
        let mut lines = vec![format!("image: {}x{}", width, height)];
        if let Some(tensor) = &self.tensor {
            lines.push(format!("tensor: {:?}", tensor.shape()));
        }
        if let Some(prediction) = &self.prediction {
            lines.push(format!(
                "prediction: {} (index {}, confidence {:.4})",
                prediction.label, prediction.index, prediction.confidence
            ));
        }
        if let Some(outcome) = &self.outcome {
            lines.push(format!("outcome: {:?}", outcome));
        }
        lines.join("\n") + "\n"
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
    /// Whether debug mode is enabled
    pub enabled: bool,
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

impl PipelineContext {
    /// Log at info when verbose, debug otherwise
    pub fn log(&self, message: std::fmt::Arguments<'_>) {
        if self.verbose {
            log::info!("{}", message);
        } else {
            log::debug!("{}", message);
        }
    }

    /// Step directory under the debug root, or `None` when debug output is off
    fn debug_dir(&self, dir_name: &str) -> Result<Option<PathBuf>> {
        let Some(debug_config) = &self.debug else {
            return Ok(None);
        };
        if !debug_config.enabled {
            return Ok(None);
        }

        let step_dir = debug_config.output_dir.join(dir_name);
        std::fs::create_dir_all(&step_dir)
            .map_err(|e| DermaError::DebugOutput(format!("{}: {}", step_dir.display(), e)))?;
        Ok(Some(step_dir))
    }

    fn save_debug_image(&self, dir_name: &str, image: &RgbImage) -> Result<()> {
        let Some(step_dir) = self.debug_dir(dir_name)? else {
            return Ok(());
        };
        let output_path = step_dir.join("01.png");
        image
            .save(&output_path)
            .map_err(|e| DermaError::DebugOutput(format!("{}: {}", output_path.display(), e)))?;

        self.log(format_args!("  Debug: saved {}/01.png", dir_name));
        Ok(())
    }

    /// Steps that leave the image alone get a text summary instead of a PNG
    fn save_debug_summary(&self, dir_name: &str, data: &PipelineData) -> Result<()> {
        let Some(step_dir) = self.debug_dir(dir_name)? else {
            return Ok(());
        };
        let output_path = step_dir.join("01.txt");
        std::fs::write(&output_path, data.summary())
            .map_err(|e| DermaError::DebugOutput(format!("{}: {}", output_path.display(), e)))?;

        self.log(format_args!("  Debug: saved {}/01.txt", dir_name));
        Ok(())
    }
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Process data and return it with the next stage filled in
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData>;

    /// Human-readable name for this step (used in verbose output)
    fn name(&self) -> &str;

    /// Whether the step rewrites the working image (decides the debug output kind)
    fn modifies_image(&self) -> bool {
        true
    }
}

/// Composable pipeline builder
#[derive(Clone)]
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> anyhow::Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig {
            output_dir,
            enabled: true,
        });

        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Names of the configured steps, in order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step on a decoded image
    pub fn run(&self, input: RgbImage) -> Result<PipelineData> {
        preprocessing::ensure_not_empty(&input)?;
        self.context.save_debug_image("00_input", &input)?;

        let mut data = PipelineData::from_image(input);

        for (step_idx, step) in self.steps.iter().enumerate() {
            self.context.log(format_args!("Running step: {}", step.name()));

            data = step.process(data, &self.context)?;

            let step_dir_name = format!(
                "{:02}_{}",
                step_idx + 1,
                step.name().to_lowercase().replace(' ', "_")
            );
            if step.modifies_image() {
                self.context.save_debug_image(&step_dir_name, &data.image)?;
            } else {
                self.context.save_debug_summary(&step_dir_name, &data)?;
            }
        }

        Ok(data)
    }

    /// Run the pipeline but stop at an intermediate step (useful for debugging)
    pub fn run_partial(&self, input: RgbImage, num_steps: usize) -> Result<PipelineData> {
        let mut data = PipelineData::from_image(input);

        for (i, step) in self.steps.iter().take(num_steps).enumerate() {
            self.context.log(format_args!("Running step {}: {}", i + 1, step.name()));
            data = step.process(data, &self.context)?;
        }

        Ok(data)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
