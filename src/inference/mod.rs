pub mod preprocessing;
pub mod runtime;
pub mod classify;
pub mod policy;
pub mod steps;

use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::InferenceSettings;
use crate::error::{DermaError, Result};
use crate::models::{CONDITION_LABELS, LabelSet, Outcome, SCREENING_LABELS};
use crate::pipeline::Pipeline;
use classify::Classifier;
use policy::DecisionPolicy;
use runtime::ProbabilityModel;

/// Which classifier a flow is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// 3-class initial screening, no thresholding
    Screening,
    /// 10-class skin condition identification, thresholded
    Condition,
}

impl FlowKind {
    pub fn labels(self) -> LabelSet {
        match self {
            FlowKind::Screening => SCREENING_LABELS,
            FlowKind::Condition => CONDITION_LABELS,
        }
    }
}

/// Build a classification pipeline: resize → normalize → classify → decide
pub fn build_pipeline(
    model: Arc<dyn ProbabilityModel>,
    labels: LabelSet,
    policy: DecisionPolicy,
    input_size: u32,
) -> Pipeline {
    use steps::*;

    Pipeline::new()
        .add_step(Arc::new(ResizeStep { size: input_size }))
        .add_step(Arc::new(NormalizeStep))
        .add_step(Arc::new(ClassifyStep {
            classifier: Classifier::new(model, labels),
        }))
        .add_step(Arc::new(DecideStep { policy }))
}

/// One model bound to its label set and decision policy
#[derive(Clone)]
pub struct ClassificationFlow {
    kind: FlowKind,
    pipeline: Pipeline,
}

impl ClassificationFlow {
    /// Initial screening flow: reports the raw arg-max label
    pub fn screening(model: Arc<dyn ProbabilityModel>, settings: &InferenceSettings) -> Self {
        Self {
            kind: FlowKind::Screening,
            pipeline: build_pipeline(
                model,
                FlowKind::Screening.labels(),
                DecisionPolicy::ReportRaw,
                settings.input_size,
            ),
        }
    }

    /// Skin condition flow: withholds predictions below the unknown threshold
    pub fn condition(model: Arc<dyn ProbabilityModel>, settings: &InferenceSettings) -> Self {
        Self {
            kind: FlowKind::Condition,
            pipeline: build_pipeline(
                model,
                FlowKind::Condition.labels(),
                DecisionPolicy::Threshold {
                    min_confidence: settings.unknown_threshold,
                },
                settings.input_size,
            ),
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.pipeline = self.pipeline.with_verbose(verbose);
        self
    }

    pub fn with_debug(mut self, output_dir: PathBuf) -> anyhow::Result<Self> {
        self.pipeline = self.pipeline.with_debug(output_dir)?;
        Ok(self)
    }

    /// Classify uploaded image bytes
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<Outcome> {
        let image = preprocessing::decode_image(bytes)?;
        self.classify_image(image)
    }

    /// Classify an already decoded image
    pub fn classify_image(&self, image: RgbImage) -> Result<Outcome> {
        let data = self.pipeline.run(image)?;
        data.outcome.ok_or_else(|| {
            DermaError::ClassificationUnavailable("pipeline produced no outcome".to_string())
        })
    }
}

impl std::fmt::Debug for ClassificationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationFlow")
            .field("kind", &self.kind)
            .field("steps", &self.pipeline.step_names())
            .finish()
    }
}
