use crate::error::{DermaError, Result};
use crate::inference::classify::Classifier;
use crate::inference::policy::DecisionPolicy;
use crate::inference::preprocessing;
use crate::pipeline::{PipelineContext, PipelineData, PipelineStep};

/// Resize the working image to the model's square input size
pub struct ResizeStep {
    pub size: u32,
}

impl PipelineStep for ResizeStep {
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData> {
        let (w, h) = data.image.dimensions();
        let resized = preprocessing::resize_for_model(&data.image, self.size)?;
        context.log(format_args!("  {}x{} → {}x{}", w, h, self.size, self.size));
        Ok(PipelineData {
            image: resized,
            ..data
        })
    }

    fn name(&self) -> &str {
        "Resize"
    }
}

/// Scale pixels to [0, 1] and add the batch dimension
pub struct NormalizeStep;

impl PipelineStep for NormalizeStep {
    fn process(&self, data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let tensor = preprocessing::to_tensor(&data.image);
        Ok(PipelineData {
            tensor: Some(tensor),
            ..data
        })
    }

    fn name(&self) -> &str {
        "Normalize"
    }

    fn modifies_image(&self) -> bool {
        false
    }
}

/// Invoke the bound model and keep the arg-max prediction
pub struct ClassifyStep {
    pub classifier: Classifier,
}

impl PipelineStep for ClassifyStep {
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData> {
        let tensor = data.tensor.as_ref().ok_or_else(|| {
            DermaError::ClassificationUnavailable(
                "no input tensor; normalize before classifying".to_string(),
            )
        })?;
        let prediction = self.classifier.classify(tensor)?;
        context.log(format_args!(
            "  {}: {} ({:.2})",
            self.classifier.labels().name(),
            prediction.label,
            prediction.confidence
        ));
        Ok(PipelineData {
            prediction: Some(prediction),
            ..data
        })
    }

    fn name(&self) -> &str {
        "Classify"
    }

    fn modifies_image(&self) -> bool {
        false
    }
}

/// Apply the decision policy to the raw prediction
pub struct DecideStep {
    pub policy: DecisionPolicy,
}

impl PipelineStep for DecideStep {
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData> {
        let prediction = data.prediction.ok_or_else(|| {
            DermaError::ClassificationUnavailable("no prediction to decide on".to_string())
        })?;
        let outcome = self.policy.decide(prediction);
        if outcome.is_unknown() {
            context.log(format_args!(
                "  confidence {:.2} below threshold, withholding '{}'",
                prediction.confidence, prediction.label
            ));
        }
        Ok(PipelineData {
            outcome: Some(outcome),
            ..data
        })
    }

    fn name(&self) -> &str {
        "Decide"
    }

    fn modifies_image(&self) -> bool {
        false
    }
}
