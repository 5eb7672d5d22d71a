use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

use crate::config::{AppConfig, InferenceSettings};
use crate::diabetes::DiabetesPredictor;
use crate::inference::ClassificationFlow;
use crate::inference::runtime::{ProbabilityModel, RtenModel};
use crate::session::Session;

/// Models loaded once at startup and shared read-only afterwards
#[derive(Clone)]
pub struct Artifacts {
    pub screening: Arc<dyn ProbabilityModel>,
    pub condition: Arc<dyn ProbabilityModel>,
    pub diabetes: Arc<dyn ProbabilityModel>,
    pub settings: InferenceSettings,
}

impl Artifacts {
    /// Load every model named in the configuration. Any failure is fatal.
    pub fn load(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            screening: load_model("skin screening", &config.models.screening)?,
            condition: load_model("skin condition", &config.models.condition)?,
            diabetes: load_model("diabetes", &config.models.diabetes)?,
            settings: config.inference,
        })
    }

    /// Assemble from already constructed models
    pub fn from_models(
        screening: Arc<dyn ProbabilityModel>,
        condition: Arc<dyn ProbabilityModel>,
        diabetes: Arc<dyn ProbabilityModel>,
        settings: InferenceSettings,
    ) -> Self {
        Self {
            screening,
            condition,
            diabetes,
            settings,
        }
    }

    pub fn screening_flow(&self) -> ClassificationFlow {
        ClassificationFlow::screening(self.screening.clone(), &self.settings)
    }

    pub fn condition_flow(&self) -> ClassificationFlow {
        ClassificationFlow::condition(self.condition.clone(), &self.settings)
    }

    pub fn diabetes_predictor(&self) -> DiabetesPredictor {
        DiabetesPredictor::new(self.diabetes.clone())
    }

    /// Fresh session with the gate closed
    pub fn new_session(&self) -> Session {
        Session::new(self.screening_flow(), self.condition_flow())
    }
}

fn load_model(role: &str, path: &Path) -> anyhow::Result<Arc<dyn ProbabilityModel>> {
    let model = RtenModel::load(role, path)
        .with_context(|| format!("cannot start without the {} model", role))?;
    log::info!("Loaded {} model from {}", role, path.display());
    Ok(Arc::new(model))
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("screening", &self.screening.name())
            .field("condition", &self.condition.name())
            .field("diabetes", &self.diabetes.name())
            .field("settings", &self.settings)
            .finish()
    }
}
