pub mod artifacts;
pub mod config;
pub mod diabetes;
pub mod error;
pub mod inference;
pub mod models;
pub mod pipeline;
pub mod present;
pub mod recommendations;
pub mod session;

pub use artifacts::Artifacts;
pub use config::{AppConfig, InferenceSettings, ModelPaths};
pub use diabetes::{DiabetesDiagnosis, DiabetesFeatures, DiabetesPredictor};
pub use error::DermaError;
pub use inference::{ClassificationFlow, FlowKind};
pub use inference::runtime::{ProbabilityModel, RtenModel};
pub use models::{CONDITION_LABELS, LabelSet, Outcome, Prediction, SCREENING_LABELS};
pub use pipeline::{Pipeline, PipelineContext, PipelineData, PipelineStep, DebugConfig};
pub use recommendations::{DiabeticStatus, Recommendation, RecommendationTable, SkinCondition};
pub use session::{Session, SessionGate};

#[cfg(feature = "gui")]
pub mod gui;
