mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from dermascan for tests
pub use dermascan::{
    Artifacts, ClassificationFlow, DermaError, InferenceSettings, Outcome, ProbabilityModel,
    Session, SessionGate,
};
