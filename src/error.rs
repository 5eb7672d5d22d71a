use thiserror::Error;

/// Errors produced by the inference pipeline and the forms around it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DermaError {
    #[error("invalid image format: {0}")]
    InvalidImageFormat(String),

    #[error("classification unavailable: {0}")]
    ClassificationUnavailable(String),

    #[error("initial screening has not been completed in this session")]
    ScreeningRequired,

    #[error("invalid numeric input for {field}")]
    InvalidFormInput { field: &'static str },

    #[error("no recommendation found for disease '{disease}' and diabetic status '{status}'")]
    NotFound { disease: String, status: String },

    #[error("failed to load model {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("debug output failed: {0}")]
    DebugOutput(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = DermaError> = std::result::Result<T, E>;
