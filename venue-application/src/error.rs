use thiserror::Error;

use venue_domain::PipelineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Pipeline(PipelineError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(value: PipelineError) -> Self {
        match value {
            PipelineError::InvalidInput(message) => AppError::InvalidInput(message),
            other => AppError::Pipeline(other),
        }
    }
}

impl AppError {
    /// Collaborator errors may carry a pipeline error raised while decoding.
    pub fn from_collaborator(err: anyhow::Error) -> Self {
        match err.downcast::<PipelineError>() {
            Ok(pipeline) => pipeline.into(),
            Err(other) => AppError::Internal(other),
        }
    }
}
