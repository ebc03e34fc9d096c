use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("event '{item_name}' is missing required identity field {field}")]
    MissingIdentity {
        field: &'static str,
        item_name: String,
    },
}
