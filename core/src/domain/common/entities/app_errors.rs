use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Model returned invalid JSON format")]
    InvalidModelOutput,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
