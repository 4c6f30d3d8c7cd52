use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JsonError: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
