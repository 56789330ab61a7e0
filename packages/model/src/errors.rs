//! Error types for the model

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to parse edit log: {0}")]
    InvalidEditLog(#[source] serde_json::Error),

    #[error("Failed to parse baseline data: {0}")]
    InvalidBaseline(#[source] serde_json::Error),
}
