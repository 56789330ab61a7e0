use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access the edit log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the edit log: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to watch the edit log file: {0}")]
    Watch(#[from] notify::Error),

    #[error("{0}")]
    Model(#[from] situ_model::ModelError),
}
