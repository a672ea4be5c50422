use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardflowError>;

#[derive(Debug, Error)]
pub enum BoardflowError {
    #[error("Index {index} out of bounds for sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
