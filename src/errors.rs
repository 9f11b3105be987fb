use thiserror::Error;

/// Error type that captures the recoverable failures of the list core.
#[derive(Debug, Error)]
pub enum GroceryError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Malformed share link: {0}")]
    Share(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroceryError>;
