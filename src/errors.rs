//! Custom error types for the backup index.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Format error: {0}")]
    Format(#[from] serde_yaml::Error),

    #[error("Traversal error: {0}")]
    Traversal(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
