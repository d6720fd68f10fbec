//! Error types for ReviewGuard

use std::path::PathBuf;

/// Result type alias using ReviewGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Training dataset path does not resolve
    #[error("dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    /// Training dataset is malformed or unusable
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Model artifact exists but cannot be read back
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new dataset error
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }
}
