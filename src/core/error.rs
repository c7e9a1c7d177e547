//! Error types and error handling for docsync.
//!
//! Only one failure is recoverable: the search service rejecting a
//! single document during extraction. The pipeline turns that into a
//! skipped file; every other variant aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for docsync operations
pub type Result<T> = std::result::Result<T, DocSyncError>;

/// Main error type for docsync
#[derive(Error, Debug)]
pub enum DocSyncError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Extraction failed for {file}: {message}")]
    Extraction { file: PathBuf, message: String },

    #[error("Solr returned HTTP {status}: {message}")]
    Solr { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from Solr: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocSyncError {
    /// Whether the pipeline may skip the current file and continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DocSyncError::Extraction { .. })
    }
}
