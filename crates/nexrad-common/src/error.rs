//! Error types for the NEXRAD search workspace.

use thiserror::Error;

/// Result type alias using NexradError.
pub type NexradResult<T> = Result<T, NexradError>;

/// Primary error type for search and retrieval operations.
#[derive(Debug, Error)]
pub enum NexradError {
    // === Query Errors ===
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid time specification: {0}")]
    InvalidTime(String),

    // === Geometry Errors ===
    #[error("Projection error: {0}")]
    ProjectionError(String),

    // === Storage Errors ===
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Download directory not found: {0}")]
    DownloadDirMissing(String),

    // === Infrastructure Errors ===
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl NexradError {
    /// Whether the error was caused by caller input rather than the archive or the host.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NexradError::InvalidDomain(_)
                | NexradError::InvalidTime(_)
                | NexradError::DownloadDirMissing(_)
                | NexradError::ConfigError(_)
        )
    }

    /// Process exit code for the command-line tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            NexradError::InvalidDomain(_)
            | NexradError::InvalidTime(_)
            | NexradError::ConfigError(_) => 2,

            NexradError::DownloadDirMissing(_) | NexradError::IoError(_) => 3,

            NexradError::StorageError(_) | NexradError::ObjectNotFound(_) => 4,

            NexradError::ProjectionError(_) => 1,
        }
    }
}

impl From<std::io::Error> for NexradError {
    fn from(err: std::io::Error) -> Self {
        NexradError::IoError(err.to_string())
    }
}
