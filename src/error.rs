//! Error types for EMS
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EmsError
pub type Result<T> = std::result::Result<T, EmsError>;

/// Unified error type for EMS operations
#[derive(Debug, Error)]
pub enum EmsError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Stored record corrupted: {0}")]
    StorageCorruption(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced employee, leave request or attendance record is missing
    NotFound,

    /// Input or state transition rejected
    Validation,

    /// Persisted value unreadable or medium failure
    Storage,
}

impl EmsError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        EmsError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Classify this error into the NotFound / Validation / Storage taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmsError::NotFound { .. } => ErrorKind::NotFound,
            EmsError::Validation(_) | EmsError::Config(_) => ErrorKind::Validation,
            EmsError::Io(_)
            | EmsError::Storage(_)
            | EmsError::StorageCorruption(_)
            | EmsError::Serialization(_) => ErrorKind::Storage,
        }
    }
}

impl From<serde_json::Error> for EmsError {
    fn from(e: serde_json::Error) -> Self {
        EmsError::Serialization(e.to_string())
    }
}
