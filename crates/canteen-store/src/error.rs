//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open / write / rename)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::Io (this module) ← Adds the file path                     │
//! │                                                                         │
//! │  CoreError (duplicate ID, insufficient stock, ...)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::Core                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (console) ← Printed, menu loop continues                     │
//! │                                                                         │
//! │  DecodeError never appears here: malformed lines are skipped.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use canteen_core::{CoreError, ValidationError};
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A backing file could not be opened, written or replaced.
    ///
    /// ## When This Occurs
    /// - Permission denied on the data directory or a table file
    /// - Disk full
    /// - Data directory path points at a regular file
    #[error("Unable to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A business rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Wraps an I/O error with the path that caused it.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the domain error, if this is one.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            StoreError::Core(err) => Some(err),
            StoreError::Io { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
