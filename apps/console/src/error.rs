//! # Console Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Menu action (add employee, order items, ...)                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError::Io ──────────── logged, generic message ──┐               │
//! │  CoreError (duplicate, stock, not found) ─────────────┤               │
//! │  Bad number at a prompt ──────────────────────────────┼──► AppError   │
//! │                                                        │               │
//! │         ┌──────────────────────────────────────────────┘               │
//! │         ▼                                                               │
//! │  "Error: Employee with ID 7 already exists"                            │
//! │  Menu loop regains control                                             │
//! │                                                                         │
//! │  ConfigError at start-up ──► AppError ──► process exits with code 1    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use canteen_core::CoreError;
use canteen_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Error shown to the operator.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Employee not found
    NotFound,

    /// Field validation failed
    ValidationError,

    /// Duplicate name or ID
    Conflict,

    /// Not enough stock for a selection
    InsufficientStock,

    /// Rule violation (empty inventory, total overflow)
    BusinessLogic,

    /// Login refused
    AuthFailed,

    /// Prompt input could not be understood
    InvalidInput,

    /// Standard input was closed
    InputClosed,

    /// A table file could not be read or written
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Console I/O failed
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::AuthFailed => "AUTH_FAILED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InputClosed => "INPUT_CLOSED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input error for a value the prompt could not parse.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidInput, message)
    }

    /// Creates the end-of-input marker.
    pub fn input_closed() -> Self {
        AppError::new(ErrorCode::InputClosed, "Input closed")
    }

    pub fn is_input_closed(&self) -> bool {
        self.code == ErrorCode::InputClosed
    }
}

/// Converts core errors to console errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::DuplicateEmployeeName(_)
            | CoreError::DuplicateEmployeeId(_)
            | CoreError::DuplicateItem(_) => ErrorCode::Conflict,
            CoreError::EmployeeNotFound(_) => ErrorCode::NotFound,
            CoreError::InventoryEmpty | CoreError::TotalOverflow(_) => ErrorCode::BusinessLogic,
            CoreError::InvalidSelection { .. } => ErrorCode::InvalidInput,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::AuthFailed(_) => ErrorCode::AuthFailed,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

/// Converts storage errors to console errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => e.into(),
            StoreError::Io { .. } => {
                // Full path and cause go to the log; the operator gets it too
                tracing::error!(error = %err, "Storage failure");
                AppError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Internal, format!("Console I/O failed: {}", err))
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use canteen_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err: AppError = CoreError::DuplicateEmployeeId(7).into();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "Employee with ID 7 already exists");

        let err: AppError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_store_error_unwraps_core() {
        let err: AppError = StoreError::Core(CoreError::InventoryEmpty).into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(err.to_string(), "[BUSINESS_LOGIC] Inventory is empty");
    }

    #[test]
    fn test_io_error_is_storage_error() {
        let err: AppError = StoreError::io(
            "inv.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("inv.csv"));
    }
}
