//! # Error Types
//!
//! Domain-specific error types for canteen-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  canteen-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  canteen-core codec (codec.rs)                                         │
//! │  └── DecodeError      - Malformed lines (never leave the table)        │
//! │                                                                         │
//! │  canteen-store errors (separate crate)                                 │
//! │  └── StoreError       - File access failures + CoreError               │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → AppError → Console    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// Every variant is recoverable: the console prints it and the menu loop
/// regains control.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An employee with the same name (ignoring case) is already registered.
    #[error("Employee with name '{0}' already exists")]
    DuplicateEmployeeName(String),

    /// An employee with the same ID is already registered.
    #[error("Employee with ID {0} already exists")]
    DuplicateEmployeeId(i64),

    /// An inventory item with the same name (ignoring case) already exists.
    #[error("Item '{0}' already exists in inventory")]
    DuplicateItem(String),

    /// No employee matched the given name or ID.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    /// An ordering session was started against an empty inventory.
    #[error("Inventory is empty")]
    InventoryEmpty,

    /// The selected item number is outside `1..=available`.
    #[error("Invalid item number {index}: choose between 1 and {available}")]
    InvalidSelection { index: usize, available: usize },

    /// The requested quantity exceeds what is left in the session snapshot.
    ///
    /// ## User Workflow
    /// ```text
    /// Select item 1 (Rice, 10 left), quantity 12
    ///      │
    ///      ▼
    /// InsufficientStock { item: "Rice", available: 10, requested: 12 }
    ///      │
    ///      ▼
    /// Console: "Insufficient stock for Rice: available 10, requested 12"
    /// ```
    #[error("Insufficient stock for {item}: available {available}, requested {requested}")]
    InsufficientStock {
        item: String,
        available: u32,
        requested: u32,
    },

    /// Order total overflowed the money range.
    #[error("Order total overflow after {0}")]
    TotalOverflow(Money),

    /// Username, employee ID or password did not match.
    #[error("Invalid credentials for {0}")]
    AuthFailed(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a name containing the field delimiter).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            item: "Rice".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Rice: available 3, requested 5"
        );

        assert_eq!(CoreError::InventoryEmpty.to_string(), "Inventory is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 1,
            max: 85,
        };
        assert_eq!(err.to_string(), "age must be between 1 and 85");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
