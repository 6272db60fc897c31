//! # Validation Module
//!
//! Field rules applied before a record is written.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompts                                              │
//! │  ├── Type checks (is this a number?)                                   │
//! │  └── Re-prompt loop for employee age                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Field rules (age range, names, prices)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: canteen-store services                                       │
//! │  └── Cross-record rules (duplicate names / IDs, stock levels)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{FIELD_DELIMITER, MAX_EMPLOYEE_AGE, MAX_NAME_LEN, MIN_EMPLOYEE_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a name destined for a table row.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_NAME_LEN`] characters
/// - Must not contain the field delimiter (it would corrupt the row)
///
/// ```rust
/// use canteen_core::validation::validate_name;
///
/// assert!(validate_name("item name", "Rice").is_ok());
/// assert!(validate_name("item name", "").is_err());
/// assert!(validate_name("item name", "Rice, brown").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if name.contains(FIELD_DELIMITER) || name.contains('\n') || name.contains('\r') {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must not contain '{}' or line breaks", FIELD_DELIMITER),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an employee age against `1..=85`.
pub fn validate_age(age: u32) -> ValidationResult<()> {
    if !(MIN_EMPLOYEE_AGE..=MAX_EMPLOYEE_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: i64::from(MIN_EMPLOYEE_AGE),
            max: i64::from(MAX_EMPLOYEE_AGE),
        });
    }

    Ok(())
}

/// Validates a price or salary: zero is allowed, negative is not.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an ordered quantity: must be at least one.
pub fn validate_order_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
