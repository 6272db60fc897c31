//! # Record Codec
//!
//! One record per line, fields joined by [`FIELD_DELIMITER`].
//!
//! ## Line Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  inv.csv               name,quantity,price          Rice,10,2.50        │
//! │  employee_details.csv  name,age,employeeID,salary   Ann,34,7,52000.00   │
//! │  orders.csv            free text (write-only)                           │
//! │    Employee ID: 7, Items Ordered: Rice (x3), Total Amount: $7.50        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decoding Rules
//! Delimiters are located greedily from the left: the first `n - 1`
//! delimiters separate fields and the remainder of the line is the last
//! field. Two failure classes exist, and the table load skips both:
//!
//! - [`DecodeError::Malformed`]: fewer delimiters than the record needs.
//! - [`DecodeError::ParseFailure`]: a numeric field is not a number, or a
//!   value breaks the record's range (negative quantity, price, salary).
//!
//! Nothing is escaped. A name containing the delimiter shifts the remaining
//! fields; such rows usually fail to parse and are dropped.

use thiserror::Error;

use crate::money::Money;
use crate::types::{EmployeeRecord, InventoryItem, OrderRecord};
use crate::FIELD_DELIMITER;

// =============================================================================
// Errors
// =============================================================================

/// Why a line could not be turned into a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Not enough delimiters for the record's field count.
    #[error("expected {expected} fields, found {found}")]
    Malformed { expected: usize, found: usize },

    /// A field was present but its value could not be used.
    #[error("field '{field}' has unusable value '{value}'")]
    ParseFailure { field: &'static str, value: String },
}

impl DecodeError {
    fn parse(field: &'static str, value: &str) -> Self {
        DecodeError::ParseFailure {
            field,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Traits
// =============================================================================

/// A record that can be written as one line (without the terminator).
pub trait EncodeRecord {
    /// Short name used in log messages ("inventory", "employee", ...).
    const KIND: &'static str;

    fn encode(&self) -> String;
}

/// A record that can be read back from its line.
pub trait DecodeRecord: EncodeRecord + Sized {
    fn decode(line: &str) -> Result<Self, DecodeError>;
}

/// Splits `line` into exactly `expected` fields, leftmost delimiters first.
fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, DecodeError> {
    let line = line.trim_end_matches('\r');
    let fields: Vec<&str> = line.splitn(expected, FIELD_DELIMITER).collect();

    if fields.len() < expected {
        return Err(DecodeError::Malformed {
            expected,
            found: fields.len(),
        });
    }

    Ok(fields)
}

fn parse_name(field: &'static str, value: &str) -> Result<String, DecodeError> {
    if value.trim().is_empty() {
        return Err(DecodeError::parse(field, value));
    }
    Ok(value.to_string())
}

fn parse_non_negative_money(field: &'static str, value: &str) -> Result<Money, DecodeError> {
    let amount: Money = value
        .parse()
        .map_err(|_| DecodeError::parse(field, value))?;

    if amount.is_negative() {
        return Err(DecodeError::parse(field, value));
    }
    Ok(amount)
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, DecodeError> {
    value
        .trim()
        .parse()
        .map_err(|_| DecodeError::parse(field, value))
}

// =============================================================================
// Inventory
// =============================================================================

impl EncodeRecord for InventoryItem {
    const KIND: &'static str = "inventory";

    fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.name,
            self.quantity,
            self.unit_price.to_decimal_string(),
            d = FIELD_DELIMITER
        )
    }
}

impl DecodeRecord for InventoryItem {
    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, 3)?;

        Ok(InventoryItem {
            name: parse_name("name", fields[0])?,
            quantity: parse_number("quantity", fields[1])?,
            unit_price: parse_non_negative_money("price", fields[2])?,
        })
    }
}

// =============================================================================
// Employees
// =============================================================================

impl EncodeRecord for EmployeeRecord {
    const KIND: &'static str = "employee";

    fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.name,
            self.age,
            self.employee_id,
            self.salary.to_decimal_string(),
            d = FIELD_DELIMITER
        )
    }
}

impl DecodeRecord for EmployeeRecord {
    fn decode(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line, 4)?;

        Ok(EmployeeRecord {
            name: parse_name("name", fields[0])?,
            age: parse_number("age", fields[1])?,
            employee_id: parse_number("employee_id", fields[2])?,
            salary: parse_non_negative_money("salary", fields[3])?,
        })
    }
}

// =============================================================================
// Orders (write-only)
// =============================================================================

impl EncodeRecord for OrderRecord {
    const KIND: &'static str = "order";

    fn encode(&self) -> String {
        format!(
            "Employee ID: {}, Items Ordered: {}, Total Amount: {}",
            self.employee_id,
            self.items_ordered.join(", "),
            self.total_amount
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
