//! # canteen-core: Pure Domain Logic for the Canteen
//!
//! This crate holds the records, money arithmetic, line codec, validation
//! rules and credential checks of the canteen system. Nothing here touches
//! the file system; `canteen-store` owns every file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Canteen Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Login ──► Admin Menu / Employee Menu ──► Order Session       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 canteen-store (flat files)                      │   │
//! │  │     Inventory Service · Employee Directory · Order Recorder     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ canteen-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────┐        │   │
//! │  │   │  types   │ │  codec   │ │  money   │ │ validation │        │   │
//! │  │   │ records  │ │ csv line │ │  cents   │ │   rules    │        │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └────────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records (InventoryItem, EmployeeRecord, OrderRecord)
//! - [`codec`] - One-record-per-line text encoding
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Field rules (age range, names, prices)
//! - [`auth`] - Role-tagged login over an injectable credential source
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use canteen_core::codec::{DecodeRecord, EncodeRecord};
//! use canteen_core::{InventoryItem, Money};
//!
//! let rice = InventoryItem::new("Rice", 10, Money::from_cents(250));
//! assert_eq!(rice.encode(), "Rice,10,2.50");
//!
//! let decoded = InventoryItem::decode("Rice,10,2.5").unwrap();
//! assert_eq!(decoded, rice);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod codec;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{Authenticator, Credential, CredentialSource, Role, Session, StaticCredentials};
pub use codec::{DecodeError, DecodeRecord, EncodeRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Field separator used by every table file.
///
/// Values are written unescaped: a name containing this character corrupts
/// its row. Validation rejects such names before they reach a table.
pub const FIELD_DELIMITER: char = ',';

/// Youngest age accepted when registering an employee.
pub const MIN_EMPLOYEE_AGE: u32 = 1;

/// Oldest age accepted when registering an employee.
pub const MAX_EMPLOYEE_AGE: u32 = 85;

/// Longest name accepted for an employee or an inventory item.
pub const MAX_NAME_LEN: usize = 100;
