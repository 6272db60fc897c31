//! # canteen-store: Flat-File Storage for the Canteen
//!
//! This crate keeps the canteen's durable state in three line-oriented text
//! files and exposes the services the console calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Canteen Data Flow                                │
//! │                                                                         │
//! │  Console (order items)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  canteen-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │   Backend    │  │   │
//! │  │   │  (store.rs)   │    │               │    │ (backend.rs) │  │   │
//! │  │   │               │    │ Inventory     │    │              │  │   │
//! │  │   │ StoreConfig   │───►│ Employees     │───►│ FileLine     │  │   │
//! │  │   │ open tables   │    │ Orders        │    │ MemoryLine   │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │ Table<R> (table.rs)            │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │     employee_details.csv      inv.csv      orders.csv                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Configuration and the handle that opens the tables
//! - [`backend`] - Line stores: file-backed and in-memory
//! - [`table`] - Generic load/append/rewrite over a line store
//! - [`repository`] - Inventory service, employee directory, order recorder
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use canteen_store::{Store, StoreConfig};
//! use canteen_core::Selection;
//!
//! # fn main() -> Result<(), canteen_store::StoreError> {
//! let store = Store::open(StoreConfig::new("./data"))?;
//!
//! for item in store.inventory().list_available()? {
//!     println!("{} x{} @ {}", item.name, item.quantity, item.unit_price);
//! }
//!
//! let outcome = store.inventory().place_order(7, &[Selection::new(1, 3)])?;
//! if let Some(summary) = outcome.summary {
//!     println!("Total: {}", summary.total_amount);
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod repository;
pub mod store;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileLineStore, LineStore, MemoryLineStore};
pub use error::{StoreError, StoreResult};
pub use store::{StorageBackend, Store, StoreConfig};
pub use table::Table;

// Repository re-exports for convenience
pub use repository::employee::EmployeeDirectory;
pub use repository::inventory::{InventoryService, OrderOutcome, OrderSession, RejectedSelection};
pub use repository::order::OrderRecorder;
