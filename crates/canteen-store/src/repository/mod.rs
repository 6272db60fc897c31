//! # Repository Module
//!
//! Services over the canteen tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Service → Table → Line Store                         │
//! │                                                                         │
//! │  Console menu                                                          │
//! │       │                                                                 │
//! │       │  store.employees().delete(&EmployeeKey::Id(7))                 │
//! │       ▼                                                                 │
//! │  EmployeeDirectory                                                     │
//! │  ├── load_all()        read every line, skip malformed                 │
//! │  ├── mutate in memory  remove the first match                          │
//! │  └── rewrite_all()     write the survivors back                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  employee_details.csv                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Services
//!
//! - [`InventoryService`](inventory::InventoryService) - Stock listing, new items, ordering sessions
//! - [`EmployeeDirectory`](employee::EmployeeDirectory) - Employee CRUD
//! - [`OrderRecorder`](order::OrderRecorder) - Append-only order log

pub mod employee;
pub mod inventory;
pub mod order;
