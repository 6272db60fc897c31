//! # Store Configuration and Handle
//!
//! Opens the three canteen tables on the configured backend and hands out
//! the services that work on them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Startup                                      │
//! │                                                                         │
//! │  StoreConfig::new(data_dir) ← file names, backend, stock write-back     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config) ← creates data_dir (file backend only)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌────────────────────┐ ┌────────────────────┐ ┌────────────────────┐  │
//! │  │ Table<Employee>    │ │ Table<Inventory>   │ │ Table<OrderRecord> │  │
//! │  │ employee_details   │ │ inv.csv            │ │ orders.csv         │  │
//! │  └────────────────────┘ └────────────────────┘ └────────────────────┘  │
//! │       │                          │                       │              │
//! │       ▼                          ▼                       ▼              │
//! │  store.employees()        store.inventory()       store.orders()        │
//! │                                                                         │
//! │  No file is opened here: every service call opens and closes its own.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use canteen_core::{EmployeeRecord, InventoryItem, OrderRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::backend::{FileLineStore, LineStore, MemoryLineStore};
use crate::error::{StoreError, StoreResult};
use crate::repository::employee::EmployeeDirectory;
use crate::repository::inventory::InventoryService;
use crate::repository::order::OrderRecorder;
use crate::table::Table;

/// Default employee table file name.
pub const EMPLOYEES_FILE: &str = "employee_details.csv";

/// Default inventory table file name.
pub const INVENTORY_FILE: &str = "inv.csv";

/// Default order log file name.
pub const ORDERS_FILE: &str = "orders.csv";

// =============================================================================
// Backend Selection
// =============================================================================

/// Where table lines live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One text file per table inside `data_dir`.
    #[default]
    File,

    /// Process memory; nothing survives the run.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "csv" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "Unknown storage backend: '{}'. Valid options: file, memory",
                other
            )),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust
/// use canteen_store::{StorageBackend, StoreConfig};
///
/// let config = StoreConfig::new("./data")
///     .inventory_file("stock.csv")
///     .persist_stock_decrement(true);
///
/// assert_eq!(config.backend, StorageBackend::File);
/// assert!(config.inventory_path().ends_with("stock.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the table files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_employees_file")]
    pub employees_file: String,

    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    #[serde(default = "default_orders_file")]
    pub orders_file: String,

    /// Write the decremented stock back to the inventory file when an order
    /// completes. Default: false, orders leave `inv.csv` untouched.
    #[serde(default)]
    pub persist_stock_decrement: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_employees_file() -> String {
    EMPLOYEES_FILE.to_string()
}

fn default_inventory_file() -> String {
    INVENTORY_FILE.to_string()
}

fn default_orders_file() -> String {
    ORDERS_FILE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(default_data_dir())
    }
}

impl StoreConfig {
    /// Creates a file-backed configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            backend: StorageBackend::File,
            employees_file: default_employees_file(),
            inventory_file: default_inventory_file(),
            orders_file: default_orders_file(),
            persist_stock_decrement: false,
        }
    }

    /// Creates an in-memory configuration (for testing).
    pub fn in_memory() -> Self {
        StoreConfig {
            backend: StorageBackend::Memory,
            ..StoreConfig::default()
        }
    }

    /// Sets the storage backend.
    pub fn backend(mut self, backend: StorageBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the employee table file name.
    pub fn employees_file(mut self, name: impl Into<String>) -> Self {
        self.employees_file = name.into();
        self
    }

    /// Sets the inventory table file name.
    pub fn inventory_file(mut self, name: impl Into<String>) -> Self {
        self.inventory_file = name.into();
        self
    }

    /// Sets the order log file name.
    pub fn orders_file(mut self, name: impl Into<String>) -> Self {
        self.orders_file = name.into();
        self
    }

    /// Sets whether completed orders write stock back to the inventory.
    pub fn persist_stock_decrement(mut self, persist: bool) -> Self {
        self.persist_stock_decrement = persist;
        self
    }

    pub fn employees_path(&self) -> PathBuf {
        self.data_dir.join(&self.employees_file)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }

    /// Returns the names of any empty file-name settings.
    pub fn empty_file_names(&self) -> Vec<&'static str> {
        [
            ("employees_file", &self.employees_file),
            ("inventory_file", &self.inventory_file),
            ("orders_file", &self.orders_file),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    fn line_store(&self, path: PathBuf, name: &str) -> Arc<dyn LineStore> {
        match self.backend {
            StorageBackend::File => Arc::new(FileLineStore::new(path)),
            StorageBackend::Memory => Arc::new(MemoryLineStore::new(name)),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle over the three canteen tables.
///
/// Cloning is cheap; clones share the same backing stores.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    employees: Table<EmployeeRecord>,
    inventory: Table<InventoryItem>,
    orders: Table<OrderRecord>,
}

impl Store {
    /// Opens the tables described by `config`.
    ///
    /// For the file backend this creates `data_dir` if needed; the table
    /// files themselves are created on first write.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(
            backend = %config.backend,
            data_dir = %config.data_dir.display(),
            persist_stock_decrement = config.persist_stock_decrement,
            "Opening canteen store"
        );

        if config.backend == StorageBackend::File {
            std::fs::create_dir_all(&config.data_dir)
                .map_err(|e| StoreError::io(&config.data_dir, e))?;
        }

        let employees = Table::new(config.line_store(config.employees_path(), "employees"));
        let inventory = Table::new(config.line_store(config.inventory_path(), "inventory"));
        let orders = Table::new(config.line_store(config.orders_path(), "orders"));

        Ok(Store {
            config,
            employees,
            inventory,
            orders,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the inventory service.
    pub fn inventory(&self) -> InventoryService {
        InventoryService::new(
            self.inventory.clone(),
            self.orders(),
            self.config.persist_stock_decrement,
        )
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> EmployeeDirectory {
        EmployeeDirectory::new(self.employees.clone())
    }

    /// Returns the order recorder.
    pub fn orders(&self) -> OrderRecorder {
        OrderRecorder::new(self.orders.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
