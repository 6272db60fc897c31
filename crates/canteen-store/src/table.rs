//! # File-Backed Table
//!
//! A typed view over one [`LineStore`]: the codec from canteen-core turns
//! records into lines and back.
//!
//! ## Load Behaviour
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  inv.csv                           load_all()                           │
//! │  ───────                           ──────────                           │
//! │  Rice,10,2.50          ──decode──► InventoryItem { Rice, 10, $2.50 }    │
//! │  Tea,5                 ──decode──► Malformed       → skipped (debug)    │
//! │  Soup,three,1.00       ──decode──► ParseFailure    → skipped (debug)    │
//! │  Bread,4,0.80          ──decode──► InventoryItem { Bread, 4, $0.80 }    │
//! │                                                                         │
//! │  Result: [Rice, Bread] in file order                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `rewrite_all` writes only the records it is given, so lines that were
//! skipped on load disappear from the file on the next rewrite.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use canteen_core::{DecodeRecord, EncodeRecord};
use tracing::{debug, warn};

use crate::backend::LineStore;
use crate::error::StoreResult;

/// Durable collection of records of one kind.
pub struct Table<R> {
    store: Arc<dyn LineStore>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Table {
            store: Arc::clone(&self.store),
            _record: PhantomData,
        }
    }
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("store", &self.store.location())
            .finish()
    }
}

impl<R: EncodeRecord> Table<R> {
    pub fn new(store: Arc<dyn LineStore>) -> Self {
        Table {
            store,
            _record: PhantomData,
        }
    }

    /// Where this table lives, for messages.
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Appends one record as a new line.
    pub fn append_one(&self, record: &R) -> StoreResult<()> {
        debug!(kind = R::KIND, location = %self.store.location(), "Appending record");
        self.store.append_line(&record.encode())
    }

    /// Returns the stored lines without decoding them.
    pub fn read_raw_lines(&self) -> StoreResult<Vec<String>> {
        self.store.read_lines()
    }
}

impl<R: DecodeRecord> Table<R> {
    /// Loads every decodable record in file order, dropping the rest.
    pub fn load_all(&self) -> StoreResult<Vec<R>> {
        let lines = self.store.read_lines()?;
        let mut records = Vec::with_capacity(lines.len());
        let mut skipped = 0usize;

        for (index, line) in lines.iter().enumerate() {
            match R::decode(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    debug!(
                        kind = R::KIND,
                        line = index + 1,
                        error = %e,
                        "Skipping malformed line"
                    );
                }
            }
        }

        if skipped > 0 {
            warn!(
                kind = R::KIND,
                location = %self.store.location(),
                skipped,
                "Ignored malformed lines while loading"
            );
        }

        debug!(kind = R::KIND, count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Replaces the table content with `records`, in the given order.
    pub fn rewrite_all(&self, records: &[R]) -> StoreResult<()> {
        debug!(
            kind = R::KIND,
            location = %self.store.location(),
            count = records.len(),
            "Rewriting table"
        );
        let lines: Vec<String> = records.iter().map(EncodeRecord::encode).collect();
        self.store.rewrite_lines(&lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FileLineStore, MemoryLineStore};
    use canteen_core::{EmployeeRecord, InventoryItem, Money};
    use tempfile::TempDir;

    fn memory_table(lines: &[&str]) -> Table<InventoryItem> {
        Table::new(Arc::new(MemoryLineStore::with_lines(
            "inv",
            lines.iter().copied(),
        )))
    }

    #[test]
    fn test_malformed_lines_are_skipped_in_order() {
        let table = memory_table(&[
            "Rice,10,2.50",
            "Tea,5",
            "Soup,three,1.00",
            "",
            "Bread,4,0.80",
            "Cake,1,lots",
            "Milk,2,1",
        ]);

        let items = table.load_all().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Bread", "Milk"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let table = memory_table(&["Rice,10,2.50", "junk", "Tea,5,0.50"]);
        assert_eq!(table.load_all().unwrap(), table.load_all().unwrap());
    }

    #[test]
    fn test_first_run_is_empty() {
        let dir = TempDir::new().unwrap();
        let table: Table<EmployeeRecord> = Table::new(Arc::new(FileLineStore::new(
            dir.path().join("employee_details.csv"),
        )));
        assert!(table.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let table: Table<EmployeeRecord> = Table::new(Arc::new(FileLineStore::new(
            dir.path().join("employee_details.csv"),
        )));

        let ann = EmployeeRecord::new("Ann", 34, 7, Money::from_cents(5_200_000));
        let bob = EmployeeRecord::new("Bob", 41, 9, Money::zero());
        table.append_one(&ann).unwrap();
        table.append_one(&bob).unwrap();

        assert_eq!(table.load_all().unwrap(), vec![ann, bob]);
    }

    #[test]
    fn test_rewrite_drops_skipped_lines() {
        let table = memory_table(&["Rice,10,2.50", "garbage"]);
        let items = table.load_all().unwrap();
        table.rewrite_all(&items).unwrap();

        assert_eq!(table.read_raw_lines().unwrap(), vec!["Rice,10,2.50"]);
    }

    #[test]
    fn test_rewrite_preserves_given_order() {
        let table = memory_table(&[]);
        let items = vec![
            InventoryItem::new("B", 1, Money::from_cents(100)),
            InventoryItem::new("A", 2, Money::from_cents(200)),
        ];
        table.rewrite_all(&items).unwrap();
        assert_eq!(table.load_all().unwrap(), items);
    }
}
