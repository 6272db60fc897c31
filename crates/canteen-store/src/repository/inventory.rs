//! # Inventory Service
//!
//! Stock listing, new items, and the ordering session.
//!
//! ## Ordering Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How an Order Is Taken                                │
//! │                                                                         │
//! │  begin_order(42)                                                       │
//! │       │  load inv.csv once → snapshot   (empty → InventoryEmpty)       │
//! │       ▼                                                                 │
//! │  select(#1, x3) ──► index in 1..=N?        no → InvalidSelection       │
//! │       │             quantity ≥ 1?          no → MustBePositive         │
//! │       │             quantity ≤ remaining?  no → InsufficientStock      │
//! │       │                                                                 │
//! │       │  accepted: snapshot[0].quantity -= 3                           │
//! │       │            total += 3 × unit_price                             │
//! │       │            lines.push("Rice (x3)")                             │
//! │       ▼                                                                 │
//! │  finish()                                                              │
//! │       ├── no accepted lines → nothing written, None                    │
//! │       ├── persist_stock_decrement → rewrite inv.csv from snapshot      │
//! │       └── append one line to orders.csv → Some(OrderSummary)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected selection changes nothing in the session; the employee can
//! keep selecting.

use canteen_core::validation::{validate_amount, validate_name, validate_order_quantity};
use canteen_core::{
    names_match, CoreError, CoreResult, InventoryItem, Money, OrderLine, OrderSummary, Selection,
};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::repository::order::OrderRecorder;
use crate::table::Table;

/// Service for inventory reads, additions and orders.
///
/// ## Usage
/// ```rust
/// use canteen_core::{InventoryItem, Money, Selection};
/// use canteen_store::{Store, StoreConfig};
///
/// # fn main() -> Result<(), canteen_store::StoreError> {
/// let store = Store::open(StoreConfig::in_memory())?;
/// let inventory = store.inventory();
/// inventory.add_item(InventoryItem::new("Rice", 10, Money::from_cents(250)))?;
///
/// let mut session = inventory.begin_order(42)?;
/// session.select(Selection::new(1, 3))?;
/// let summary = session.finish()?.expect("one line accepted");
/// assert_eq!(summary.total_amount.to_string(), "$7.50");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryService {
    inventory: Table<InventoryItem>,
    recorder: OrderRecorder,
    persist_stock_decrement: bool,
}

impl InventoryService {
    pub fn new(
        inventory: Table<InventoryItem>,
        recorder: OrderRecorder,
        persist_stock_decrement: bool,
    ) -> Self {
        InventoryService {
            inventory,
            recorder,
            persist_stock_decrement,
        }
    }

    /// Returns every item in file order.
    pub fn list_available(&self) -> StoreResult<Vec<InventoryItem>> {
        self.inventory.load_all()
    }

    /// Adds a new item after checking its name and price.
    ///
    /// ## Errors
    /// - `Validation` if the name is empty, too long or holds a delimiter,
    ///   or the price is negative
    /// - `DuplicateItem` if an item with the same name (ignoring case) exists
    pub fn add_item(&self, item: InventoryItem) -> StoreResult<()> {
        validate_name("item name", &item.name)?;
        validate_amount("price", item.unit_price)?;

        let existing = self.inventory.load_all()?;
        if existing.iter().any(|i| names_match(&i.name, &item.name)) {
            return Err(CoreError::DuplicateItem(item.name).into());
        }

        self.inventory.append_one(&item)?;
        info!(name = %item.name, quantity = item.quantity, price = %item.unit_price, "Item added");
        Ok(())
    }

    /// Starts an ordering session over a fresh snapshot of the inventory.
    pub fn begin_order(&self, employee_id: i64) -> StoreResult<OrderSession> {
        let snapshot = self.inventory.load_all()?;
        if snapshot.is_empty() {
            debug!(employee_id, "Order refused, inventory is empty");
            return Err(CoreError::InventoryEmpty.into());
        }

        debug!(employee_id, items = snapshot.len(), "Ordering session started");

        Ok(OrderSession {
            employee_id,
            snapshot,
            lines: Vec::new(),
            total: Money::zero(),
            inventory: self.inventory.clone(),
            recorder: self.recorder.clone(),
            persist_stock_decrement: self.persist_stock_decrement,
        })
    }

    /// Runs a whole session from a list of selections.
    ///
    /// Rejected selections are collected rather than aborting the order, so
    /// the outcome can hold both a summary and a list of failures.
    pub fn place_order(
        &self,
        employee_id: i64,
        selections: &[Selection],
    ) -> StoreResult<OrderOutcome> {
        let mut session = self.begin_order(employee_id)?;
        let mut rejected = Vec::new();

        for &selection in selections {
            if let Err(reason) = session.select(selection) {
                debug!(
                    item_index = selection.item_index,
                    quantity = selection.quantity,
                    error = %reason,
                    "Selection rejected"
                );
                rejected.push(RejectedSelection { selection, reason });
            }
        }

        let summary = session.finish()?;
        Ok(OrderOutcome { summary, rejected })
    }
}

// =============================================================================
// Ordering Session
// =============================================================================

/// An in-progress order against an in-memory copy of the inventory.
#[derive(Debug)]
pub struct OrderSession {
    employee_id: i64,
    snapshot: Vec<InventoryItem>,
    lines: Vec<OrderLine>,
    total: Money,
    inventory: Table<InventoryItem>,
    recorder: OrderRecorder,
    persist_stock_decrement: bool,
}

impl OrderSession {
    /// Items with their remaining session quantities.
    pub fn available(&self) -> &[InventoryItem] {
        &self.snapshot
    }

    /// Accepted lines so far, in selection order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// Applies one selection. On error the session is unchanged.
    pub fn select(&mut self, selection: Selection) -> CoreResult<&OrderLine> {
        let available = self.snapshot.len();
        if selection.item_index == 0 || selection.item_index > available {
            return Err(CoreError::InvalidSelection {
                index: selection.item_index,
                available,
            });
        }

        validate_order_quantity(selection.quantity)?;

        let item = &mut self.snapshot[selection.item_index - 1];
        if !item.can_fulfil(selection.quantity) {
            return Err(CoreError::InsufficientStock {
                item: item.name.clone(),
                available: item.quantity,
                requested: selection.quantity,
            });
        }

        let line_total = item
            .unit_price
            .checked_multiply_quantity(selection.quantity)
            .ok_or(CoreError::TotalOverflow(self.total))?;
        let new_total = self
            .total
            .checked_add(line_total)
            .ok_or(CoreError::TotalOverflow(self.total))?;

        item.quantity -= selection.quantity;
        self.total = new_total;
        self.lines.push(OrderLine {
            item_name: item.name.clone(),
            quantity: selection.quantity,
            unit_price: item.unit_price,
            line_total,
        });

        let line = &self.lines[self.lines.len() - 1];
        debug!(item = %line.item_name, quantity = line.quantity, total = %self.total, "Selection accepted");
        Ok(line)
    }

    /// Ends the session, writing the order if anything was accepted.
    pub fn finish(self) -> StoreResult<Option<OrderSummary>> {
        if self.lines.is_empty() {
            debug!(employee_id = self.employee_id, "Session finished with no items");
            return Ok(None);
        }

        if self.persist_stock_decrement {
            self.inventory.rewrite_all(&self.snapshot)?;
            debug!(location = %self.inventory.location(), "Stock written back");
        }

        let summary = OrderSummary {
            employee_id: self.employee_id,
            lines: self.lines,
            total_amount: self.total,
        };
        self.recorder.record_summary(&summary)?;

        Ok(Some(summary))
    }
}

// =============================================================================
// Batch Outcome
// =============================================================================

/// A selection the session refused, with the reason.
#[derive(Debug)]
pub struct RejectedSelection {
    pub selection: Selection,
    pub reason: CoreError,
}

/// Result of [`InventoryService::place_order`].
#[derive(Debug)]
pub struct OrderOutcome {
    /// Present when at least one selection was accepted and recorded.
    pub summary: Option<OrderSummary>,
    pub rejected: Vec<RejectedSelection>,
}

impl OrderOutcome {
    /// True when some selections were recorded and others were refused.
    pub fn is_partial(&self) -> bool {
        self.summary.is_some() && !self.rejected.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
