//! # Order Recorder
//!
//! Appends one audit line per completed order. The log is write-only: lines
//! are shown to the operator verbatim and never decoded.

use canteen_core::{Money, OrderRecord, OrderSummary};
use tracing::info;

use crate::error::StoreResult;
use crate::table::Table;

/// Append-only writer for the order log.
#[derive(Debug, Clone)]
pub struct OrderRecorder {
    orders: Table<OrderRecord>,
}

impl OrderRecorder {
    pub fn new(orders: Table<OrderRecord>) -> Self {
        OrderRecorder { orders }
    }

    /// Appends an order line and returns the record that was written.
    ///
    /// ## Line Format
    /// ```text
    /// Employee ID: 7, Items Ordered: Rice (x3), Tea (x1), Total Amount: $8.10
    /// ```
    pub fn record(
        &self,
        employee_id: i64,
        item_descriptions: &[String],
        total_amount: Money,
    ) -> StoreResult<OrderRecord> {
        let record = OrderRecord {
            employee_id,
            items_ordered: item_descriptions.to_vec(),
            total_amount,
        };

        self.orders.append_one(&record)?;

        info!(
            employee_id,
            items = record.items_ordered.len(),
            total = %record.total_amount,
            "Order recorded"
        );

        Ok(record)
    }

    /// Appends the line for a finished session.
    pub fn record_summary(&self, summary: &OrderSummary) -> StoreResult<OrderRecord> {
        self.record(
            summary.employee_id,
            &summary.item_descriptions(),
            summary.total_amount,
        )
    }

    /// Returns the raw order log, oldest first.
    pub fn history(&self) -> StoreResult<Vec<String>> {
        self.orders.read_raw_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryLineStore;
    use std::sync::Arc;

    fn recorder() -> OrderRecorder {
        OrderRecorder::new(Table::new(Arc::new(MemoryLineStore::new("orders"))))
    }

    #[test]
    fn test_record_appends_formatted_line() {
        let recorder = recorder();
        recorder
            .record(
                7,
                &["Rice (x3)".to_string(), "Tea (x1)".to_string()],
                Money::from_cents(810),
            )
            .unwrap();

        assert_eq!(
            recorder.history().unwrap(),
            vec!["Employee ID: 7, Items Ordered: Rice (x3), Tea (x1), Total Amount: $8.10"]
        );
    }

    #[test]
    fn test_history_keeps_append_order() {
        let recorder = recorder();
        recorder.record(1, &["A (x1)".to_string()], Money::from_cents(100)).unwrap();
        recorder.record(2, &["B (x2)".to_string()], Money::from_cents(400)).unwrap();

        let history = recorder.history().unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].starts_with("Employee ID: 1,"));
        assert!(history[1].starts_with("Employee ID: 2,"));
    }
}
