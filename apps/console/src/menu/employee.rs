//! Employee menu: the interactive ordering session.

use std::io::{BufRead, Write};

use canteen_core::{CoreError, Selection, Session};

use super::{format, Console};
use crate::error::{AppError, AppResult, ErrorCode};

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn employee_menu(&mut self, session: &Session) -> AppResult<()> {
        self.term.say(format!("Welcome, {}", session.display_name))?;
        let employee_id = session
            .employee_id
            .ok_or_else(|| AppError::from(CoreError::AuthFailed("employee session".into())))?;

        loop {
            self.term.say("")?;
            self.term.say("----- Employee Menu -----")?;
            self.term.say("1. Order items")?;
            self.term.say("2. Logout")?;

            match self.term.read_text("Select option: ")?.as_str() {
                "1" => self.attempt(|console| console.order_items(employee_id))?,
                "2" => return Ok(()),
                other => self.term.say(format!("Invalid choice '{}'", other))?,
            }
        }
    }

    fn order_items(&mut self, employee_id: i64) -> AppResult<()> {
        let mut order = self.store.inventory().begin_order(employee_id)?;

        loop {
            self.term.say("")?;
            self.term.say(format::inventory_table(order.available()))?;
            self.term.say(format!("Current total: {}", order.total()))?;

            let item_index: usize = match self.term.read_number("Item number (0 to finish): ") {
                Ok(n) => n,
                Err(e) if e.code == ErrorCode::InvalidInput => {
                    self.term.say(format!("Error: {}", e.message))?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if item_index == 0 {
                break;
            }

            let quantity: u32 = match self.term.read_number("Quantity: ") {
                Ok(n) => n,
                Err(e) if e.code == ErrorCode::InvalidInput => {
                    self.term.say(format!("Error: {}", e.message))?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match order.select(Selection::new(item_index, quantity)) {
                Ok(line) => {
                    let message = format!("Added {} for {}", line.description(), line.line_total);
                    self.term.say(message)?;
                }
                Err(e) => self.term.say(format!("Error: {}", AppError::from(e).message))?,
            }
        }

        match order.finish()? {
            Some(summary) => {
                self.term.say(format::order_receipt(&summary))?;
                self.term.say("Order placed.")
            }
            None => self.term.say("No items ordered."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{memory_store, run_script};
    use crate::config::AuthSettings;
    use canteen_core::{InventoryItem, Money};

    const LOGIN: &str = "2\n42\nAnn\nemp123\n";

    #[test]
    fn test_order_on_empty_inventory() {
        let store = memory_store();
        let out = run_script(&store, &AuthSettings::default(), &format!("{LOGIN}1\n2\n3\n"));
        assert!(out.contains("Error: Inventory is empty"));
        assert!(store.orders().history().unwrap().is_empty());
    }

    #[test]
    fn test_interactive_order() {
        let store = memory_store();
        store
            .inventory()
            .add_item(InventoryItem::new("Rice", 10, Money::from_cents(250)))
            .unwrap();

        let script = format!("{LOGIN}1\n1\n3\n1\n20\n5\n1\nx\n0\n2\n3\n");
        let out = run_script(&store, &AuthSettings::default(), &script);

        assert!(out.contains("Added Rice (x3) for $7.50"));
        assert!(out.contains("Error: Insufficient stock for Rice: available 7, requested 20"));
        assert!(out.contains("Error: Invalid item number 5: choose between 1 and 1"));
        assert!(out.contains("Order placed."));

        assert_eq!(
            store.orders().history().unwrap(),
            vec!["Employee ID: 42, Items Ordered: Rice (x3), Total Amount: $7.50"]
        );
        assert_eq!(store.inventory().list_available().unwrap()[0].quantity, 10);
    }

    #[test]
    fn test_finish_without_items() {
        let store = memory_store();
        store
            .inventory()
            .add_item(InventoryItem::new("Tea", 5, Money::from_cents(60)))
            .unwrap();

        let out = run_script(&store, &AuthSettings::default(), &format!("{LOGIN}1\n0\n2\n3\n"));
        assert!(out.contains("No items ordered."));
        assert!(store.orders().history().unwrap().is_empty());
    }
}
