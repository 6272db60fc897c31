//! Admin menu: staff and stock management.

use std::io::{BufRead, Write};

use canteen_core::validation::validate_age;
use canteen_core::{CoreError, EmployeeKey, EmployeeRecord, EmployeeUpdate, InventoryItem, Session};

use super::{format, Console};
use crate::error::{AppResult, ErrorCode};

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn admin_menu(&mut self, session: &Session) -> AppResult<()> {
        self.term.say(format!("Welcome, {}", session.display_name))?;

        loop {
            self.term.say("")?;
            self.term.say("----- Admin Menu -----")?;
            self.term.say("1. Add employee")?;
            self.term.say("2. Delete employee")?;
            self.term.say("3. Edit employee")?;
            self.term.say("4. View employees")?;
            self.term.say("5. Add inventory item")?;
            self.term.say("6. View inventory")?;
            self.term.say("7. View order log")?;
            self.term.say("8. Logout")?;

            match self.term.read_text("Select option: ")?.as_str() {
                "1" => self.attempt(Self::add_employee)?,
                "2" => self.attempt(Self::delete_employee)?,
                "3" => self.attempt(Self::edit_employee)?,
                "4" => self.attempt(Self::view_employees)?,
                "5" => self.attempt(Self::add_item)?,
                "6" => self.attempt(Self::view_inventory)?,
                "7" => self.attempt(Self::view_order_log)?,
                "8" => return Ok(()),
                other => self.term.say(format!("Invalid choice '{}'", other))?,
            }
        }
    }

    /// Asks for an age until it is a number within `1..=85`.
    fn read_age(&mut self) -> AppResult<u32> {
        loop {
            match self.term.read_number::<u32>("Age: ") {
                Ok(age) => match validate_age(age) {
                    Ok(()) => return Ok(age),
                    Err(e) => self.term.say(format!("Error: {}", e))?,
                },
                Err(e) if e.code == ErrorCode::InvalidInput => {
                    self.term.say(format!("Error: {}", e.message))?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn add_employee(&mut self) -> AppResult<()> {
        let name = self.term.read_text("Name: ")?;
        let age = self.read_age()?;
        let employee_id: i64 = self.term.read_number("Employee ID: ")?;
        let salary = self.term.read_money("Salary: ")?;

        self.store
            .employees()
            .add(EmployeeRecord::new(name, age, employee_id, salary))?;
        self.term.say("Employee added.")
    }

    fn delete_employee(&mut self) -> AppResult<()> {
        self.term.say("Delete by: 1. Name  2. Employee ID")?;
        let key = match self.term.read_text("Select option: ")?.as_str() {
            "1" => EmployeeKey::Name(self.term.read_text("Name: ")?),
            "2" => EmployeeKey::Id(self.term.read_number("Employee ID: ")?),
            other => {
                return self.term.say(format!("Invalid choice '{}'", other));
            }
        };

        let removed = self.store.employees().delete(&key)?;
        self.term.say(format!(
            "Deleted {} (ID {}).",
            removed.name, removed.employee_id
        ))
    }

    fn edit_employee(&mut self) -> AppResult<()> {
        let employee_id: i64 = self.term.read_number("Employee ID: ")?;
        let current = self
            .store
            .employees()
            .find_by_id(employee_id)?
            .ok_or_else(|| CoreError::EmployeeNotFound(EmployeeKey::Id(employee_id).to_string()))?;

        self.term.say(format::employee_table(std::slice::from_ref(&current)))?;

        let update = EmployeeUpdate {
            name: self.term.read_text("New name: ")?,
            age: self.term.read_number("New age: ")?,
            salary: self.term.read_money("New salary: ")?,
        };

        self.store.employees().edit(employee_id, update)?;
        self.term.say("Employee updated.")
    }

    fn view_employees(&mut self) -> AppResult<()> {
        let employees = self.store.employees().list()?;
        self.term.say(format::employee_table(&employees))
    }

    fn add_item(&mut self) -> AppResult<()> {
        let name = self.term.read_text("Item name: ")?;
        let quantity: u32 = self.term.read_number("Quantity: ")?;
        let price = self.term.read_money("Price: ")?;

        self.store
            .inventory()
            .add_item(InventoryItem::new(name, quantity, price))?;
        self.term.say("Item added.")
    }

    pub(super) fn view_inventory(&mut self) -> AppResult<()> {
        let items = self.store.inventory().list_available()?;
        self.term.say(format::inventory_table(&items))
    }

    fn view_order_log(&mut self) -> AppResult<()> {
        let history = self.store.orders().history()?;
        self.term.say(format::order_history(&history))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{memory_store, run_script};
    use crate::config::AuthSettings;

    const LOGIN: &str = "1\nadmin\nadmin123\n";

    #[test]
    fn test_add_employee_reprompts_age() {
        let store = memory_store();
        let script = format!("{LOGIN}1\nAnn\n0\nabc\n90\n34\n7\n52000\n4\n8\n3\n");
        let out = run_script(&store, &AuthSettings::default(), &script);

        assert_eq!(out.matches("Age: ").count(), 4);
        assert!(out.contains("Employee added."));

        let employees = store.employees().list().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].age, 34);
        assert_eq!(employees[0].salary.to_string(), "$52000.00");
    }

    #[test]
    fn test_duplicate_employee_is_reported_and_menu_continues() {
        let store = memory_store();
        let script = format!(
            "{LOGIN}1\nAnn\n34\n7\n100\n1\nANN\n40\n8\n100\n1\nBob\n40\n7\n100\n8\n3\n"
        );
        let out = run_script(&store, &AuthSettings::default(), &script);

        assert!(out.contains("Error: Employee with name 'ANN' already exists"));
        assert!(out.contains("Error: Employee with ID 7 already exists"));
        assert_eq!(store.employees().list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_and_edit() {
        let store = memory_store();
        let script = format!(
            "{LOGIN}1\nAnn\n34\n7\n100\n1\nBob\n40\n8\n100\n\
             2\n1\nann\n\
             3\n8\nRobert\n41\n250.5\n\
             2\n2\n99\n8\n3\n"
        );
        let out = run_script(&store, &AuthSettings::default(), &script);

        assert!(out.contains("Deleted Ann (ID 7)."));
        assert!(out.contains("Employee updated."));
        assert!(out.contains("Error: Employee not found: ID 99"));

        let employees = store.employees().list().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Robert");
        assert_eq!(employees[0].salary.cents(), 25_050);
    }

    #[test]
    fn test_items_inventory_and_order_log() {
        let store = memory_store();
        let script = format!("{LOGIN}5\nRice\n10\n2.50\n5\nrice\n1\n1\n6\n7\n8\n3\n");
        let out = run_script(&store, &AuthSettings::default(), &script);

        assert!(out.contains("Item added."));
        assert!(out.contains("Error: Item 'rice' already exists in inventory"));
        assert!(out.contains("1    Rice"));
        assert!(out.contains("No orders recorded"));
    }
}
