//! # Employee Directory
//!
//! Registration, lookup, edit and removal of employees.
//!
//! Additions append one line. Edits and deletions load the whole table,
//! change it in memory and rewrite it.

use canteen_core::validation::{validate_age, validate_amount, validate_name};
use canteen_core::{CoreError, EmployeeKey, EmployeeRecord, EmployeeUpdate};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::table::Table;

/// Service for the employee table.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Table<EmployeeRecord>,
}

impl EmployeeDirectory {
    pub fn new(employees: Table<EmployeeRecord>) -> Self {
        EmployeeDirectory { employees }
    }

    /// Returns every employee in file order.
    pub fn list(&self) -> StoreResult<Vec<EmployeeRecord>> {
        self.employees.load_all()
    }

    /// Registers a new employee.
    ///
    /// ## Checks (in order)
    /// 1. Name is non-empty and holds no delimiter
    /// 2. Age within `1..=85`
    /// 3. Salary not negative
    /// 4. No existing employee with the same name, ignoring case
    /// 5. No existing employee with the same ID
    pub fn add(&self, record: EmployeeRecord) -> StoreResult<()> {
        validate_name("name", &record.name)?;
        validate_age(record.age)?;
        validate_amount("salary", record.salary)?;

        let existing = self.employees.load_all()?;
        if existing.iter().any(|e| e.name_matches(&record.name)) {
            return Err(CoreError::DuplicateEmployeeName(record.name).into());
        }
        if existing.iter().any(|e| e.employee_id == record.employee_id) {
            return Err(CoreError::DuplicateEmployeeId(record.employee_id).into());
        }

        self.employees.append_one(&record)?;
        info!(employee_id = record.employee_id, name = %record.name, "Employee added");
        Ok(())
    }

    /// Removes the first employee matching `key` and returns it.
    pub fn delete(&self, key: &EmployeeKey) -> StoreResult<EmployeeRecord> {
        let mut employees = self.employees.load_all()?;

        let position = employees
            .iter()
            .position(|e| key.matches(e))
            .ok_or_else(|| CoreError::EmployeeNotFound(key.to_string()))?;

        let removed = employees.remove(position);
        self.employees.rewrite_all(&employees)?;

        info!(employee_id = removed.employee_id, name = %removed.name, "Employee deleted");
        Ok(removed)
    }

    /// Looks up an employee by exact ID.
    pub fn find_by_id(&self, employee_id: i64) -> StoreResult<Option<EmployeeRecord>> {
        let employees = self.employees.load_all()?;
        Ok(employees.into_iter().find(|e| e.employee_id == employee_id))
    }

    /// Replaces name, age and salary of the employee with `employee_id`.
    ///
    /// Only the name format is checked, so the row stays decodable. Age
    /// range and name uniqueness are not enforced on edit.
    pub fn edit(&self, employee_id: i64, update: EmployeeUpdate) -> StoreResult<EmployeeRecord> {
        validate_name("name", &update.name)?;

        let mut employees = self.employees.load_all()?;
        let employee = employees
            .iter_mut()
            .find(|e| e.employee_id == employee_id)
            .ok_or_else(|| CoreError::EmployeeNotFound(EmployeeKey::Id(employee_id).to_string()))?;

        debug!(employee_id, old_name = %employee.name, new_name = %update.name, "Editing employee");

        employee.name = update.name;
        employee.age = update.age;
        employee.salary = update.salary;
        let updated = employee.clone();

        self.employees.rewrite_all(&employees)?;

        info!(employee_id, "Employee updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{LineStore, MemoryLineStore};
    use crate::error::StoreError;
    use canteen_core::{Money, ValidationError};
    use std::sync::Arc;

    fn directory(lines: &[&str]) -> (EmployeeDirectory, Arc<MemoryLineStore>) {
        let store = Arc::new(MemoryLineStore::with_lines("employees", lines.iter().copied()));
        (EmployeeDirectory::new(Table::new(store.clone())), store)
    }

    fn employee(name: &str, age: u32, id: i64) -> EmployeeRecord {
        EmployeeRecord::new(name, age, id, Money::from_cents(4_000_000))
    }

    #[test]
    fn test_add_and_list() {
        let (dir, store) = directory(&[]);
        dir.add(employee("Alice", 30, 1)).unwrap();
        dir.add(employee("Bob", 45, 2)).unwrap();

        assert_eq!(dir.list().unwrap().len(), 2);
        assert_eq!(store.read_lines().unwrap()[0], "Alice,30,1,40000.00");
    }

    #[test]
    fn test_duplicate_name_ignores_case() {
        let (dir, _) = directory(&["Alice,30,1,100.00"]);
        let err = dir.add(employee("aLiCe", 30, 2)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::DuplicateEmployeeName(_))
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let (dir, store) = directory(&["Alice,30,1,100.00"]);
        let err = dir.add(employee("Bob", 30, 1)).unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::DuplicateEmployeeId(1))));
        assert_eq!(store.read_lines().unwrap().len(), 1);
    }

    #[test]
    fn test_age_bounds_on_add() {
        let (dir, _) = directory(&[]);
        assert!(dir.add(employee("A", 1, 1)).is_ok());
        assert!(dir.add(employee("B", 85, 2)).is_ok());

        let err = dir.add(employee("C", 86, 3)).unwrap_err();
        assert!(matches!(
            err.as_core(),
            Some(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(dir.add(employee("D", 0, 4)).is_err());
    }

    #[test]
    fn test_delete_by_name_removes_first_match_only() {
        let (dir, store) = directory(&[
            "Alice,30,1,100.00",
            "bad line",
            "Bob,40,2,100.00",
            "alice,31,3,100.00",
        ]);

        let removed = dir.delete(&EmployeeKey::Name("ALICE".into())).unwrap();
        assert_eq!(removed.employee_id, 1);
        assert_eq!(
            store.read_lines().unwrap(),
            vec!["Bob,40,2,100.00", "alice,31,3,100.00"]
        );
    }

    #[test]
    fn test_delete_by_id_and_missing() {
        let (dir, _) = directory(&["Alice,30,1,100.00", "Bob,40,2,100.00"]);
        dir.delete(&EmployeeKey::Id(2)).unwrap();
        assert_eq!(dir.list().unwrap().len(), 1);

        let err = dir.delete(&EmployeeKey::Id(99)).unwrap_err();
        assert!(matches!(err.as_core(), Some(CoreError::EmployeeNotFound(_))));
    }

    #[test]
    fn test_find_by_id() {
        let (dir, _) = directory(&["Alice,30,1,100.00"]);
        assert_eq!(dir.find_by_id(1).unwrap().unwrap().name, "Alice");
        assert!(dir.find_by_id(2).unwrap().is_none());
    }

    #[test]
    fn test_edit_replaces_fields_without_range_check() {
        let (dir, store) = directory(&["Alice,30,1,100.00", "Bob,40,2,100.00"]);
        let updated = dir
            .edit(
                1,
                EmployeeUpdate {
                    name: "Bob".into(),
                    age: 120,
                    salary: Money::from_cents(250_050),
                },
            )
            .unwrap();

        assert_eq!(updated.employee_id, 1);
        assert_eq!(
            store.read_lines().unwrap(),
            vec!["Bob,120,1,2500.50", "Bob,40,2,100.00"]
        );
    }

    #[test]
    fn test_edit_missing_employee() {
        let (dir, _) = directory(&[]);
        let err = dir
            .edit(
                5,
                EmployeeUpdate {
                    name: "Zed".into(),
                    age: 20,
                    salary: Money::zero(),
                },
            )
            .unwrap_err();
        assert!(matches!(err.as_core(), Some(CoreError::EmployeeNotFound(_))));
    }
}
