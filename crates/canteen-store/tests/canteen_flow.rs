//! End-to-end flows against real files in a temporary data directory.

use std::fs;
use std::path::Path;

use canteen_core::{CoreError, EmployeeKey, EmployeeRecord, EmployeeUpdate, Money, Selection};
use canteen_store::{Store, StoreConfig, StoreError};
use tempfile::TempDir;

fn open(dir: &Path, persist: bool) -> Store {
    Store::open(StoreConfig::new(dir).persist_stock_decrement(persist)).unwrap()
}

fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).map(|s| s.lines().count()).unwrap_or(0)
}

#[test]
fn empty_inventory_refuses_orders_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inv.csv"), "").unwrap();
    let store = open(dir.path(), false);

    assert!(store.inventory().list_available().unwrap().is_empty());

    let err = store.inventory().begin_order(1).unwrap_err();
    assert_eq!(err.to_string(), "Inventory is empty");
    assert!(!dir.path().join("orders.csv").exists());
}

#[test]
fn order_is_recorded_once_and_stock_file_is_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inv.csv"), "Rice,10,2.50\n").unwrap();
    let store = open(dir.path(), false);

    let mut session = store.inventory().begin_order(42).unwrap();
    session.select(Selection::new(1, 3)).unwrap();
    let summary = session.finish().unwrap().unwrap();

    assert_eq!(summary.total_amount.to_string(), "$7.50");
    assert_eq!(summary.item_descriptions(), vec!["Rice (x3)"]);

    let orders = fs::read_to_string(dir.path().join("orders.csv")).unwrap();
    assert_eq!(
        orders,
        "Employee ID: 42, Items Ordered: Rice (x3), Total Amount: $7.50\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("inv.csv")).unwrap(),
        "Rice,10,2.50\n"
    );
}

#[test]
fn persisted_stock_survives_reopen() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inv.csv"), "Rice,10,2.50\n").unwrap();

    let store = open(dir.path(), true);
    let outcome = store
        .inventory()
        .place_order(42, &[Selection::new(1, 3)])
        .unwrap();
    assert!(outcome.rejected.is_empty());

    assert_eq!(
        fs::read_to_string(dir.path().join("inv.csv")).unwrap(),
        "Rice,7,2.50\n"
    );

    let reopened = open(dir.path(), true);
    let items = reopened.inventory().list_available().unwrap();
    assert_eq!(items[0].quantity, 7);
    assert_eq!(line_count(&dir.path().join("orders.csv")), 1);
}

#[test]
fn insufficient_stock_keeps_session_state() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inv.csv"), "Rice,2,2.50\nTea,9,0.50\n").unwrap();
    let store = open(dir.path(), false);

    let mut session = store.inventory().begin_order(3).unwrap();
    session.select(Selection::new(2, 2)).unwrap();
    let before_total = session.total();
    let before_lines = session.lines().to_vec();

    assert!(matches!(
        session.select(Selection::new(1, 5)),
        Err(CoreError::InsufficientStock { .. })
    ));
    assert_eq!(session.total(), before_total);
    assert_eq!(session.lines(), before_lines.as_slice());
    assert_eq!(session.available()[0].quantity, 2);
}

#[test]
fn employee_uniqueness_and_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open(dir.path(), false);
    let directory = store.employees();

    directory
        .add(EmployeeRecord::new("Alice", 30, 1, Money::from_cents(100_000)))
        .unwrap();

    let err = directory
        .add(EmployeeRecord::new("ALICE", 40, 2, Money::zero()))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::DuplicateEmployeeName(_))
    ));

    let err = directory
        .add(EmployeeRecord::new("Bob", 40, 1, Money::zero()))
        .unwrap_err();
    assert!(matches!(err, StoreError::Core(CoreError::DuplicateEmployeeId(1))));

    directory
        .add(EmployeeRecord::new("Bob", 40, 2, Money::zero()))
        .unwrap();
    directory
        .edit(
            2,
            EmployeeUpdate {
                name: "Robert".into(),
                age: 41,
                salary: Money::from_cents(99_999),
            },
        )
        .unwrap();
    directory.delete(&EmployeeKey::Name("alice".into())).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("employee_details.csv")).unwrap(),
        "Robert,41,2,999.99\n"
    );
}

#[test]
fn malformed_lines_are_skipped_then_dropped_on_rewrite() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("employee_details.csv"),
        "Alice,30,1,100.00\nBroken\nBob,forty,2,1.00\nCara,25,3,50.00\n",
    )
    .unwrap();
    let store = open(dir.path(), false);

    let names: Vec<String> = store
        .employees()
        .list()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Cara"]);

    store.employees().delete(&EmployeeKey::Id(1)).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("employee_details.csv")).unwrap(),
        "Cara,25,3,50.00\n"
    );
}

#[test]
fn order_history_reads_raw_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inv.csv"), "Rice,10,2.50\nTea,5,0.50\n").unwrap();
    let store = open(dir.path(), false);

    store
        .inventory()
        .place_order(1, &[Selection::new(1, 1), Selection::new(2, 2)])
        .unwrap();
    store
        .inventory()
        .place_order(2, &[Selection::new(2, 1)])
        .unwrap();

    let history = store.orders().history().unwrap();
    assert_eq!(
        history,
        vec![
            "Employee ID: 1, Items Ordered: Rice (x1), Tea (x2), Total Amount: $3.50",
            "Employee ID: 2, Items Ordered: Tea (x1), Total Amount: $0.50",
        ]
    );
}
