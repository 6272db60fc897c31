//! # Seed Data Generator
//!
//! Populates a data directory with a sample menu and staff for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./data (default)
//! cargo run -p canteen-store --bin seed
//!
//! # Seed another directory
//! cargo run -p canteen-store --bin seed -- --data-dir /tmp/canteen
//!
//! # Only the first 3 employees
//! cargo run -p canteen-store --bin seed -- --employees 3
//! ```
//!
//! Existing tables are left alone: items and employees already present are
//! reported and skipped, so running the seed twice is harmless.

use std::env;

use canteen_core::{CoreError, EmployeeRecord, InventoryItem, Money};
use canteen_store::{Store, StoreConfig, StoreError};

/// Canteen menu: (name, stock, price in cents)
const MENU: &[(&str, u32, i64)] = &[
    ("Rice", 40, 250),
    ("Dal", 30, 180),
    ("Chicken Curry", 20, 450),
    ("Veg Biryani", 15, 380),
    ("Chapati", 60, 40),
    ("Samosa", 50, 75),
    ("Masala Tea", 80, 60),
    ("Coffee", 60, 90),
    ("Lassi", 25, 120),
    ("Fruit Bowl", 12, 200),
];

/// Staff: (name, age, employee ID, salary in cents)
const STAFF: &[(&str, u32, i64, i64)] = &[
    ("Asha Rao", 34, 1001, 4_200_000),
    ("Vikram Shah", 41, 1002, 5_150_000),
    ("Meera Nair", 28, 1003, 3_800_000),
    ("Arjun Das", 52, 1004, 6_000_050),
    ("Lina Gomez", 23, 1005, 3_100_000),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from("./data");
    let mut employees = STAFF.len();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--employees" | "-e" => {
                if i + 1 < args.len() {
                    employees = args[i + 1].parse().unwrap_or(STAFF.len());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Canteen Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <DIR>   Data directory (default: ./data)");
                println!("  -e, --employees <N>    Number of sample employees (default: {})", STAFF.len());
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Canteen Seed Data Generator");
    println!("===========================");
    println!("Data directory: {}", data_dir);
    println!();

    let store = Store::open(StoreConfig::new(&data_dir))?;

    let inventory = store.inventory();
    let mut added = 0;
    for &(name, quantity, cents) in MENU {
        match inventory.add_item(InventoryItem::new(name, quantity, Money::from_cents(cents))) {
            Ok(()) => added += 1,
            Err(StoreError::Core(CoreError::DuplicateItem(_))) => {
                println!("  skip item {} (already present)", name);
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!("✓ Added {} inventory items", added);

    let directory = store.employees();
    let mut added = 0;
    for &(name, age, id, cents) in STAFF.iter().take(employees) {
        match directory.add(EmployeeRecord::new(name, age, id, Money::from_cents(cents))) {
            Ok(()) => added += 1,
            Err(StoreError::Core(
                err @ (CoreError::DuplicateEmployeeName(_) | CoreError::DuplicateEmployeeId(_)),
            )) => {
                println!("  skip employee {} ({})", name, err);
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!("✓ Added {} employees", added);

    println!();
    println!(
        "Inventory: {} items, employees: {}",
        inventory.list_available()?.len(),
        directory.list()?.len()
    );
    println!("✓ Seed complete!");

    Ok(())
}
