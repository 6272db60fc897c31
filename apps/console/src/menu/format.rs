//! Fixed-width tables for the console.
//!
//! ```text
//! No.  Item                      Qty      Price
//! ---------------------------------------------
//! 1    Rice                       10      $2.50
//! 2    Masala Tea                 80      $0.60
//! ```

use canteen_core::{EmployeeRecord, InventoryItem, OrderSummary};

const NAME_WIDTH: usize = 24;

/// Cuts a name to the column width, marking the cut with `~`.
fn fit(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let mut cut: String = name.chars().take(NAME_WIDTH - 1).collect();
        cut.push('~');
        cut
    }
}

fn rule(width: usize) -> String {
    "-".repeat(width)
}

pub fn inventory_table(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "Inventory is empty".to_string();
    }

    let mut out = format!(
        "{:<4} {:<w$} {:>6} {:>10}\n{}\n",
        "No.",
        "Item",
        "Qty",
        "Price",
        rule(4 + NAME_WIDTH + 6 + 10 + 3),
        w = NAME_WIDTH
    );
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<w$} {:>6} {:>10}\n",
            i + 1,
            fit(&item.name),
            item.quantity,
            item.unit_price.to_string(),
            w = NAME_WIDTH
        ));
    }
    out.pop();
    out
}

pub fn employee_table(employees: &[EmployeeRecord]) -> String {
    if employees.is_empty() {
        return "No employees registered".to_string();
    }

    let mut out = format!(
        "{:>8} {:<w$} {:>4} {:>14}\n{}\n",
        "ID",
        "Name",
        "Age",
        "Salary",
        rule(8 + NAME_WIDTH + 4 + 14 + 3),
        w = NAME_WIDTH
    );
    for e in employees {
        out.push_str(&format!(
            "{:>8} {:<w$} {:>4} {:>14}\n",
            e.employee_id,
            fit(&e.name),
            e.age,
            e.salary.to_string(),
            w = NAME_WIDTH
        ));
    }
    out.pop();
    out
}

/// Receipt printed when an order is recorded.
pub fn order_receipt(summary: &OrderSummary) -> String {
    let mut out = format!("Order for employee {}\n", summary.employee_id);
    for line in &summary.lines {
        out.push_str(&format!(
            "  {:<w$} {:>10}\n",
            line.description(),
            line.line_total.to_string(),
            w = NAME_WIDTH + 6
        ));
    }
    out.push_str(&format!(
        "  {:<w$} {:>10}",
        "Total",
        summary.total_amount.to_string(),
        w = NAME_WIDTH + 6
    ));
    out
}

pub fn order_history(lines: &[String]) -> String {
    if lines.is_empty() {
        return "No orders recorded".to_string();
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>4}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
