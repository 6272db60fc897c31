//! # Domain Types
//!
//! The three record kinds stored by the canteen, plus the value types an
//! ordering session produces.
//!
//! ## Record Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ InventoryItem   │   │ EmployeeRecord  │   │  OrderRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  name (key, ci) │   │  employee_id    │       │
//! │  │  quantity       │   │  age 1..=85     │   │  items_ordered  │       │
//! │  │  unit_price     │   │  employee_id    │   │  total_amount   │       │
//! │  │                 │   │  salary         │   │  (write-only)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │        inv.csv        employee_details.csv        orders.csv            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;

// =============================================================================
// Inventory Item
// =============================================================================

/// A food item on offer in the canteen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    /// Display name, also the lookup key.
    pub name: String,

    /// Units in stock.
    pub quantity: u32,

    /// Price of one unit.
    pub unit_price: Money,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        InventoryItem {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Checks whether `quantity` units can be taken from this item.
    #[inline]
    pub fn can_fulfil(&self, quantity: u32) -> bool {
        quantity <= self.quantity
    }
}

// =============================================================================
// Employee Record
// =============================================================================

/// A registered employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Unique ignoring ASCII case.
    pub name: String,

    /// Checked against `1..=85` on registration only.
    pub age: u32,

    /// Unique, exact match.
    pub employee_id: i64,

    pub salary: Money,
}

impl EmployeeRecord {
    pub fn new(name: impl Into<String>, age: u32, employee_id: i64, salary: Money) -> Self {
        EmployeeRecord {
            name: name.into(),
            age,
            employee_id,
            salary,
        }
    }

    /// Case-insensitive name comparison used for uniqueness and deletion.
    #[inline]
    pub fn name_matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Replacement values for the edit flow. The employee ID is never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub age: u32,
    pub salary: Money,
}

/// How the delete flow identifies an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeKey {
    /// Case-insensitive name.
    Name(String),
    /// Exact employee ID.
    Id(i64),
}

impl EmployeeKey {
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        match self {
            EmployeeKey::Name(name) => record.name_matches(name),
            EmployeeKey::Id(id) => record.employee_id == *id,
        }
    }
}

impl std::fmt::Display for EmployeeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeKey::Name(name) => write!(f, "name '{}'", name),
            EmployeeKey::Id(id) => write!(f, "ID {}", id),
        }
    }
}

/// ASCII case-insensitive equality, the canteen's notion of "same name".
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

// =============================================================================
// Orders
// =============================================================================

/// One accepted selection inside an ordering session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl OrderLine {
    /// Receipt text for this line, e.g. `Rice (x3)`.
    pub fn description(&self) -> String {
        format!("{} (x{})", self.item_name, self.quantity)
    }
}

/// A selection as the employee enters it: 1-based item number and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub item_index: usize,
    pub quantity: u32,
}

impl Selection {
    pub const fn new(item_index: usize, quantity: u32) -> Self {
        Selection {
            item_index,
            quantity,
        }
    }
}

/// Result of a completed session that accepted at least one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub employee_id: i64,
    pub lines: Vec<OrderLine>,
    pub total_amount: Money,
}

impl OrderSummary {
    /// Item descriptions in selection order.
    pub fn item_descriptions(&self) -> Vec<String> {
        self.lines.iter().map(OrderLine::description).collect()
    }

    /// Descriptions joined by comma-space, as written to the order log.
    pub fn items_ordered(&self) -> String {
        self.item_descriptions().join(", ")
    }
}

/// The audit line appended to the order log. Never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub employee_id: i64,
    pub items_ordered: Vec<String>,
    pub total_amount: Money,
}

impl From<&OrderSummary> for OrderRecord {
    fn from(summary: &OrderSummary) -> Self {
        OrderRecord {
            employee_id: summary.employee_id,
            items_ordered: summary.item_descriptions(),
            total_amount: summary.total_amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
