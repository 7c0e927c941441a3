//! Shared types for seat orders

use crate::models::menu::{Beverage, Dessert, Entree, Money, Salad};
use serde::{Deserialize, Serialize};

/// Table identifier (positive)
pub type TableId = i64;

/// Seat number within a table (1..=capacity)
pub type SeatNumber = i32;

// ============================================================================
// Order Types
// ============================================================================

/// Order input - built by the caller before placement, entree may be unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entree: Option<Entree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salad: Option<Salad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beverage: Option<Beverage>,
    #[serde(default)]
    pub dessert: Dessert,
}

impl OrderInput {
    pub fn new(entree: Entree) -> Self {
        Self {
            entree: Some(entree),
            ..Default::default()
        }
    }

    pub fn with_salad(mut self, salad: Salad) -> Self {
        self.salad = Some(salad);
        self
    }

    pub fn with_beverage(mut self, beverage: Beverage) -> Self {
        self.beverage = Some(beverage);
        self
    }

    pub fn with_dessert(mut self, dessert: Dessert) -> Self {
        self.dessert = dessert;
        self
    }
}

/// Placed order for one seat - entree is always present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatOrder {
    pub entree: Entree,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salad: Option<Salad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beverage: Option<Beverage>,
    #[serde(default)]
    pub dessert: Dessert,
}

impl SeatOrder {
    /// Validate an input into a placed order, `None` when the entree is missing
    pub fn from_input(input: &OrderInput) -> Option<Self> {
        input.entree.map(|entree| Self {
            entree,
            salad: input.salad,
            beverage: input.beverage,
            dessert: input.dessert,
        })
    }
}

impl From<SeatOrder> for OrderInput {
    fn from(order: SeatOrder) -> Self {
        Self {
            entree: Some(order.entree),
            salad: order.salad,
            beverage: order.beverage,
            dessert: order.dessert,
        }
    }
}

// ============================================================================
// Check Types
// ============================================================================

/// One seat on a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckLine {
    pub seat: SeatNumber,
    pub order: SeatOrder,
    /// Price of this seat's order
    pub amount: Money,
}

/// Itemised check for a table, lines ordered by seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub table_id: TableId,
    pub lines: Vec<CheckLine>,
    pub total: Money,
}

impl Check {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
