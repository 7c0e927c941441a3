//! OrderManager - table/seat order bookkeeping
//!
//! This module handles:
//! - Recording orders per (table, seat)
//! - Pricing a table's orders into a check
//! - Clearing tables for the next party
//! - Applying the included-dessert promotion to an order before placement
//!
//! # Operation Flow
//!
//! ```text
//! place_order(table, seat, input)
//!     ├─ 1. Validate table id and seat number
//!     ├─ 2. Validate input into a SeatOrder (entree required)
//!     ├─ 3. Lock the table's shard (create the table on first use)
//!     └─ 4. Store / overwrite the seat
//! ```
//!
//! Validation happens before any table is touched, so a failed call leaves
//! the manager unchanged.

mod error;
pub use error::*;

use super::table::DiningTable;
use crate::pricing;
use dashmap::DashMap;
use shared::models::{MenuConfig, Money};
use shared::order::{Check, CheckLine, OrderInput, SeatNumber, SeatOrder, TableId};

/// Default seat capacity of a table
pub const DEFAULT_SEATS_PER_TABLE: SeatNumber = 4;

/// OrderManager owning every table and its seat orders
///
/// Tables are created lazily by the first `place_order` for their id and
/// live as long as the manager. Each table sits behind its own shard lock,
/// so a check total is never computed against a half-applied order.
pub struct OrderManager {
    tables: DashMap<TableId, DiningTable>,
    menu: MenuConfig,
    seats_per_table: SeatNumber,
}

impl std::fmt::Debug for OrderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderManager")
            .field("tables", &self.tables.len())
            .field("seats_per_table", &self.seats_per_table)
            .field("promotions", &self.menu.promotions.len())
            .finish()
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new(MenuConfig::default(), DEFAULT_SEATS_PER_TABLE)
    }
}

impl OrderManager {
    /// Create a manager with the given menu and per-table seat capacity
    pub fn new(menu: MenuConfig, seats_per_table: SeatNumber) -> Self {
        tracing::debug!(
            seats_per_table,
            promotions = menu.promotions.len(),
            "OrderManager created"
        );
        Self {
            tables: DashMap::new(),
            menu,
            seats_per_table,
        }
    }

    pub fn menu(&self) -> &MenuConfig {
        &self.menu
    }

    pub fn seats_per_table(&self) -> SeatNumber {
        self.seats_per_table
    }

    fn validate_table(table_id: TableId) -> ManagerResult<()> {
        if table_id <= 0 {
            return Err(ManagerError::InvalidIdentifier(format!(
                "table id must be positive, got {}",
                table_id
            )));
        }
        Ok(())
    }

    fn validate_seat(&self, seat: SeatNumber) -> ManagerResult<()> {
        if seat <= 0 {
            return Err(ManagerError::InvalidIdentifier(format!(
                "seat number must be positive, got {}",
                seat
            )));
        }
        if seat > self.seats_per_table {
            return Err(ManagerError::InvalidIdentifier(format!(
                "seat number exceeds table capacity ({}), got {}",
                self.seats_per_table, seat
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Store (or overwrite) the order at (table, seat)
    ///
    /// No pricing happens here. Re-ordering at an occupied seat silently
    /// replaces the previous order.
    pub fn place_order(
        &self,
        table_id: TableId,
        seat: SeatNumber,
        order: OrderInput,
    ) -> ManagerResult<()> {
        Self::validate_table(table_id)?;
        self.validate_seat(seat)?;
        let order = SeatOrder::from_input(&order).ok_or_else(|| {
            ManagerError::IncompleteOrder(format!(
                "order for table {} seat {} has no entree",
                table_id, seat
            ))
        })?;

        let capacity = self.seats_per_table;
        let mut table = self
            .tables
            .entry(table_id)
            .or_insert_with(|| DiningTable::new(table_id, capacity));
        let replaced = table.place(seat, order);

        tracing::debug!(
            table_id,
            seat,
            entree = %order.entree,
            replaced = replaced.is_some(),
            "Order placed"
        );
        Ok(())
    }

    /// Sum of every occupied seat's order at the table
    ///
    /// Fails with `UnknownTable` when no order was ever placed at the table.
    pub fn get_check_total(&self, table_id: TableId) -> ManagerResult<Money> {
        let table = self
            .tables
            .get(&table_id)
            .ok_or(ManagerError::UnknownTable(table_id))?;
        let total = pricing::check_total(
            &self.menu.prices,
            table.orders().map(|(_, order)| order),
        );
        tracing::debug!(
            table_id,
            total,
            seats = table.occupied_seats(),
            "Check total computed"
        );
        Ok(total)
    }

    /// Remove all orders at the table
    ///
    /// The table id stays known. Unknown or already-clear tables are a no-op.
    pub fn clear_table(&self, table_id: TableId) {
        match self.tables.get_mut(&table_id) {
            Some(mut table) => {
                let cleared = table.clear();
                tracing::debug!(table_id, cleared, "Table cleared");
            }
            None => {
                tracing::debug!(table_id, "Clear requested for unknown table, nothing to do");
            }
        }
    }

    /// Apply the included-dessert promotion to an order before placement
    ///
    /// Returns whether the order qualified; a non-qualifying order is left
    /// unchanged.
    pub fn add_included_dessert(&self, order: &mut OrderInput) -> bool {
        let applied = pricing::apply_included_dessert(&self.menu.promotions, order);
        if applied {
            tracing::debug!(entree = ?order.entree, "Included dessert added");
        }
        applied
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Price of a single order under this manager's price table
    pub fn order_price(&self, order: &SeatOrder) -> Money {
        pricing::order_price(&self.menu.prices, order)
    }

    /// Itemised check for the table, one line per occupied seat
    pub fn get_check(&self, table_id: TableId) -> ManagerResult<Check> {
        let table = self
            .tables
            .get(&table_id)
            .ok_or(ManagerError::UnknownTable(table_id))?;
        let lines: Vec<CheckLine> = table
            .orders()
            .map(|(seat, order)| CheckLine {
                seat,
                order: *order,
                amount: self.order_price(order),
            })
            .collect();
        let total = lines.iter().map(|line| line.amount).sum();
        Ok(Check {
            table_id,
            lines,
            total,
        })
    }

    /// Current order at (table, seat), `None` for an empty seat or unknown table
    pub fn seat_order(
        &self,
        table_id: TableId,
        seat: SeatNumber,
    ) -> ManagerResult<Option<SeatOrder>> {
        Self::validate_table(table_id)?;
        self.validate_seat(seat)?;
        Ok(self
            .tables
            .get(&table_id)
            .and_then(|table| table.seat(seat).copied()))
    }

    /// Whether the table has no orders (unknown tables are clear)
    pub fn is_table_clear(&self, table_id: TableId) -> bool {
        self.tables
            .get(&table_id)
            .is_none_or(|table| table.is_clear())
    }

    /// Known table ids, ascending
    pub fn table_ids(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self.tables.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests;
