//! Table order bookkeeping
//!
//! - **manager**: `OrderManager`, the (table, seat) → order map and its operations
//! - **table**: per-table seat map

pub mod manager;
pub mod table;

pub use manager::{ManagerError, ManagerResult, OrderManager};
pub use table::DiningTable;
