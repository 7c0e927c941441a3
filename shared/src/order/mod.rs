//! Order types
//!
//! - `OrderInput`: caller-built order, entree may still be unset
//! - `SeatOrder`: validated order stored at a seat
//! - `Check`: itemised table check

pub mod types;

// Re-exports
pub use types::*;
