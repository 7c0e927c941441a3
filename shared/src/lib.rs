//! Shared types for the order manager
//!
//! Menu items, price table, promotion rules, seat orders and checks, and the
//! unified error codes used across crates.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};
