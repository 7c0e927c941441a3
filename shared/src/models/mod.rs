//! Data models
//!
//! Menu items and pricing configuration. Prices are whole currency units.

pub mod menu;

// Re-exports
pub use menu::*;
