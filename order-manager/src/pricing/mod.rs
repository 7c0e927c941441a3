//! Pricing Module
//!
//! Check pricing and included-dessert promotion matching. Both are pure
//! functions over the menu configuration and never touch table state.

mod calculator;
pub mod promotion;

pub use calculator::*;
pub use promotion::*;
