//! Order Manager - restaurant table order bookkeeping
//!
//! # Overview
//!
//! - **orders** (`orders`): `OrderManager`, orders per (table, seat)
//! - **pricing** (`pricing`): check pricing and the included-dessert promotion
//! - **core** (`core`): configuration and startup errors
//! - **driver** (`driver`): single-command scenarios used by `manager-driver`
//!
//! # Module layout
//!
//! ```text
//! order-manager/src/
//! ├── core/          # config, menu loading, ConfigError
//! ├── orders/        # OrderManager, DiningTable
//! ├── pricing/       # check calculator, promotion matcher
//! ├── utils/         # logging
//! └── driver.rs      # P/C/G/A scenarios
//! ```
//!
//! # Example
//!
//! ```
//! use order_manager::OrderManager;
//! use shared::models::{Beverage, Dessert, Entree, Salad};
//! use shared::order::OrderInput;
//!
//! let manager = OrderManager::default();
//! let mut order = OrderInput::new(Entree::Steak)
//!     .with_salad(Salad::Caesar)
//!     .with_beverage(Beverage::MixedDrink);
//! manager.add_included_dessert(&mut order);
//! assert_eq!(order.dessert, Dessert::IncludedDessert);
//!
//! manager.place_order(1, 1, order).unwrap();
//! assert_eq!(manager.get_check_total(1).unwrap(), 14 + 4 + 7);
//! ```

pub mod core;
pub mod driver;
pub mod orders;
pub mod pricing;
pub mod utils;

pub use self::core::{Config, ConfigError};
pub use driver::DriverCommand;
pub use orders::{DiningTable, ManagerError, ManagerResult, OrderManager};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
