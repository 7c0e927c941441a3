//! Core - configuration and startup errors

pub mod config;
pub mod error;

pub use config::{Config, load_menu_file, validate_menu};
pub use error::ConfigError;
