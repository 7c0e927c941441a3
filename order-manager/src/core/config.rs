use super::error::ConfigError;
use crate::orders::manager::DEFAULT_SEATS_PER_TABLE;
use shared::models::{MenuConfig, Money};
use shared::order::SeatNumber;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Maximum allowed price per menu item
const MAX_PRICE: Money = 1_000_000;

/// Driver configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily rolling log file directory |
/// | SEATS_PER_TABLE | 4 | seat capacity of every table |
/// | MENU_PATH | (unset) | JSON menu file, built-in menu when unset |
/// | MANAGER_COMMAND | (unset) | fixed driver command (P/C/G/A), skips the prompt |
///
/// # Example
///
/// ```ignore
/// MENU_PATH=menu.json MANAGER_COMMAND=G cargo run --bin manager-driver
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub seats_per_table: SeatNumber,
    pub menu_path: Option<String>,
    pub command: Option<String>,
    /// Variables that were set but did not parse, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut warnings = Vec::new();
        let seats_per_table = parse_env_value(
            "SEATS_PER_TABLE",
            std::env::var("SEATS_PER_TABLE").ok(),
            DEFAULT_SEATS_PER_TABLE,
            &mut warnings,
        );
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            seats_per_table,
            menu_path: std::env::var("MENU_PATH").ok(),
            command: std::env::var("MANAGER_COMMAND").ok(),
            warnings,
        }
    }

    /// Check values that the environment cannot guarantee
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats_per_table <= 0 {
            return Err(ConfigError::InvalidSeats(self.seats_per_table));
        }
        Ok(())
    }

    /// The configured menu file, or the built-in menu
    pub fn load_menu(&self) -> Result<MenuConfig, ConfigError> {
        match &self.menu_path {
            Some(path) => load_menu_file(path),
            None => Ok(MenuConfig::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            seats_per_table: DEFAULT_SEATS_PER_TABLE,
            menu_path: None,
            command: None,
            warnings: Vec::new(),
        }
    }
}

/// Parse an optional environment value, recording a warning when it is set but invalid
fn parse_env_value<T: FromStr + Display>(
    name: &str,
    value: Option<String>,
    default: T,
    warnings: &mut Vec<String>,
) -> T {
    let Some(raw) = value else {
        return default;
    };
    match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warnings.push(format!(
                "{} has invalid value '{}', using default {}",
                name, raw, default
            ));
            default
        }
    }
}

/// Read and validate a JSON menu file
pub fn load_menu_file(path: impl AsRef<Path>) -> Result<MenuConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let menu: MenuConfig = serde_json::from_str(&content)?;
    validate_menu(&menu)?;
    tracing::info!(
        path = %path.display(),
        promotions = menu.promotions.len(),
        "Menu loaded"
    );
    Ok(menu)
}

/// Every price must be within 0..=MAX_PRICE
pub fn validate_menu(menu: &MenuConfig) -> Result<(), ConfigError> {
    for (item, price) in menu.prices.entries() {
        if !(0..=MAX_PRICE).contains(&price) {
            return Err(ConfigError::InvalidPrice { item, price });
        }
    }
    Ok(())
}
