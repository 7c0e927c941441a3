use shared::error::{AppError, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid menu JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid price for {item}: {price}")]
    InvalidPrice { item: &'static str, price: i64 },

    #[error("Seats per table must be positive, got {0}")]
    InvalidSeats(i32),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match &err {
            ConfigError::InvalidPrice { item, price } => {
                AppError::with_message(ErrorCode::MenuInvalidPrice, err.to_string())
                    .with_detail("item", *item)
                    .with_detail("price", *price)
            }
            ConfigError::Parse(_) => {
                AppError::with_message(ErrorCode::InvalidFormat, err.to_string())
            }
            ConfigError::Io { .. } | ConfigError::InvalidSeats(_) => {
                AppError::config(err.to_string())
            }
        }
    }
}
