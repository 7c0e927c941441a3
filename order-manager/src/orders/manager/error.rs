use shared::error::{AppError, ErrorCode};
use shared::order::TableId;
use thiserror::Error;

/// Manager errors
///
/// All variants are caller input errors; a failed call leaves the manager unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Incomplete order: {0}")]
    IncompleteOrder(String),

    #[error("Unknown table: {0}")]
    UnknownTable(TableId),
}

impl ManagerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ManagerError::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
            ManagerError::IncompleteOrder(_) => ErrorCode::OrderIncomplete,
            ManagerError::UnknownTable(_) => ErrorCode::TableNotFound,
        }
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        let code = err.code();
        match err {
            ManagerError::UnknownTable(id) => {
                AppError::with_message(code, format!("Table not found: {}", id))
                    .with_detail("table_id", id)
            }
            ManagerError::InvalidIdentifier(msg) | ManagerError::IncompleteOrder(msg) => {
                AppError::with_message(code, msg)
            }
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
