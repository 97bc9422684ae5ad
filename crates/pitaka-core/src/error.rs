use pitaka_domain::EntityId;
use thiserror::Error;

/// Error type that captures storage and service failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Account not found: {0}")]
    AccountNotFound(EntityId),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(EntityId),
    #[error("Budget not found: {0}")]
    BudgetNotFound(EntityId),
    #[error("Goal not found: {0}")]
    GoalNotFound(EntityId),
}
