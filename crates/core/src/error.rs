//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Recoverable ledger failure.
///
/// Only these two kinds are caught at the inventory boundary. Storage and IO
/// failures live in the infrastructure crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The requested item is not held in the ledger.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// A quantity or item name was malformed, negative or of the wrong type.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl LedgerError {
    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
