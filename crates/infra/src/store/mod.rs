//! Ledger snapshot persistence.
//!
//! A snapshot is a JSON object mapping item name to quantity:
//!
//! ```json
//! {
//!   "apple": 7
//! }
//! ```
//!
//! Text is always UTF-8. Entries with a zero quantity are dropped on load so a
//! loaded ledger upholds the same invariant as a live one.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use stockledger_core::{ItemName, Quantity};
use stockledger_inventory::StockLedger;

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryLedgerStore;
pub use json_file::JsonFileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been persisted at the source yet.
    #[error("snapshot '{0}' not found")]
    NotFound(String),

    #[error("io error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot '{0}' is not valid UTF-8")]
    Encoding(String),

    #[error("invalid JSON in snapshot '{origin}': {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Where ledger snapshots are read from and written to.
pub trait LedgerStore {
    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;

    fn load(&self) -> Result<StockLedger, StoreError>;

    fn save(&self, ledger: &StockLedger) -> Result<(), StoreError>;
}

pub(crate) fn decode(origin: &str, text: &str) -> Result<StockLedger, StoreError> {
    let entries: BTreeMap<ItemName, Quantity> =
        serde_json::from_str(text).map_err(|source| StoreError::Malformed {
            origin: origin.to_string(),
            source,
        })?;
    Ok(StockLedger::from_entries(entries))
}

pub(crate) fn encode(origin: &str, ledger: &StockLedger) -> Result<String, StoreError> {
    let mut text =
        serde_json::to_string_pretty(ledger.as_map()).map_err(|source| StoreError::Malformed {
            origin: origin.to_string(),
            source,
        })?;
    text.push('\n');
    Ok(text)
}
