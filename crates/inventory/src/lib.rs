//! Inventory ledger.
//!
//! Deterministic domain logic only (no file IO). Persistence and the log file
//! live in `stockledger-infra`.

pub mod inventory;
pub mod ledger;
pub mod log;
pub mod report;

pub use inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
pub use ledger::{
    AddStock, LedgerCommand, LedgerEvent, RemoveStock, StockAdded, StockLedger, StockRemoved,
};
pub use log::{LogEntry, OperationLog};
