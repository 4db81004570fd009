//! Infrastructure layer: snapshot storage and the operation log file.

pub mod log_file;
pub mod persistence;
pub mod store;

pub use log_file::LogFile;
pub use persistence::{load_inventory, save_inventory};
pub use store::{InMemoryLedgerStore, JsonFileStore, LedgerStore, StoreError};
