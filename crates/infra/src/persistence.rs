//! Load/save boundary for an [`Inventory`].
//!
//! Mirrors the inventory's own boundary: failures become `false` plus a
//! diagnostic.

use stockledger_inventory::{Inventory, StockLedger};

use crate::store::{LedgerStore, StoreError};

/// Replace the inventory's ledger with the stored snapshot.
///
/// - missing snapshot: warning, ledger reset to empty, `false`
/// - unreadable or malformed snapshot: error, ledger untouched, `false`
pub fn load_inventory<S: LedgerStore + ?Sized>(inventory: &mut Inventory, store: &S) -> bool {
    match store.load() {
        Ok(ledger) => {
            tracing::info!(source = %store.describe(), items = ledger.len(), "inventory loaded");
            inventory.replace_ledger(ledger);
            true
        }
        Err(err @ StoreError::NotFound(_)) => {
            tracing::warn!(error = %err, "starting with empty inventory");
            inventory.replace_ledger(StockLedger::new());
            false
        }
        Err(err) => {
            tracing::error!(source = %store.describe(), error = %err, "failed to load inventory");
            false
        }
    }
}

/// Persist the inventory's ledger. Returns `false` (with a diagnostic) on failure.
pub fn save_inventory<S: LedgerStore + ?Sized>(inventory: &Inventory, store: &S) -> bool {
    match store.save(inventory.ledger()) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(store = %store.describe(), error = %err, "failed to save inventory");
            false
        }
    }
}
