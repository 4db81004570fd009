use std::sync::{PoisonError, RwLock};

use stockledger_inventory::StockLedger;

use super::{LedgerStore, StoreError, decode, encode};

/// In-memory snapshot store for tests/dev.
///
/// Holds the serialized text rather than a ledger so that load goes through
/// the same decoding as the file store. The text is replaced whole on save, so
/// a poisoned lock still guards a complete snapshot and is recovered.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    inner: RwLock<Option<String>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw snapshot text.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(text.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<StockLedger, StoreError> {
        let text = self.contents().ok_or_else(|| StoreError::NotFound(self.describe()))?;
        decode(&self.describe(), &text)
    }

    fn save(&self, ledger: &StockLedger) -> Result<(), StoreError> {
        let text = encode(&self.describe(), ledger)?;
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(text);
        Ok(())
    }
}
