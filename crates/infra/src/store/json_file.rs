use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use stockledger_inventory::StockLedger;

use super::{LedgerStore, StoreError, decode, encode};

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Snapshot stored as a UTF-8 JSON file on local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl LedgerStore for JsonFileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<StockLedger, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.describe()));
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| self.io_error(e))?;
        drop(file);

        let text = String::from_utf8(bytes).map_err(|_| StoreError::Encoding(self.describe()))?;
        decode(&self.describe(), &text)
    }

    fn save(&self, ledger: &StockLedger) -> Result<(), StoreError> {
        let text = encode(&self.describe(), ledger)?;

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), items = ledger.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_inventory::Inventory;

    #[test]
    fn save_then_load_reproduces_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let mut inv = Inventory::new();
        inv.add("apple", 7, None);
        inv.add("pear", 2, None);
        store.save(inv.ledger()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.as_map(), inv.ledger().as_map());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap_err().is_not_found());
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        std::fs::write(&path, [b'{', b'"', 0xe9, b'"', b':', b'1', b'}']).unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Encoding(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("inventory.json"));

        let mut inv = Inventory::new();
        inv.add("apple", 7, None);
        store.save(inv.ledger()).unwrap();
        inv.remove("apple", 7, None);
        store.save(inv.ledger()).unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{}\n");
    }
}
