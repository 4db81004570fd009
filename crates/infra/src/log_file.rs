//! Append-only operation log on disk.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use stockledger_inventory::LogEntry;

use crate::store::StoreError;

/// Plain-text log file; one UTF-8 line per entry, never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `entries`, creating the file if needed. The handle is closed before returning.
    pub fn append<'a>(&self, entries: impl IntoIterator<Item = &'a LogEntry>) -> Result<usize, StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_error)?;
        let mut writer = BufWriter::new(file);

        let mut written = 0;
        for entry in entries {
            // `String` is UTF-8, so the bytes written are too.
            writeln!(writer, "{entry}").map_err(io_error)?;
            written += 1;
        }
        writer.flush().map_err(io_error)?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn appends_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogFile::new(dir.path().join("ops.log"));

        let first = LogEntry::new(Utc::now(), "Added 1 of apple");
        let second = LogEntry::new(Utc::now(), "Removed 1 of apple");
        assert_eq!(log.append([&first]).unwrap(), 1);
        assert_eq!(log.append([&second]).unwrap(), 1);

        let text = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, [first.to_string(), second.to_string()]);
    }

    #[test]
    fn unwritable_location_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogFile::new(dir.path().join("missing-dir").join("ops.log"));
        let entry = LogEntry::new(Utc::now(), "Added 1 of apple");
        assert!(matches!(log.append([&entry]), Err(StoreError::Io { .. })));
    }
}
