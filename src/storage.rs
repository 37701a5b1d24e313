//! JSON file persistence for the address book.
//!
//! The whole book is kept in a single JSON file: an array of records,
//! written pretty-printed so the file stays hand-inspectable. A missing
//! file is not an error, it simply means an empty book.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads and saves an [`AddressBook`] at a fixed file path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the address book from disk.
    ///
    /// Returns an empty book when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or does not parse
    /// as an address book.
    pub fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            tracing::debug!("No address book file at {:?}, starting empty", self.path);
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let book: AddressBook = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} record(s) from {:?}", book.len(), self.path);
        Ok(book)
    }

    /// Write the address book to disk, creating parent directories as
    /// needed.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, content)?;
        tracing::debug!("Saved {} record(s) to {:?}", book.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_birthday("25.02.1990").unwrap();
        book.add_record(record);
        book
    }

    #[test]
    fn test_load_missing_file_returns_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("addressbook.json"));

        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("addressbook.json"));
        let book = sample_book();

        store.save(&book).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/dir/addressbook.json"));

        store.save(&sample_book()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_saved_file_is_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("addressbook.json"));

        store.save(&sample_book()).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains('\n'));
        assert!(content.contains("\"1234567890\""));
    }
}
