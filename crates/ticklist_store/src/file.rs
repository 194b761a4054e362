//! File-backed store client.

use crate::error::{StoreError, StoreResult};
use crate::item::{Item, ItemId};
use crate::store::ItemStore;
use parking_lot::RwLock;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file-backed item store.
///
/// The whole collection lives in a single JSON array document. Reads load
/// the document on every call, so [`find_all`](ItemStore::find_all) always
/// reflects the last completed write, including writes made through another
/// handle on the same path. Mutations rewrite the document through a
/// temporary file and a rename, so a crash mid-write leaves the previous
/// document intact.
///
/// # Thread Safety
///
/// A handle is thread-safe. An internal lock serializes the
/// read-modify-write cycle of each mutation, and concurrent updates to the
/// same item resolve as last write wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    /// Opens a store document at the given path.
    ///
    /// A missing document is treated as an empty collection and is written
    /// out on the first mutation. Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories cannot be created, or if an
    /// existing document cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use ticklist_store::FileStore;
    ///
    /// let store = FileStore::open(Path::new("ticklist.json"))?;
    /// # Ok::<(), ticklist_store::StoreError>(())
    /// ```
    pub fn open(path: &Path) -> StoreResult<Self> {
        if path.is_dir() {
            return Err(StoreError::invalid_location(format!(
                "{} is a directory",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let store = Self {
            path: path.to_path_buf(),
            lock: RwLock::new(()),
        };
        // Parse an existing document up front so a bad path fails at
        // startup rather than on the first request.
        store.load()?;
        Ok(store)
    }

    /// Returns the path of the store document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<Vec<Item>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|err| StoreError::malformed_document(err.to_string()))
    }

    fn persist(&self, items: &[Item]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(items)
            .map_err(|err| StoreError::malformed_document(err.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ItemStore for FileStore {
    fn find_all(&self) -> StoreResult<Vec<Item>> {
        let _guard = self.lock.read();
        self.load()
    }

    fn insert(&self, text: &str) -> StoreResult<Item> {
        let _guard = self.lock.write();
        let mut items = self.load()?;
        let item = Item::new(text);
        items.push(item.clone());
        self.persist(&items)?;
        Ok(item)
    }

    fn update(&self, id: ItemId, text: &str) -> StoreResult<bool> {
        let _guard = self.lock.write();
        let mut items = self.load()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        item.text = text.to_string();
        self.persist(&items)?;
        Ok(true)
    }

    fn delete(&self, id: ItemId) -> StoreResult<bool> {
        let _guard = self.lock.write();
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.persist(&items)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_store(dir: &Path) -> FileStore {
        FileStore::open(&dir.join("ticklist.json")).unwrap()
    }

    #[test]
    fn file_missing_document_is_empty() {
        let dir = tempdir().unwrap();
        let store = create_store(dir.path());
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn file_insert_then_find_all() {
        let dir = tempdir().unwrap();
        let store = create_store(dir.path());

        let item = store.insert("water the plants").unwrap();
        let items = store.find_all().unwrap();
        assert_eq!(items, vec![item]);
    }

    #[test]
    fn file_update_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let store = create_store(dir.path());
        store.insert("keep me").unwrap();

        assert!(!store.update(ItemId::new(), "changed").unwrap());
        assert_eq!(store.find_all().unwrap()[0].text, "keep me");
    }

    #[test]
    fn file_delete_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let store = create_store(dir.path());
        store.insert("keep me").unwrap();

        assert!(!store.delete(ItemId::new()).unwrap());
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn file_open_rejects_directory_path() {
        let dir = tempdir().unwrap();
        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidLocation { .. }));
    }

    #[test]
    fn file_open_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("ticklist.json");
        let store = FileStore::open(&nested).unwrap();
        store.insert("nested").unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn file_open_rejects_malformed_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ticklist.json");
        fs::write(&path, b"{ not json ]").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedDocument { .. }));
    }

    #[test]
    fn file_empty_document_is_empty_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ticklist.json");
        fs::write(&path, b"").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn file_mutation_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = create_store(dir.path());
        store.insert("tidy").unwrap();
        assert!(!dir.path().join("ticklist.tmp").exists());
    }
}
