//! Key-value persistence for cart state.
//!
//! The cart manager treats storage as a string-keyed map with `get`/`set`.
//! Backends: [`MemoryStore`] for tests and ephemeral sessions, [`FileStore`]
//! for a JSON file on disk, and `SqliteStore` (feature `sqlite`).

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::StoreBackend;
use crate::error::StoreError;

/// The trait that all storage backends implement.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store; contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file mapping keys to string values.
///
/// The whole file is rewritten on every `set`, via a sibling temp file and a
/// rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file starts empty. An unreadable or non-object file also
    /// starts empty and is overwritten by the next `set`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable store file {:?}: {}", path, e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!("Opened file store at {:?} ({} keys)", path, entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Open the backend selected in configuration.
pub fn open_store(backend: &StoreBackend) -> Result<Box<dyn KeyValueStore>, StoreError> {
    match backend {
        StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
        StoreBackend::File { path } => Ok(Box::new(FileStore::open(path)?)),
        #[cfg(feature = "sqlite")]
        StoreBackend::Sqlite { path } => Ok(Box::new(crate::SqliteStore::open(path)?)),
        #[cfg(not(feature = "sqlite"))]
        StoreBackend::Sqlite { .. } => Err(StoreError::Database(
            "SQLite support not enabled. Enable the 'sqlite' feature.".to_string(),
        )),
    }
}
