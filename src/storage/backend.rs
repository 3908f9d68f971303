//! Key-value persistence backends
//!
//! The stores persist whole documents under fixed string keys. Anything that
//! can get and set a string by key can back them.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::paths::GastosPaths;
use crate::error::{GastosError, GastosResult};

use super::file_io::{read_text, write_text_atomic};

/// Opaque string-keyed persistence used by the stores
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> GastosResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> GastosResult<()>;
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File store in the configured data directory
    pub fn from_paths(paths: &GastosPaths) -> Self {
        Self::new(paths.data_dir())
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> GastosResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> GastosResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-memory backend, used by tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value under `key`
    pub fn with_entry(self, key: &str, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.into());
        self
    }

    /// Make every subsequent `set` fail, simulating a full or broken store
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw value currently stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GastosResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> GastosResult<()> {
        if self.fail_writes.get() {
            return Err(GastosError::Persistence(format!(
                "Write to '{}' rejected: storage quota exceeded",
                key
            )));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
