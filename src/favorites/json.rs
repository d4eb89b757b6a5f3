//! File-backed favorite store.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::store::{FavoriteStore, StoreError};

/// Favorites persisted as a JSON array of drink ids.
///
/// Reads tolerate a missing file (empty set). Every mutation is a full
/// read-modify-write under a single mutex, so toggles arriving from
/// different pipelines cannot interleave halfway.
pub struct JsonFavorites {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_set(&self) -> Result<HashSet<String>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashSet::new()),
            Err(err) => Err(StoreError::Read(err)),
        }
    }

    fn write_set(&self, ids: &HashSet<String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        // Sorted so the file diffs cleanly between sessions.
        let mut sorted: Vec<&String> = ids.iter().collect();
        sorted.sort();
        let body = serde_json::to_vec_pretty(&sorted)?;
        fs::write(&self.path, body).map_err(StoreError::Write)
    }
}

#[async_trait]
impl FavoriteStore for JsonFavorites {
    async fn list_all(&self) -> Result<HashSet<String>, StoreError> {
        let _guard = self.lock.lock();
        self.read_set()
    }

    async fn add(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut ids = self.read_set()?;
        if ids.insert(id.to_string()) {
            self.write_set(&ids)?;
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut ids = self.read_set()?;
        if ids.remove(id) {
            self.write_set(&ids)?;
        }
        Ok(())
    }
}
