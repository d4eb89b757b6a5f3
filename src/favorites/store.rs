//! Local favorite-id store.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

/// Errors from favorite persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read favorites: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write favorites: {0}")]
    Write(#[source] std::io::Error),

    #[error("favorites file is corrupt: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Set of favorited drink ids: an id is present or absent, duplicates
/// collapse, order carries no meaning.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn list_all(&self) -> Result<HashSet<String>, StoreError>;

    async fn add(&self, id: &str) -> Result<(), StoreError>;

    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory store, the default for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryFavorites {
    ids: RwLock<HashSet<String>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ids: RwLock::new(ids.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl FavoriteStore for MemoryFavorites {
    async fn list_all(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.ids.read().clone())
    }

    async fn add(&self, id: &str) -> Result<(), StoreError> {
        self.ids.write().insert(id.to_string());
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.ids.write().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_and_remove_have_set_semantics() {
        let store = MemoryFavorites::new();
        store.add("11007").await.unwrap();
        store.add("11007").await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);

        store.remove("11007").await.unwrap();
        store.remove("11007").await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn with_ids_seeds_the_set() {
        let store = MemoryFavorites::with_ids(["1", "2"]);
        let ids = store.list_all().await.unwrap();
        assert!(ids.contains("1") && ids.contains("2"));
    }
}
