//! Local favorite-id persistence and the favorite-flag merge.

mod json;
mod merge;
mod store;

pub use json::JsonFavorites;
pub use merge::merge_favorites;
pub use store::{FavoriteStore, MemoryFavorites, StoreError};

use std::sync::Arc;

use crate::config::Config;

/// Store selected by config: file-backed when a path is set, otherwise
/// in-memory for the session.
pub fn store_from_config(config: &Config) -> Arc<dyn FavoriteStore> {
    match &config.favorites.path {
        Some(path) => Arc::new(JsonFavorites::new(path)),
        None => Arc::new(MemoryFavorites::new()),
    }
}
