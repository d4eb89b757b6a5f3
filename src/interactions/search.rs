//! Search-side interactions shared by both search screens.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::catalog::{CatalogError, CatalogService, Drink};
use crate::favorites::{merge_favorites, FavoriteStore, StoreError};

/// Catalog search with the local favorite flag merged in, plus the
/// favorite toggle.
pub struct SearchInteraction {
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn FavoriteStore>,
}

impl SearchInteraction {
    pub fn new(catalog: Arc<dyn CatalogService>, favorites: Arc<dyn FavoriteStore>) -> Self {
        Self { catalog, favorites }
    }

    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Drink>, CatalogError> {
        let drinks = self.catalog.find_by_name(query).await?;
        Ok(self.merged(drinks).await)
    }

    pub async fn search_by_base(&self, base: &str) -> Result<Vec<Drink>, CatalogError> {
        let drinks = self.catalog.find_by_base(base).await?;
        Ok(self.merged(drinks).await)
    }

    /// Toggle per the flag carried on `drink`: favorited drinks are
    /// removed from the store, everything else is added.
    pub async fn change_favorite(&self, drink: &Drink) -> Result<(), StoreError> {
        if drink.is_favorite {
            self.favorites.remove(&drink.id).await
        } else {
            self.favorites.add(&drink.id).await
        }
    }

    async fn merged(&self, drinks: Vec<Drink>) -> Vec<Drink> {
        let favorites = self.favorites.list_all().await.unwrap_or_else(|err| {
            // A broken store must not fail a successful lookup.
            warn!("favorite merge skipped: {err}");
            HashSet::new()
        });
        merge_favorites(drinks, &favorites)
    }
}
