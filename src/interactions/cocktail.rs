//! Single-drink lookup for the detail view.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::catalog::{CatalogError, CatalogService, Drink};
use crate::favorites::FavoriteStore;

pub struct CocktailInteraction {
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn FavoriteStore>,
}

impl CocktailInteraction {
    pub fn new(catalog: Arc<dyn CatalogService>, favorites: Arc<dyn FavoriteStore>) -> Self {
        Self { catalog, favorites }
    }

    /// One drink by id, with the local favorite flag merged in.
    pub async fn drink_by_id(&self, id: &str) -> Result<Drink, CatalogError> {
        let drink = self.catalog.find_by_id(id).await?;
        let favorites = self.favorites.list_all().await.unwrap_or_else(|err| {
            warn!("favorite merge skipped: {err}");
            HashSet::new()
        });
        Ok(drink.with_favorite(favorites.contains(id)))
    }
}
