//! Favorites-screen interactions.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{CatalogError, CatalogService, Drink};
use crate::favorites::{FavoriteStore, StoreError};

/// Either side of the favorites listing can fail; the screen shows the
/// display text of whichever did.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct FavoritesInteraction {
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn FavoriteStore>,
}

impl FavoritesInteraction {
    pub fn new(catalog: Arc<dyn CatalogService>, favorites: Arc<dyn FavoriteStore>) -> Self {
        Self { catalog, favorites }
    }

    /// Resolve every stored id to a full drink. Any failed lookup fails
    /// the whole listing.
    pub async fn favorite_drinks(&self) -> Result<Vec<Drink>, FavoritesError> {
        let mut ids: Vec<String> = self.favorites.list_all().await?.into_iter().collect();
        // The store has no ordering; sort so the listing is stable.
        ids.sort();

        let mut drinks = Vec::with_capacity(ids.len());
        for id in ids {
            let drink = self.catalog.find_by_id(&id).await?;
            drinks.push(drink.with_favorite(true));
        }
        Ok(drinks)
    }

    /// Remove `drink` from the store; returns its id so the screen can
    /// drop the row once the delete is confirmed.
    pub async fn delete_favorite(&self, drink: &Drink) -> Result<String, StoreError> {
        self.favorites.remove(&drink.id).await?;
        Ok(drink.id.clone())
    }
}
