//! Favorites screen: stored drinks, resolved to full rows.

mod action;
mod pipeline;

pub use action::{FavoritesAction, FavoritesCategory};
pub use pipeline::FavoritesPipeline;

use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::favorites::FavoriteStore;
use crate::interactions::FavoritesInteraction;
use crate::mvi::Engine;

/// Wire the favorites screen over the injected collaborators.
pub fn favorites_screen(
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn FavoriteStore>,
) -> Engine<FavoritesPipeline> {
    let interaction = Arc::new(FavoritesInteraction::new(catalog, favorites));
    Engine::new(Arc::new(FavoritesPipeline::new(interaction)))
}
