//! Search-by-base-ingredient screen.

mod action;
mod pipeline;

pub use action::{BaseAction, BaseCategory};
pub use pipeline::BasePipeline;

use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::favorites::FavoriteStore;
use crate::interactions::SearchInteraction;
use crate::mvi::Engine;

/// Wire the base-ingredient screen over the injected collaborators.
pub fn base_screen(
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn FavoriteStore>,
) -> Engine<BasePipeline> {
    let interaction = Arc::new(SearchInteraction::new(catalog, favorites));
    Engine::new(Arc::new(BasePipeline::new(interaction)))
}
