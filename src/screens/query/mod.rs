//! Search-by-query screen: debounced name lookup.

mod action;
mod pipeline;

pub use action::{QueryAction, QueryCategory};
pub use pipeline::QueryPipeline;

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::CatalogService;
use crate::favorites::FavoriteStore;
use crate::interactions::SearchInteraction;
use crate::mvi::Engine;

/// Wire the query screen over the injected collaborators.
pub fn query_screen(
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn FavoriteStore>,
    debounce: Duration,
) -> Engine<QueryPipeline> {
    let interaction = Arc::new(SearchInteraction::new(catalog, favorites));
    Engine::new(Arc::new(QueryPipeline::new(interaction, debounce)))
}
