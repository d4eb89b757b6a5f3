use std::sync::Arc;
use std::time::Duration;

use crate::interactions::SearchInteraction;
use crate::mvi::{Emitter, Pipeline, RunFuture};
use crate::screens::state::{ItemsPhase, SearchViewState};
use crate::screens::toggle::run_toggle;

use super::action::{QueryAction, QueryCategory};

/// Maps query-screen actions into state transforms: a debounced name
/// lookup per keystroke, and the optimistic favorite toggle.
pub struct QueryPipeline {
    interaction: Arc<SearchInteraction>,
    debounce: Duration,
}

impl QueryPipeline {
    pub fn new(interaction: Arc<SearchInteraction>, debounce: Duration) -> Self {
        Self {
            interaction,
            debounce,
        }
    }
}

impl Pipeline for QueryPipeline {
    type Action = QueryAction;
    type State = SearchViewState;

    fn run(
        &self,
        action: QueryAction,
        emitter: Emitter<QueryCategory, SearchViewState>,
    ) -> RunFuture {
        match action {
            QueryAction::QueryChanged(query) => {
                let interaction = Arc::clone(&self.interaction);
                let debounce = self.debounce;
                Box::pin(async move {
                    let shown = query.clone();
                    emitter.emit(move |_| SearchViewState {
                        query: shown,
                        items: ItemsPhase::Loading,
                    });

                    if query.is_empty() {
                        // An empty box is an empty result, not an error
                        // and not a lookup.
                        emitter.emit(|state| state.with_items(ItemsPhase::Drinks(Vec::new())));
                        return;
                    }

                    // Rapid keystrokes park here and are replaced before
                    // the lookup ever starts.
                    tokio::time::sleep(debounce).await;
                    let result = interaction.search_by_name(&query).await;
                    emitter.emit(move |state| state.with_items(ItemsPhase::from_result(result)));
                })
            }
            QueryAction::FavoriteToggled(drink) => {
                let interaction = Arc::clone(&self.interaction);
                Box::pin(run_toggle(interaction, drink, emitter))
            }
        }
    }
}
