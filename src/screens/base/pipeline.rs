use std::sync::Arc;

use crate::interactions::SearchInteraction;
use crate::mvi::{Emitter, Pipeline, RunFuture};
use crate::screens::state::{ItemsPhase, SearchViewState};
use crate::screens::toggle::run_toggle;

use super::action::{BaseAction, BaseCategory};

/// Like the query pipeline but without a debounce: base picks come from
/// taps, not keystrokes.
pub struct BasePipeline {
    interaction: Arc<SearchInteraction>,
}

impl BasePipeline {
    pub fn new(interaction: Arc<SearchInteraction>) -> Self {
        Self { interaction }
    }
}

impl Pipeline for BasePipeline {
    type Action = BaseAction;
    type State = SearchViewState;

    fn run(&self, action: BaseAction, emitter: Emitter<BaseCategory, SearchViewState>) -> RunFuture {
        match action {
            BaseAction::BaseChanged(base) => {
                let interaction = Arc::clone(&self.interaction);
                Box::pin(async move {
                    let shown = base.clone();
                    emitter.emit(move |_| SearchViewState {
                        query: shown,
                        items: ItemsPhase::Loading,
                    });

                    if base.is_empty() {
                        emitter.emit(|state| state.with_items(ItemsPhase::Drinks(Vec::new())));
                        return;
                    }

                    let result = interaction.search_by_base(&base).await;
                    emitter.emit(move |state| state.with_items(ItemsPhase::from_result(result)));
                })
            }
            BaseAction::FavoriteToggled(drink) => {
                let interaction = Arc::clone(&self.interaction);
                Box::pin(run_toggle(interaction, drink, emitter))
            }
        }
    }
}
