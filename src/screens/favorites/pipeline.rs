use std::sync::Arc;

use tracing::warn;

use crate::interactions::FavoritesInteraction;
use crate::mvi::{Emitter, Pipeline, RunFuture};
use crate::screens::state::{FavoritesViewState, ItemsPhase};

use super::action::{FavoritesAction, FavoritesCategory};

/// Maps favorites-screen actions into state transforms.
///
/// Unlike the search screens, un-favoriting here is not optimistic: the
/// row is only dropped once the store confirms the delete.
pub struct FavoritesPipeline {
    interaction: Arc<FavoritesInteraction>,
}

impl FavoritesPipeline {
    pub fn new(interaction: Arc<FavoritesInteraction>) -> Self {
        Self { interaction }
    }
}

impl Pipeline for FavoritesPipeline {
    type Action = FavoritesAction;
    type State = FavoritesViewState;

    fn run(
        &self,
        action: FavoritesAction,
        emitter: Emitter<FavoritesCategory, FavoritesViewState>,
    ) -> RunFuture {
        match action {
            FavoritesAction::FavoritesRequested => {
                let interaction = Arc::clone(&self.interaction);
                Box::pin(async move {
                    emitter.emit(|_| FavoritesViewState {
                        items: ItemsPhase::Loading,
                    });
                    let result = interaction.favorite_drinks().await;
                    emitter.emit(move |_| FavoritesViewState {
                        items: ItemsPhase::from_result(result),
                    });
                })
            }
            FavoritesAction::FavoriteToggled(drink) => {
                let interaction = Arc::clone(&self.interaction);
                Box::pin(async move {
                    match interaction.delete_favorite(&drink).await {
                        Ok(id) => emitter.emit(move |state| FavoritesViewState {
                            items: state.items.without_drink(&id),
                        }),
                        Err(err) => {
                            warn!(drink = %drink.id, "favorite delete failed: {err}");
                        }
                    }
                })
            }
        }
    }
}
