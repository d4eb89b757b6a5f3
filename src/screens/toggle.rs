//! Optimistic favorite toggle shared by the search screens.

use std::sync::Arc;

use tracing::warn;

use crate::catalog::Drink;
use crate::interactions::SearchInteraction;
use crate::mvi::Emitter;
use crate::screens::state::SearchViewState;

/// Flip the flag on screen first, persist second. A failed write emits a
/// compensating transform so state and store stay in agreement.
pub(crate) async fn run_toggle<C>(
    interaction: Arc<SearchInteraction>,
    drink: Drink,
    emitter: Emitter<C, SearchViewState>,
) where
    C: Copy + Send + 'static,
{
    let toggled = !drink.is_favorite;
    let id = drink.id.clone();
    emitter.emit(move |state| {
        let SearchViewState { query, items } = state;
        SearchViewState {
            query,
            items: items.with_favorite(&id, toggled),
        }
    });

    if let Err(err) = interaction.change_favorite(&drink).await {
        warn!(drink = %drink.id, "favorite toggle not persisted: {err}");
        let id = drink.id;
        emitter.emit(move |state| {
            let SearchViewState { query, items } = state;
            SearchViewState {
                query,
                items: items.with_favorite(&id, !toggled),
            }
        });
    }
}
