//! Favorite-flag merge.

use std::collections::HashSet;

use crate::catalog::Drink;

/// Overwrite each drink's favorite flag from the local id set.
///
/// The catalog never supplies a trustworthy flag, so this runs on every
/// externally-fetched list before it reaches a view state. Idempotent for
/// an unchanged set.
pub fn merge_favorites(drinks: Vec<Drink>, favorites: &HashSet<String>) -> Vec<Drink> {
    drinks
        .into_iter()
        .map(|drink| {
            let is_favorite = favorites.contains(&drink.id);
            drink.with_favorite(is_favorite)
        })
        .collect()
}
