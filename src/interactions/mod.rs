//! Domain glue between the screen pipelines and their collaborators.

mod cocktail;
mod favorites;
mod search;

pub use cocktail::CocktailInteraction;
pub use favorites::{FavoritesError, FavoritesInteraction};
pub use search::SearchInteraction;
