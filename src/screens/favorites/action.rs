use crate::catalog::Drink;
use crate::mvi::Action;

/// User intents on the favorites screen.
#[derive(Debug, Clone)]
pub enum FavoritesAction {
    /// The screen came into view and wants its listing.
    FavoritesRequested,
    /// The favorite star was tapped on a row, un-favoriting it.
    FavoriteToggled(Drink),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoritesCategory {
    Load,
    Favorite,
}

impl Action for FavoritesAction {
    type Category = FavoritesCategory;

    fn category(&self) -> Option<FavoritesCategory> {
        match self {
            Self::FavoritesRequested => Some(FavoritesCategory::Load),
            Self::FavoriteToggled(_) => Some(FavoritesCategory::Favorite),
        }
    }
}
