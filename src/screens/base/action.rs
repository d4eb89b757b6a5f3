use crate::catalog::Drink;
use crate::mvi::Action;

/// User intents on the search-by-base screen.
#[derive(Debug, Clone)]
pub enum BaseAction {
    /// A base ingredient was picked ("rum", "gin", ...).
    BaseChanged(String),
    FavoriteToggled(Drink),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCategory {
    Search,
    Favorite,
}

impl Action for BaseAction {
    type Category = BaseCategory;

    fn category(&self) -> Option<BaseCategory> {
        match self {
            Self::BaseChanged(_) => Some(BaseCategory::Search),
            Self::FavoriteToggled(_) => Some(BaseCategory::Favorite),
        }
    }
}
