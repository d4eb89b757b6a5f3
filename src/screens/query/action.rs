use crate::catalog::Drink;
use crate::mvi::Action;

/// User intents on the search-by-query screen.
#[derive(Debug, Clone)]
pub enum QueryAction {
    /// The search box text changed (possibly to empty).
    QueryChanged(String),
    /// The favorite star was tapped on a result row; carries the row as
    /// currently shown.
    FavoriteToggled(Drink),
}

/// Routing categories. A new search never cancels an in-flight toggle,
/// and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCategory {
    Search,
    Favorite,
}

impl Action for QueryAction {
    type Category = QueryCategory;

    fn category(&self) -> Option<QueryCategory> {
        match self {
            Self::QueryChanged(_) => Some(QueryCategory::Search),
            Self::FavoriteToggled(_) => Some(QueryCategory::Favorite),
        }
    }
}
