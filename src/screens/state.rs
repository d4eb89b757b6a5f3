//! View states shared by the catalog screens.

use std::fmt::Display;

use crate::catalog::Drink;
use crate::mvi::ViewState;

/// The list portion of a screen, exactly one phase active at a time.
///
/// Within one pipeline run, `Loading` always precedes the terminal
/// `Drinks`/`Error`; only a new action leaves a terminal phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemsPhase {
    #[default]
    Idle,
    Loading,
    Drinks(Vec<Drink>),
    Error(String),
}

impl ItemsPhase {
    /// Terminal phase for a resolved lookup.
    pub fn from_result<E: Display>(result: Result<Vec<Drink>, E>) -> Self {
        match result {
            Ok(drinks) => Self::Drinks(drinks),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn drinks(&self) -> Option<&[Drink]> {
        match self {
            Self::Drinks(drinks) => Some(drinks),
            _ => None,
        }
    }

    /// Rewrite one drink's favorite flag inside a `Drinks` list; other
    /// phases pass through untouched.
    pub fn with_favorite(self, id: &str, is_favorite: bool) -> Self {
        match self {
            Self::Drinks(drinks) => Self::Drinks(
                drinks
                    .into_iter()
                    .map(|drink| {
                        if drink.id == id {
                            drink.with_favorite(is_favorite)
                        } else {
                            drink
                        }
                    })
                    .collect(),
            ),
            other => other,
        }
    }

    /// Drop one drink from a `Drinks` list; other phases pass through.
    pub fn without_drink(self, id: &str) -> Self {
        match self {
            Self::Drinks(drinks) => {
                Self::Drinks(drinks.into_iter().filter(|drink| drink.id != id).collect())
            }
            other => other,
        }
    }
}

/// State of the two search screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewState {
    /// The text currently driving the result list.
    pub query: String,
    pub items: ItemsPhase,
}

impl SearchViewState {
    pub fn with_items(mut self, items: ItemsPhase) -> Self {
        self.items = items;
        self
    }
}

impl ViewState for SearchViewState {}

/// State of the favorites screen; it has no query box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesViewState {
    pub items: ItemsPhase,
}

impl ViewState for FavoritesViewState {}

#[cfg(test)]
mod tests {
    use super::*;

    fn drink(id: &str, favorite: bool) -> Drink {
        Drink {
            id: id.to_string(),
            name: id.to_string(),
            thumb: None,
            ingredients: Vec::new(),
            is_favorite: favorite,
        }
    }

    #[test]
    fn with_favorite_rewrites_only_the_matching_row() {
        let phase = ItemsPhase::Drinks(vec![drink("1", false), drink("2", false)]);
        let phase = phase.with_favorite("2", true);
        let drinks = phase.drinks().unwrap();
        assert!(!drinks[0].is_favorite);
        assert!(drinks[1].is_favorite);
    }

    #[test]
    fn with_favorite_passes_non_list_phases_through() {
        assert_eq!(ItemsPhase::Loading.with_favorite("1", true), ItemsPhase::Loading);
        let error = ItemsPhase::Error("boom".to_string());
        assert_eq!(error.clone().with_favorite("1", true), error);
    }

    #[test]
    fn without_drink_drops_the_row() {
        let phase = ItemsPhase::Drinks(vec![drink("1", true), drink("2", true)]);
        let phase = phase.without_drink("1");
        let drinks = phase.drinks().unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id, "2");
    }
}
