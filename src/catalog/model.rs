//! Catalog data model.

use serde::{Deserialize, Serialize};

/// One drink from the catalog.
///
/// `is_favorite` is never taken from the catalog service; it is
/// overwritten by merging against the local favorite store before the
/// value reaches any view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    /// Stable catalog id, unique per drink.
    pub id: String,
    pub name: String,
    /// Thumbnail URL, when the catalog has one.
    pub thumb: Option<String>,
    /// Ingredient lines in recipe order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Drink {
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}
