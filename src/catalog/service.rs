//! Catalog lookup interface.

use async_trait::async_trait;
use thiserror::Error;

use super::model::Drink;

/// Errors from catalog lookups.
///
/// The display text is what the screens surface in their error phase, so
/// every variant reads as a sentence.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {0}")]
    Status(u16),

    #[error("malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no drink with id '{id}'")]
    NotFound { id: String },
}

/// Read side of the drink catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Full drink by its stable id.
    async fn find_by_id(&self, id: &str) -> Result<Drink, CatalogError>;

    /// Search by drink name. An empty match list is `Ok(vec![])`, not an
    /// error.
    async fn find_by_name(&self, query: &str) -> Result<Vec<Drink>, CatalogError>;

    /// Drinks built on a base ingredient ("rum", "gin", ...).
    async fn find_by_base(&self, base: &str) -> Result<Vec<Drink>, CatalogError>;
}
