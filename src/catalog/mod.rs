//! Drink catalog: data model, lookup interface and the HTTP client.

mod http;
mod model;
mod service;

pub use http::HttpCatalog;
pub use model::Drink;
pub use service::{CatalogError, CatalogService};
