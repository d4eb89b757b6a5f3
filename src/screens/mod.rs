//! Screen wiring: one engine instantiation per screen.
//!
//! Each screen module exposes its action enum, its pipeline, and a
//! constructor that injects the catalog service and favorite store
//! explicitly. Screens only push actions into the returned [`Engine`]
//! and observe state out of it.

pub mod base;
pub mod favorites;
pub mod query;
mod state;
mod toggle;

pub use state::{FavoritesViewState, ItemsPhase, SearchViewState};
