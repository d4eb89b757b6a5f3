//! Reactive state-orchestration core for a cocktail-catalog client.
//!
//! The crate turns streams of typed user actions (search input, favorite
//! taps) and asynchronous results into a single, consistently-ordered
//! view state per screen:
//!
//! ```text
//! action ──→ ActionBus ──→ category router ──→ pipeline run(s)
//!                                                    │ transforms
//!                                                    ▼
//!           observers ←── StateObserver ←── sequential fold
//! ```
//!
//! [`mvi`] holds the generic engine; [`catalog`], [`favorites`],
//! [`interactions`] and [`screens`] build the cocktail domain on top of
//! it. Collaborators (the catalog service and the favorite store) are
//! injected as trait objects; nothing in the crate reaches for globals.

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod interactions;
pub mod logging;
pub mod mvi;
pub mod screens;
