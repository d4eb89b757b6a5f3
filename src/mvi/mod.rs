//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the generic engine for unidirectional data flow:
//!
//! ```text
//! Action ──→ ActionBus ──→ Engine ──┬──→ pipeline run (category A)
//!                                   └──→ pipeline run (category B)
//!                                             │ Transform emissions
//!                                             ▼
//!           StateObserver ←── publish ←── sequential fold
//! ```
//!
//! - **Action**: a user intent, routed by category
//! - **Pipeline**: maps one action into an ordered sequence of transforms
//! - **Engine**: latest-action-wins per category; folds transforms in
//!   arrival order and publishes the folded state
//! - **StateObserver**: replay-latest view of the fold output

mod action;
mod bus;
mod engine;
mod observer;
mod pipeline;
mod state;
mod transform;

pub use action::Action;
pub use bus::{ActionBus, ActionSubscription};
pub use engine::Engine;
pub use observer::{StateObserver, StateStream};
pub use pipeline::{Pipeline, RunFuture};
pub use state::ViewState;
pub use transform::{Emitter, Transform};
