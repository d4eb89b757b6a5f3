//! The per-category unit of asynchronous work behind an action.

use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use super::state::ViewState;
use super::transform::Emitter;

/// Boxed future returned by pipeline runs, so the engine can spawn them
/// without knowing the concrete future type.
pub type RunFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Maps one action into an ordered sequence of state transforms.
///
/// A run usually emits twice: an immediate transform (loading phase, or
/// the optimistic favorite flip) and a terminal transform once its
/// awaited work resolves. Runs of the same category never overlap; the
/// engine aborts the previous run before starting the next one.
pub trait Pipeline: Send + Sync + 'static {
    type Action: Action;
    type State: ViewState;

    fn run(
        &self,
        action: Self::Action,
        emitter: Emitter<<Self::Action as Action>::Category, Self::State>,
    ) -> RunFuture;
}
