//! The per-screen state engine: category routing, run lifecycle, fold.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::action::Action;
use super::bus::{ActionBus, ActionSubscription};
use super::observer::StateObserver;
use super::pipeline::Pipeline;
use super::transform::{Emission, Emitter};

/// One screen's state machine.
///
/// Owns the action bus, the orchestrator task and the published state.
/// Callers push actions in with [`Engine::submit`] and read state out
/// with [`Engine::observe`]; nothing else crosses the boundary.
///
/// Emissions from different categories fold in arrival order with no
/// relative priority, so a favorite toggle and a search result that
/// resolve close together may interleave either way.
pub struct Engine<P: Pipeline> {
    bus: ActionBus<P::Action>,
    state_rx: watch::Receiver<P::State>,
    orchestrator: JoinHandle<()>,
}

impl<P: Pipeline> Engine<P> {
    /// Spawn the engine for one screen. The pipeline carries the
    /// screen-specific fetch logic and its injected collaborators.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(pipeline: Arc<P>) -> Self {
        let bus = ActionBus::new();
        let actions = bus.subscribe();
        let (state_tx, state_rx) = watch::channel(P::State::default());
        let orchestrator = tokio::spawn(orchestrate(actions, pipeline, state_tx));
        Self {
            bus,
            state_rx,
            orchestrator,
        }
    }

    /// Fire-and-forget action intake.
    pub fn submit(&self, action: P::Action) {
        self.bus.submit(action);
    }

    /// Subscribe to the state feed. The observer immediately yields the
    /// state current at subscription time, then every fold output.
    pub fn observe(&self) -> StateObserver<P::State> {
        StateObserver::new(self.state_rx.clone())
    }
}

impl<P: Pipeline> Drop for Engine<P> {
    fn drop(&mut self) {
        self.orchestrator.abort();
    }
}

/// Bookkeeping for one category's current run.
#[derive(Default)]
struct RunSlot {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

/// Single logical owner of one screen's state: routes actions, manages
/// run lifecycles and applies the fold. Nothing else writes the state.
async fn orchestrate<P: Pipeline>(
    mut actions: ActionSubscription<P::Action>,
    pipeline: Arc<P>,
    state_tx: watch::Sender<P::State>,
) {
    let (emit_tx, mut emit_rx) = mpsc::unbounded_channel();
    let mut runs: HashMap<<P::Action as Action>::Category, RunSlot> = HashMap::new();
    let mut state = P::State::default();

    loop {
        tokio::select! {
            action = actions.recv() => {
                let Some(action) = action else { break };
                let Some(category) = action.category() else {
                    trace!("unrouted action ignored");
                    continue;
                };
                let slot = runs.entry(category).or_default();
                slot.generation += 1;
                if let Some(handle) = slot.handle.take() {
                    // Latest action wins: the previous run of this
                    // category must not emit anything further.
                    handle.abort();
                    trace!(?category, "replaced in-flight run");
                }
                debug!(?category, generation = slot.generation, "starting run");
                let emitter = Emitter::new(emit_tx.clone(), category, slot.generation);
                slot.handle = Some(tokio::spawn(pipeline.run(action, emitter)));
            }
            emission = emit_rx.recv() => {
                // emit_tx lives in this scope, so the channel cannot close.
                let Some(Emission { category, generation, transform }) = emission else {
                    break;
                };
                let current = runs.get(&category).map_or(0, |slot| slot.generation);
                if generation != current {
                    // Queued by a run that was replaced after emitting.
                    trace!(?category, "discarding stale emission");
                    continue;
                }
                state = transform(state);
                let _ = state_tx.send(state.clone());
            }
        }
    }

    for slot in runs.values_mut() {
        if let Some(handle) = slot.handle.take() {
            handle.abort();
        }
    }
}
