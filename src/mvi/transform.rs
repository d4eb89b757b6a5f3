//! State transforms and the emission channel between pipeline runs and
//! the fold.

use tokio::sync::mpsc;

use super::state::ViewState;

/// A single state update produced by a pipeline run.
///
/// Components never mutate shared state; they produce transforms, and the
/// engine applies them one at a time, each seeing the output of the one
/// before it.
pub type Transform<S> = Box<dyn FnOnce(S) -> S + Send>;

/// A transform stamped with the run that produced it.
///
/// The generation lets the fold drop output of a run that has since been
/// replaced by a newer action of the same category, even when the
/// transform was already queued before the run was aborted.
pub(crate) struct Emission<C, S> {
    pub(crate) category: C,
    pub(crate) generation: u64,
    pub(crate) transform: Transform<S>,
}

/// Write half handed to one pipeline run.
pub struct Emitter<C, S> {
    tx: mpsc::UnboundedSender<Emission<C, S>>,
    category: C,
    generation: u64,
}

impl<C, S> Emitter<C, S>
where
    C: Copy + Send + 'static,
    S: ViewState,
{
    pub(crate) fn new(tx: mpsc::UnboundedSender<Emission<C, S>>, category: C, generation: u64) -> Self {
        Self {
            tx,
            category,
            generation,
        }
    }

    /// Queue a state transform for the fold. Never blocks.
    ///
    /// The transform is discarded by the fold if this run has been
    /// replaced in the meantime. A send failure only happens once the
    /// engine itself is gone and is deliberately ignored.
    pub fn emit<F>(&self, transform: F)
    where
        F: FnOnce(S) -> S + Send + 'static,
    {
        let _ = self.tx.send(Emission {
            category: self.category,
            generation: self.generation,
            transform: Box::new(transform),
        });
    }
}
