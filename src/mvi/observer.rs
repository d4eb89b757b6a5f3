//! Published view state with replay-latest subscriptions.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;

use super::state::ViewState;

/// Live feed of an engine's folded state.
///
/// A new observer sees the current state immediately, then every
/// subsequent fold output in order. All observers see the same sequence;
/// a late joiner is only replayed the latest value, not the history.
pub struct StateObserver<S> {
    rx: watch::Receiver<S>,
}

impl<S: ViewState> StateObserver<S> {
    pub(crate) fn new(mut rx: watch::Receiver<S>) -> Self {
        // The first recv() must resolve with the value already present.
        rx.mark_changed();
        Self { rx }
    }

    /// The latest folded state.
    pub fn current(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Wait for the next state. The first call returns the state current
    /// at subscription time. Returns `None` once the engine is gone.
    pub async fn recv(&mut self) -> Option<S> {
        if self.rx.changed().await.is_err() {
            return None;
        }
        Some(self.rx.borrow_and_update().clone())
    }

    /// Adapt to a [`Stream`] of states for combinator-style consumers.
    pub fn into_stream(self) -> StateStream<S> {
        StateStream {
            next: Box::pin(next_value(self.rx)),
        }
    }
}

async fn next_value<S: ViewState>(mut rx: watch::Receiver<S>) -> (Option<S>, watch::Receiver<S>) {
    match rx.changed().await {
        Ok(()) => {
            let value = rx.borrow_and_update().clone();
            (Some(value), rx)
        }
        Err(_) => (None, rx),
    }
}

type NextValue<S> = Pin<Box<dyn Future<Output = (Option<S>, watch::Receiver<S>)> + Send>>;

/// `Stream` adapter over a [`StateObserver`].
///
/// The receiver is threaded through an owned future between polls, so
/// the stream stays `Unpin` without borrowing from itself.
pub struct StateStream<S: ViewState> {
    next: NextValue<S>,
}

impl<S: ViewState> Stream for StateStream<S> {
    type Item = S;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        let this = self.get_mut();
        match this.next.as_mut().poll(cx) {
            Poll::Ready((item, rx)) => {
                this.next = Box::pin(next_value(rx));
                Poll::Ready(item)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
