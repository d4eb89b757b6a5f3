//! Base trait for actions (user intents) in the MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// A discrete user intent fed into a state pipeline.
///
/// Actions represent:
/// - User input (typed text, taps on a row)
/// - Navigation-driven loads
///
/// Actions are routed by category and turned into state transforms by the
/// screen's pipeline.
pub trait Action: Clone + Send + Sync + 'static {
    /// Routing key. Each category runs at most one pipeline unit at a
    /// time; a newer action of the same category replaces the in-flight
    /// run.
    type Category: Copy + Eq + Hash + Debug + Send + 'static;

    /// The category this action belongs to, or `None` if the receiving
    /// screen does not route it. Unrouted actions are dropped without
    /// error.
    fn category(&self) -> Option<Self::Category>;
}
