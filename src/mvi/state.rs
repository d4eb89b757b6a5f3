//! Base trait for view state in the MVI architecture.

/// Marker trait for view-state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the state before any action has folded.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
