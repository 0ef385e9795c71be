//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloneable values holding everything the view needs, and
/// comparable so callers can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
