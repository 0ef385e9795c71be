//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses, submitted lines) and
/// system events (API responses). They are processed by reducers to
/// produce new states.
pub trait Intent: Send + 'static {}
