//! Input normalization
//!
//! Keyboard keys, swipe event names, and pointer drags all reduce to a
//! [`Command`].

/// Normalized player commands
pub mod command;
/// Swipe names and drag gestures
pub mod gesture;
/// Terminal key bindings
pub mod keyboard;

pub use command::Command;
pub use gesture::{DragTracker, classify_drag, parse_swipe};
pub use keyboard::map_key;
