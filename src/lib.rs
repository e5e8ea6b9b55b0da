//! Sliding power-of-two tile puzzle
//!
//! Tiles on a square board slide toward one edge and merge with equal
//! neighbours. The crate separates the board algorithm from the session that
//! tracks score and per-size resume state, and from the terminal front end.

#![forbid(unsafe_code)]

/// Compress, move, spawn, and game-over rules
pub mod algorithm;
/// Input normalization for keys, swipes, and drags
pub mod input;
/// Command line, terminal front end, errors, and exports
pub mod io;
/// Spawn-value distribution
pub mod math;
/// Tile projection, palette, layout, and overlay
pub mod render;
/// Game session and per-size snapshot cache
pub mod session;
/// Board storage and slide directions
pub mod spatial;

pub use io::error::{GameError, Result};
