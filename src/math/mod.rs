//! Mathematical utilities for the game

/// Weighted spawn-value distribution
pub mod probability;
