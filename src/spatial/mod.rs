//! Board storage and geometry
//!
//! This module contains:
//! - The square cell matrix
//! - Slide directions and edge-first line traversal

/// Slide directions and line traversal order
pub mod direction;
/// Square board storage and line access
pub mod grid;

pub use direction::Direction;
pub use grid::Grid;
