//! Presentation: styled tiles, layout, and the game-over overlay

/// Board projection into styled tiles
pub mod board;
/// Viewport-driven board sizing
pub mod layout;
/// Game-over overlay state
pub mod overlay;
/// Tile color lookup
pub mod palette;

pub use board::{BoardView, TileView};
pub use overlay::GameOverOverlay;
