//! Game constants and runtime configuration defaults

// Board dimensions offered by the size control
/// Board size used when none is requested
pub const DEFAULT_BOARD_SIZE: usize = 4;
/// Smallest selectable board size
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest selectable board size
pub const MAX_BOARD_SIZE: usize = 8;

/// Tiles placed on a fresh board before the first move
pub const INITIAL_TILES: usize = 2;

// Spawn table: 2 with probability 0.9, otherwise 4
/// Tile values that can spawn after a move
pub const SPAWN_VALUES: [u64; 2] = [2, 4];
/// Relative weights matching `SPAWN_VALUES`
pub const SPAWN_WEIGHTS: [f64; 2] = [0.9, 0.1];

/// Minimum pointer travel in pixels before a drag counts as a move
pub const DRAG_DEAD_ZONE_PX: f64 = 30.0;
/// Minimum mouse travel in terminal cells before a drag counts as a move
pub const TERMINAL_DRAG_DEAD_ZONE: f64 = 2.0;

// Viewport layout, in pixels for pixel hosts
/// Horizontal margin kept free around the board
pub const LAYOUT_HORIZONTAL_MARGIN: f64 = 40.0;
/// Vertical space kept free below header and controls
pub const LAYOUT_VERTICAL_MARGIN: f64 = 100.0;
/// Gap subtracted from each tile
pub const TILE_GAP: f64 = 10.0;

// Terminal layout, in cells
/// Rows taken by the title, size and score lines above the board
pub const TERMINAL_HEADER_ROWS: u16 = 4;
/// Rows taken by the key help below the board
pub const TERMINAL_FOOTER_ROWS: u16 = 2;
/// Terminal cells are roughly twice as tall as they are wide
pub const TERMINAL_CELL_ASPECT: u16 = 2;

// Snapshot export
/// Edge length in pixels of one tile in exported snapshots
pub const SNAPSHOT_TILE_PX: u32 = 64;
/// Gap in pixels between tiles in exported snapshots
pub const SNAPSHOT_GAP_PX: u32 = 8;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
