//! Board sizing from the available viewport
//!
//! The board is a square as large as the tighter of the two viewport axes
//! allows after reserving room for the surrounding controls; tiles split
//! that square evenly minus a fixed gap.

use crate::io::configuration::{
    LAYOUT_HORIZONTAL_MARGIN, LAYOUT_VERTICAL_MARGIN, TERMINAL_CELL_ASPECT,
    TERMINAL_FOOTER_ROWS, TERMINAL_HEADER_ROWS, TILE_GAP,
};

/// Custom property carrying the board dimension
pub const BOARD_SIZE_PROPERTY: &str = "--board-size";
/// Custom property carrying the tile edge length
pub const TILE_SIZE_PROPERTY: &str = "--tile-size";

/// Pixel layout of the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Board dimension in tiles
    pub board_size: usize,
    /// Edge length of the square board in pixels
    pub board_extent: f64,
    /// Edge length of one tile in pixels
    pub tile_extent: f64,
}

impl BoardLayout {
    /// Fit a board into a viewport
    ///
    /// `chrome_height` is the space taken by the header and controls above
    /// the board.
    pub fn fit(
        board_size: usize,
        viewport_width: f64,
        viewport_height: f64,
        chrome_height: f64,
    ) -> Self {
        let available_width = viewport_width - LAYOUT_HORIZONTAL_MARGIN;
        let available_height = viewport_height - (chrome_height + LAYOUT_VERTICAL_MARGIN);
        let board_extent = available_width.min(available_height).max(0.0);
        let tile_extent = (board_extent / board_size.max(1) as f64 - TILE_GAP).max(0.0);

        Self {
            board_size,
            board_extent,
            tile_extent,
        }
    }

    /// The `--board-size` and `--tile-size` custom properties
    pub fn custom_properties(&self) -> [(&'static str, String); 2] {
        [
            (BOARD_SIZE_PROPERTY, self.board_size.to_string()),
            (TILE_SIZE_PROPERTY, format!("{}px", self.tile_extent)),
        ]
    }
}

/// Character-cell layout of the board in a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalLayout {
    /// Columns per tile, borders excluded
    pub tile_width: u16,
    /// Rows per tile, borders excluded
    pub tile_height: u16,
    /// Left column of the board
    pub origin_x: u16,
    /// Top row of the board
    pub origin_y: u16,
}

impl TerminalLayout {
    /// Fit a board into a terminal of `columns` x `rows`
    ///
    /// Tiles keep a roughly square on-screen shape. Returns `None` when a tile
    /// would be narrower than `label_width` plus one column of padding on each
    /// side, or when no tile row fits.
    pub fn fit(board_size: usize, columns: u16, rows: u16, label_width: usize) -> Option<Self> {
        let size = u16::try_from(board_size.max(1)).ok()?;
        let available_rows = rows.saturating_sub(TERMINAL_HEADER_ROWS + TERMINAL_FOOTER_ROWS);

        // Each tile owns one border line; the board adds a closing border
        let max_width = (columns.saturating_sub(1) / size).saturating_sub(1);
        let max_height = (available_rows.saturating_sub(1) / size).saturating_sub(1);
        if max_height == 0 {
            return None;
        }

        let tile_width = max_width.min(max_height.saturating_mul(TERMINAL_CELL_ASPECT));
        let needed = u16::try_from(label_width.max(1) + 2).ok()?;
        if tile_width < needed {
            return None;
        }
        let tile_height = (tile_width / TERMINAL_CELL_ASPECT).clamp(1, max_height);

        let layout = Self {
            tile_width,
            tile_height,
            origin_x: 0,
            origin_y: TERMINAL_HEADER_ROWS,
        };
        let board_columns = u16::try_from(layout.board_columns(board_size)).unwrap_or(columns);

        Some(Self {
            origin_x: columns.saturating_sub(board_columns) / 2,
            ..layout
        })
    }

    /// Total columns spanned by a board of `board_size`
    pub fn board_columns(&self, board_size: usize) -> usize {
        board_size * (usize::from(self.tile_width) + 1) + 1
    }

    /// Total rows spanned by a board of `board_size`
    pub fn board_rows(&self, board_size: usize) -> usize {
        board_size * (usize::from(self.tile_height) + 1) + 1
    }
}
