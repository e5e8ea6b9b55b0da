//! Projection of board state into styled tiles
//!
//! The view is rebuilt from the grid on every render; nothing is diffed or
//! retained between frames.

use crate::render::palette::{EMPTY_CELL_COLOR, text_color, tile_color};
use crate::spatial::Grid;
use crate::spatial::grid::Cell;

/// Visual state of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Row of the cell
    pub row: usize,
    /// Column of the cell
    pub col: usize,
    /// Tile value (0 for empty)
    pub value: Cell,
    /// Label drawn on the tile, absent for empty cells
    pub label: Option<String>,
    /// Background color as `#rrggbb`
    pub background: &'static str,
    /// Text color as `#rrggbb`, absent for empty cells
    pub foreground: Option<&'static str>,
}

impl TileView {
    fn project(row: usize, col: usize, value: Cell) -> Self {
        if value == 0 {
            Self {
                row,
                col,
                value,
                label: None,
                background: EMPTY_CELL_COLOR,
                foreground: None,
            }
        } else {
            Self {
                row,
                col,
                value,
                label: Some(value.to_string()),
                background: tile_color(value),
                foreground: Some(text_color(value)),
            }
        }
    }

    /// Whether the cell holds no tile
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// All tiles of a board in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Board dimension
    pub size: usize,
    /// One view per cell, row-major
    pub tiles: Vec<TileView>,
}

impl BoardView {
    /// Build the view for `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        let tiles = grid
            .cells()
            .indexed_iter()
            .map(|((row, col), &value)| TileView::project(row, col, value))
            .collect();

        Self {
            size: grid.size(),
            tiles,
        }
    }

    /// Tiles of one row
    pub fn row(&self, row: usize) -> &[TileView] {
        let start = row * self.size;
        self.tiles.get(start..start + self.size).unwrap_or(&[])
    }

    /// Width in characters of the widest label
    pub fn widest_label(&self) -> usize {
        self.tiles
            .iter()
            .filter_map(|tile| tile.label.as_ref().map(String::len))
            .max()
            .unwrap_or(1)
    }

    /// Plain-text rendering with one line per row and `.` for empty cells
    pub fn to_text(&self) -> String {
        let width = self.widest_label();
        (0..self.size)
            .map(|row| {
                self.row(row)
                    .iter()
                    .map(|tile| format!("{:>width$}", tile.label.as_deref().unwrap_or(".")))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
