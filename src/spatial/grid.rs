//! Square board storage with line access along any slide direction
//!
//! Cells are held in a dense 2D array where 0 marks an empty cell and any
//! other value is a tile. Moves never index the array directly; they read and
//! write whole lines through [`Grid::line`] and [`Grid::set_line`], which
//! order cells from the edge the tiles slide toward.

use ndarray::Array2;

use crate::io::error::{GameError, Result, invalid_parameter};
use crate::spatial::direction::Direction;

/// Value stored in a cell (0 for empty)
pub type Cell = u64;

/// Whether a value may appear on the board
pub const fn is_valid_tile(value: Cell) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Square board of power-of-two tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an empty board of `size` x `size` cells
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"board must have at least one cell",
            ));
        }

        Ok(Self {
            cells: Array2::zeros((size, size)),
        })
    }

    /// Build a board from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No rows are given
    /// - Any row length differs from the number of rows
    /// - A nonzero value is not a power of two of at least 2
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut grid = Self::new(size)?;

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::DimensionMismatch {
                    expected: size,
                    found: row.len(),
                });
            }

            for (col_index, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile {
                        row: row_index,
                        col: col_index,
                        value,
                    });
                }
                if let Some(cell) = grid.cells.get_mut([row_index, col_index]) {
                    *cell = value;
                }
            }
        }

        Ok(grid)
    }

    /// Board dimension
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Raw cell matrix
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell value, or `None` outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get([row, col]).copied()
    }

    /// Overwrite one cell
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the board or the value
    /// is not a valid tile
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<()> {
        if !is_valid_tile(value) {
            return Err(GameError::InvalidTile { row, col, value });
        }

        let size = self.size();
        let cell = self.cells.get_mut([row, col]).ok_or_else(|| {
            invalid_parameter(
                "position",
                &format!("({row}, {col})"),
                &format!("outside a {size}x{size} board"),
            )
        })?;
        *cell = value;
        Ok(())
    }

    /// Copy of the board as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<[usize; 2]> {
        self.cells
            .indexed_iter()
            .filter(|(_, value)| **value == 0)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Whether no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Read one line in edge-first order for `direction`
    ///
    /// Lines are rows for horizontal moves and columns for vertical moves.
    pub fn line(&self, direction: Direction, index: usize) -> Vec<Cell> {
        direction
            .line_cells(self.size(), index)
            .map(|pos| self.cells.get(pos).copied().unwrap_or(0))
            .collect()
    }

    /// Write one line back using the same order as [`Grid::line`]
    pub fn set_line(&mut self, direction: Direction, index: usize, values: &[Cell]) {
        for (pos, &value) in direction.line_cells(self.size(), index).zip(values) {
            if let Some(cell) = self.cells.get_mut(pos) {
                *cell = value;
            }
        }
    }
}
