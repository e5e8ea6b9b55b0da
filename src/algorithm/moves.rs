//! Whole-board moves built from the single-line compress

use crate::algorithm::compress::compress;
use crate::spatial::grid::Cell;
use crate::spatial::{Direction, Grid};

/// What a move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any line changed
    pub moved: bool,
    /// Sum of merge values across all lines
    pub points: Cell,
}

/// Slide and merge every line of the board toward `direction`
///
/// Each row (horizontal moves) or column (vertical moves) is read edge-first,
/// compressed, and written back only if it changed.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for index in 0..grid.size() {
        let line = grid.line(direction, index);
        let compressed = compress(&line);

        if compressed.changed_from(&line) {
            grid.set_line(direction, index, &compressed.line);
            outcome.moved = true;
            outcome.points = outcome.points.saturating_add(compressed.points);
        }
    }

    outcome
}

/// Whether sliding toward `direction` would change the board
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    (0..grid.size()).any(|index| {
        let line = grid.line(direction, index);
        compress(&line).changed_from(&line)
    })
}
