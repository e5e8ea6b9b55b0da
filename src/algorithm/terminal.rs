use crate::spatial::Grid;

/// Whether any two orthogonally adjacent tiles hold the same value
///
/// Checking each cell against its right and lower neighbour covers every
/// adjacent pair exactly once.
pub fn has_adjacent_pair(grid: &Grid) -> bool {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let Some(value) = grid.get(row, col).filter(|&v| v != 0) else {
                continue;
            };
            if grid.get(row, col + 1) == Some(value) || grid.get(row + 1, col) == Some(value) {
                return true;
            }
        }
    }
    false
}

/// Whether the game has ended: the board is full and no merge is possible
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_full() && !has_adjacent_pair(grid)
}
