use crate::spatial::Direction;

/// Player intent after input normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the board
    Move(Direction),
    /// Discard the current board and start over
    NewGame,
    /// Restart from the game-over overlay
    ConfirmRestart,
    /// Step the board size up or down
    Resize(isize),
    /// Leave the game
    Quit,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}
