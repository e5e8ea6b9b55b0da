//! Slide directions and the edge-first traversal of board lines

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GameError, invalid_parameter};

/// Direction tiles slide during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector of the slide as `[row delta, column delta]`
    pub const fn vector(self) -> [isize; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
            Self::Right => [0, 1],
        }
    }

    /// Whether the move acts on rows rather than columns
    pub const fn is_horizontal(self) -> bool {
        self.vector()[0] == 0
    }

    /// Grid coordinate of `position` along `line`, counted from the edge tiles slide toward
    ///
    /// Position 0 is always the cell against that edge, so a line read in this
    /// order merges toward index 0 regardless of direction.
    pub const fn cell(self, size: usize, line: usize, position: usize) -> [usize; 2] {
        let [dr, dc] = self.vector();
        let lead = if dr + dc < 0 {
            position
        } else {
            size - 1 - position
        };

        if dr == 0 { [line, lead] } else { [lead, line] }
    }

    /// Iterate the coordinates of one line in edge-first order
    pub fn line_cells(self, size: usize, line: usize) -> impl Iterator<Item = [usize; 2]> {
        (0..size).map(move |position| self.cell(size, line, position))
    }

    /// Lowercase name used by gesture events and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(invalid_parameter(
                "direction",
                &s,
                &"expected one of up, down, left, right",
            )),
        }
    }
}
