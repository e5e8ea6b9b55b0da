//! Command-line interface for starting an interactive game

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::input::gesture::DragTracker;
use crate::io::configuration::{
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SNAPSHOT_GAP_PX, SNAPSHOT_TILE_PX,
    TERMINAL_DRAG_DEAD_ZONE,
};
use crate::io::error::Result;
use crate::io::image::export_board_as_png;
use crate::io::terminal;
use crate::session::game::GameSession;

fn parse_board_size(value: &str) -> std::result::Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a board size: {e}"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}

#[derive(Parser, Debug)]
#[command(name = "tilemerge")]
#[command(author, version, about = "Slide and merge power-of-two tiles")]
/// Command-line arguments for the game
pub struct Cli {
    /// Starting board size
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    pub size: usize,

    /// Random seed for a reproducible tile sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mouse drag dead zone in terminal cells
    #[arg(short, long, default_value_t = TERMINAL_DRAG_DEAD_ZONE)]
    pub dead_zone: f64,

    /// Write a PNG of the final board on exit
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the session described by the arguments
    ///
    /// Without `--seed` the tile sequence is seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is out of range
    pub fn session(&self) -> Result<GameSession<StdRng>> {
        match self.seed {
            Some(seed) => GameSession::from_seed(self.size, seed),
            None => GameSession::new(self.size, StdRng::from_os_rng()),
        }
    }

    /// Build the drag tracker described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dead zone is negative or not finite
    pub fn drag_tracker(&self) -> Result<DragTracker> {
        DragTracker::new(self.dead_zone)
    }
}

/// Runs one interactive game from parsed arguments
pub struct GameRunner {
    cli: Cli,
}

impl GameRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Play until the player quits, then write the snapshot if requested
    ///
    /// # Errors
    ///
    /// Returns an error if session setup, the terminal, or snapshot export fails
    pub fn run(&self) -> Result<()> {
        let session = self.cli.session()?;
        let drag = self.cli.drag_tracker()?;

        let session = terminal::run(session, drag)?;
        tracing::info!(
            score = session.score(),
            max_tile = session.grid().max_tile(),
            "session ended"
        );

        if let Some(path) = &self.cli.snapshot {
            export_board_as_png(session.grid(), path, SNAPSHOT_TILE_PX, SNAPSHOT_GAP_PX)?;
        }

        Ok(())
    }
}
