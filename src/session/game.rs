//! Game session tying board, score, resume cache, and overlay together
//!
//! All mutable game state lives in [`GameSession`]; front ends translate
//! input into calls on it and render from its accessors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::spawn::{SpawnedTile, TileSpawner};
use crate::algorithm::{apply_move, is_game_over};
use crate::io::configuration::{INITIAL_TILES, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::render::overlay::GameOverOverlay;
use crate::session::cache::{Snapshot, SnapshotCache};
use crate::spatial::{Direction, Grid};

/// Result of one move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether any line changed
    pub moved: bool,
    /// Points gained by this move
    pub points: u64,
    /// Tile spawned after the move, if it moved
    pub spawned: Option<SpawnedTile>,
    /// Whether the board is terminal after the move
    pub game_over: bool,
}

/// How a board-size switch was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChange {
    /// A cached board and score were resumed
    Restored,
    /// No cached board existed; a fresh one was seeded
    Fresh,
}

/// Check that `size` is within the selectable range
///
/// # Errors
///
/// Returns an error if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
pub fn validate_board_size(size: usize) -> Result<usize> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(invalid_parameter(
            "board_size",
            &size,
            &format!("must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"),
        ))
    }
}

/// One player's session: the live board plus everything needed to resume other sizes
pub struct GameSession<R = StdRng> {
    board_size: usize,
    grid: Grid,
    score: u64,
    cache: SnapshotCache,
    spawner: TileSpawner,
    overlay: GameOverOverlay,
    rng: R,
}

impl GameSession<StdRng> {
    /// Start a session with a reproducible tile sequence
    ///
    /// # Errors
    ///
    /// Returns an error if `board_size` is out of range
    pub fn from_seed(board_size: usize, seed: u64) -> Result<Self> {
        Self::new(board_size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session on a fresh board of `board_size`
    ///
    /// # Errors
    ///
    /// Returns an error if `board_size` is out of range
    pub fn new(board_size: usize, rng: R) -> Result<Self> {
        Self::with_spawner(board_size, rng, TileSpawner::default())
    }

    /// Start a session with a custom spawner
    ///
    /// # Errors
    ///
    /// Returns an error if `board_size` is out of range
    pub fn with_spawner(board_size: usize, rng: R, spawner: TileSpawner) -> Result<Self> {
        let board_size = validate_board_size(board_size)?;
        let mut session = Self {
            board_size,
            grid: Grid::new(board_size)?,
            score: 0,
            cache: SnapshotCache::new(),
            spawner,
            overlay: GameOverOverlay::new(),
            rng,
        };
        session.start_fresh()?;
        tracing::info!(board_size, "session started");
        Ok(session)
    }

    /// Resume a session from an existing board and score
    ///
    /// The board size is taken from `grid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is out of range
    pub fn from_grid(grid: Grid, score: u64, rng: R) -> Result<Self> {
        let board_size = validate_board_size(grid.size())?;
        let mut session = Self {
            board_size,
            grid,
            score,
            cache: SnapshotCache::new(),
            spawner: TileSpawner::default(),
            overlay: GameOverOverlay::new(),
            rng,
        };
        session.sync_overlay();
        Ok(session)
    }

    /// Current board size
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Current board
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Resume cache for all visited sizes
    pub const fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Game-over overlay state
    pub const fn overlay(&self) -> &GameOverOverlay {
        &self.overlay
    }

    /// Whether the current board is terminal
    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.grid)
    }

    /// Slide the board toward `direction`
    ///
    /// A move that changes nothing scores nothing and spawns nothing, but the
    /// board is still written to the cache and checked for game over. The
    /// score saturates at `u64::MAX`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let outcome = apply_move(&mut self.grid, direction);

        let spawned = if outcome.moved {
            self.score = self.score.saturating_add(outcome.points);
            self.spawner.spawn(&mut self.grid, &mut self.rng)
        } else {
            None
        };

        self.persist();

        let game_over = is_game_over(&self.grid);
        if game_over {
            tracing::info!(score = self.score, board_size = self.board_size, "game over");
            self.overlay.show(self.score);
        }

        MoveReport {
            moved: outcome.moved,
            points: outcome.points,
            spawned,
            game_over,
        }
    }

    /// Switch to another board size, resuming its cached game if one exists
    ///
    /// The outgoing board is cached first so switching back resumes it.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is out of range
    pub fn select_size(&mut self, size: usize) -> Result<SizeChange> {
        let size = validate_board_size(size)?;
        self.persist();
        self.board_size = size;

        if let Some(snapshot) = self.cache.restore(size) {
            let (grid, score) = snapshot.into_parts();
            self.grid = grid;
            self.score = score;
            self.sync_overlay();
            tracing::info!(board_size = size, score, "restored cached board");
            Ok(SizeChange::Restored)
        } else {
            self.start_fresh()?;
            tracing::info!(board_size = size, "started fresh board");
            Ok(SizeChange::Fresh)
        }
    }

    /// Step the board size by `delta`, clamped to the selectable range
    ///
    /// Returns `None` when the clamped size equals the current one.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`GameSession::select_size`]
    pub fn step_size(&mut self, delta: isize) -> Result<Option<SizeChange>> {
        let target = self
            .board_size
            .saturating_add_signed(delta)
            .clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        if target == self.board_size {
            return Ok(None);
        }
        self.select_size(target).map(Some)
    }

    /// Discard the cached game for the current size and start over
    ///
    /// # Errors
    ///
    /// Returns an error if the fresh board cannot be created
    pub fn restart(&mut self) -> Result<()> {
        if self.cache.evict(self.board_size) {
            tracing::info!(board_size = self.board_size, "discarded cached board");
        }
        self.start_fresh()
    }

    /// Restart from the game-over overlay
    ///
    /// Returns `false` without touching the game when the overlay is hidden.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`GameSession::restart`]
    pub fn confirm_restart(&mut self) -> Result<bool> {
        if !self.overlay.is_visible() {
            return Ok(false);
        }
        self.restart()?;
        Ok(true)
    }

    fn start_fresh(&mut self) -> Result<()> {
        self.grid = Grid::new(self.board_size)?;
        self.score = 0;
        self.overlay.hide();
        let seeded = self
            .spawner
            .seed(&mut self.grid, &mut self.rng, INITIAL_TILES);
        tracing::debug!(
            board_size = self.board_size,
            tiles = seeded.len(),
            "seeded fresh board"
        );
        Ok(())
    }

    fn persist(&mut self) {
        self.cache.store(
            self.board_size,
            Snapshot::new(self.grid.clone(), self.score),
        );
    }

    fn sync_overlay(&mut self) {
        if is_game_over(&self.grid) {
            self.overlay.show(self.score);
        } else {
            self.overlay.hide();
        }
    }
}
