//! Random tile placement after successful moves

use rand::Rng;

use crate::math::probability::SpawnDistribution;
use crate::spatial::Grid;
use crate::spatial::grid::Cell;

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    /// Row of the new tile
    pub row: usize,
    /// Column of the new tile
    pub col: usize,
    /// Value of the new tile
    pub value: Cell,
}

/// Places tiles on uniformly random empty cells
#[derive(Debug, Clone, Default)]
pub struct TileSpawner {
    distribution: SpawnDistribution,
}

impl TileSpawner {
    /// Create a spawner drawing values from `distribution`
    pub const fn new(distribution: SpawnDistribution) -> Self {
        Self { distribution }
    }

    /// The value distribution in use
    pub const fn distribution(&self) -> &SpawnDistribution {
        &self.distribution
    }

    /// Place one tile on a random empty cell
    ///
    /// Returns `None` and leaves the board untouched when it is full.
    pub fn spawn<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Option<SpawnedTile> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let [row, col] = *empty.get(rng.random_range(0..empty.len()))?;
        let value = self.distribution.sample(rng.random::<f64>());

        grid.set(row, col, value).ok()?;
        tracing::debug!(row, col, value, "spawned tile");

        Some(SpawnedTile { row, col, value })
    }

    /// Place `count` tiles, stopping early if the board fills
    pub fn seed<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        count: usize,
    ) -> Vec<SpawnedTile> {
        (0..count)
            .map_while(|_| self.spawn(grid, rng))
            .collect()
    }
}
