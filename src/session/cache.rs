use std::collections::HashMap;

use crate::spatial::Grid;

/// Frozen board and score for one board size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
    score: u64,
}

impl Snapshot {
    /// Capture a board and its score
    pub const fn new(grid: Grid, score: u64) -> Self {
        Self { grid, score }
    }

    /// The captured board
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The captured score
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Split into owned board and score
    pub fn into_parts(self) -> (Grid, u64) {
        (self.grid, self.score)
    }
}

/// Per-size resume cache for the current session
///
/// Holds the last snapshot seen for every board size the player has visited
/// and not explicitly restarted.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    entries: HashMap<usize, Snapshot>,

    /// Cache usage statistics
    pub stats: CacheStats,
}

/// Usage counters for the snapshot cache
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Restores that found a snapshot
    pub hits: usize,
    /// Restores that found nothing
    pub misses: usize,
    /// Entries discarded by restarts
    pub evictions: usize,
}

impl SnapshotCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot for `size`
    pub fn store(&mut self, size: usize, snapshot: Snapshot) {
        self.entries.insert(size, snapshot);
    }

    /// Copy out the snapshot for `size`, recording a hit or miss
    pub fn restore(&mut self, size: usize) -> Option<Snapshot> {
        let found = self.entries.get(&size).cloned();
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Drop the snapshot for `size`, returning whether one existed
    pub fn evict(&mut self, size: usize) -> bool {
        let removed = self.entries.remove(&size).is_some();
        if removed {
            self.stats.evictions += 1;
        }
        removed
    }

    /// Look at a snapshot without touching statistics
    pub fn peek(&self, size: usize) -> Option<&Snapshot> {
        self.entries.get(&size)
    }

    /// Whether a snapshot exists for `size`
    pub fn contains(&self, size: usize) -> bool {
        self.entries.contains_key(&size)
    }

    /// Number of cached sizes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no size is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached sizes in ascending order
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.entries.keys().copied().collect();
        sizes.sort_unstable();
        sizes
    }
}
