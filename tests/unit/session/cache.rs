//! Tests for the per-size snapshot cache

#[cfg(test)]
mod tests {
    use tilemerge::session::cache::{CacheStats, Snapshot, SnapshotCache};
    use tilemerge::spatial::Grid;

    fn snapshot(size: usize, score: u64) -> Snapshot {
        Snapshot::new(Grid::new(size).unwrap(), score)
    }

    // Tests stored snapshots come back unchanged and count as hits
    #[test]
    fn test_store_and_restore() {
        let mut cache = SnapshotCache::new();
        let grid = Grid::from_rows(&[[2, 4], [0, 8]]).unwrap();
        cache.store(2, Snapshot::new(grid.clone(), 12));

        let restored = cache.restore(2).unwrap();
        assert_eq!(restored.grid(), &grid);
        assert_eq!(restored.score(), 12);
        assert_eq!(cache.stats.hits, 1);

        // Restoring copies rather than removes
        assert!(cache.contains(2));
    }

    // Tests missing sizes count as misses
    #[test]
    fn test_restore_miss() {
        let mut cache = SnapshotCache::new();
        assert!(cache.restore(5).is_none());
        assert_eq!(
            cache.stats,
            CacheStats {
                hits: 0,
                misses: 1,
                evictions: 0,
            }
        );
    }

    // Tests storing twice keeps only the latest snapshot
    #[test]
    fn test_store_overwrites() {
        let mut cache = SnapshotCache::new();
        cache.store(4, snapshot(4, 10));
        cache.store(4, snapshot(4, 30));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek(4).map(Snapshot::score), Some(30));
    }

    // Tests eviction removes one size and reports whether it existed
    // Verified by counting evictions of absent sizes
    #[test]
    fn test_evict() {
        let mut cache = SnapshotCache::new();
        cache.store(3, snapshot(3, 0));
        cache.store(6, snapshot(6, 0));

        assert!(cache.evict(3));
        assert!(!cache.evict(3));
        assert_eq!(cache.stats.evictions, 1);
        assert_eq!(cache.sizes(), vec![6]);
    }

    // Tests peek leaves statistics alone
    #[test]
    fn test_peek_does_not_count() {
        let mut cache = SnapshotCache::new();
        cache.store(4, snapshot(4, 0));

        assert!(cache.peek(4).is_some());
        assert!(cache.peek(5).is_none());
        assert_eq!(cache.stats, CacheStats::default());
    }

    // Tests sizes come back sorted
    #[test]
    fn test_sizes_sorted() {
        let mut cache = SnapshotCache::new();
        assert!(cache.is_empty());
        for size in [8, 2, 5] {
            cache.store(size, snapshot(size, 0));
        }
        assert_eq!(cache.sizes(), vec![2, 5, 8]);
    }

    // Tests a snapshot splits into its parts
    #[test]
    fn test_into_parts() {
        let (grid, score) = snapshot(3, 44).into_parts();
        assert_eq!(grid.size(), 3);
        assert_eq!(score, 44);
    }
}
