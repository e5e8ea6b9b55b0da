//! Tests for single-line pack, merge, and pad

#[cfg(test)]
mod tests {
    use tilemerge::algorithm::compress::compress;

    // Tests the basic merge toward index 0
    // Verified by dropping the points accumulation
    #[test]
    fn test_compress_merges_pair() {
        let result = compress(&[2u64, 2, 0, 0]);
        assert_eq!(result.line, vec![4, 0, 0, 0]);
        assert_eq!(result.points, 4);
    }

    // Tests a tile merges at most once per pass
    // Verified by re-scanning after each merge
    #[test]
    fn test_compress_merges_once_per_tile() {
        let result = compress(&[2u64, 2, 2, 2]);
        assert_eq!(result.line, vec![4, 4, 0, 0]);
        assert_eq!(result.points, 8);

        let result = compress(&[4u64, 4, 8, 0]);
        assert_eq!(result.line, vec![8, 8, 0, 0]);
        assert_eq!(result.points, 8);
    }

    // Tests gaps are packed before merging
    #[test]
    fn test_compress_packs_across_gaps() {
        let result = compress(&[2u64, 0, 0, 2]);
        assert_eq!(result.line, vec![4, 0, 0, 0]);

        let result = compress(&[0u64, 4, 0, 8]);
        assert_eq!(result.line, vec![4, 8, 0, 0]);
        assert_eq!(result.points, 0);
    }

    // Tests three equal tiles merge the leading pair only
    #[test]
    fn test_compress_odd_run_keeps_trailing_tile() {
        let result = compress(&[2u64, 2, 2, 0]);
        assert_eq!(result.line, vec![4, 2, 0, 0]);
        assert_eq!(result.points, 4);
    }

    // Tests output length always matches input length
    // Verified by removing the zero padding
    #[test]
    fn test_compress_preserves_length() {
        for line in [vec![0u64; 6], vec![2, 4, 8, 16, 32], vec![2, 2], vec![8]] {
            assert_eq!(compress(&line).line.len(), line.len());
        }
        assert!(compress::<u64>(&[]).line.is_empty());
    }

    // Tests compressing twice is the same as once, with no extra points
    #[test]
    fn test_compress_is_idempotent() {
        let lines: [[u64; 5]; 6] = [
            [2, 2, 2, 2, 2],
            [0, 2, 0, 2, 4],
            [16, 8, 8, 0, 16],
            [4, 4, 4, 4, 0],
            [0, 0, 0, 0, 0],
            [2, 4, 2, 4, 2],
        ];

        for line in lines {
            let once = compress(&line);
            let twice = compress(&once.line);
            assert_eq!(twice.line, once.line, "line {line:?}");
            assert_eq!(twice.points, 0, "line {line:?}");
        }
    }

    // Tests the changed_from helper compares against the original
    #[test]
    fn test_changed_from_detects_moves() {
        let line = [2u64, 4, 8, 0];
        assert!(!compress(&line).changed_from(&line));

        let line = [0u64, 2, 4, 8];
        assert!(compress(&line).changed_from(&line));
    }

    // Tests the compress is generic over integer widths
    #[test]
    fn test_compress_small_integer_type() {
        let result = compress(&[8u16, 8, 16, 16]);
        assert_eq!(result.line, vec![16, 32, 0, 0]);
        assert_eq!(result.points, 48);
    }

    // Tests a pair whose sum overflows the cell type stays unmerged
    // Verified by adding the pair without a checked add
    #[test]
    fn test_compress_top_of_range_pair() {
        let result = compress(&[128u8, 128, 0]);
        assert_eq!(result.line, vec![128, 128, 0]);
        assert_eq!(result.points, 0);
        assert!(!result.changed_from(&[128, 128, 0]));

        let top = 1u64 << 63;
        let result = compress(&[top, top, 2, 2]);
        assert_eq!(result.line, vec![top, top, 4, 0]);
        assert_eq!(result.points, 4);
    }

    // Tests points saturate rather than wrap when merges overflow the total
    #[test]
    fn test_compress_points_saturate() {
        let result = compress(&[64u8, 64, 64, 64, 32, 32]);
        assert_eq!(result.line, vec![128, 128, 64, 0, 0, 0]);
        assert_eq!(result.points, u8::MAX);
    }
}
