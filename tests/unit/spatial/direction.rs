//! Tests for slide directions and line traversal

#[cfg(test)]
mod tests {
    use tilemerge::spatial::Direction;

    // Tests every direction starts its lines at the edge it slides toward
    // Verified by reversing the lead position for negative vectors
    #[test]
    fn test_line_cells_start_at_leading_edge() {
        let cells = |direction: Direction| direction.line_cells(4, 1).collect::<Vec<_>>();

        assert_eq!(cells(Direction::Left), vec![[1, 0], [1, 1], [1, 2], [1, 3]]);
        assert_eq!(cells(Direction::Right), vec![[1, 3], [1, 2], [1, 1], [1, 0]]);
        assert_eq!(cells(Direction::Up), vec![[0, 1], [1, 1], [2, 1], [3, 1]]);
        assert_eq!(cells(Direction::Down), vec![[3, 1], [2, 1], [1, 1], [0, 1]]);
    }

    // Tests vectors are unit steps on exactly one axis
    #[test]
    fn test_vectors() {
        for direction in Direction::ALL {
            let [dr, dc] = direction.vector();
            assert_eq!(dr.abs() + dc.abs(), 1);
            assert_eq!(direction.is_horizontal(), dr == 0);
        }
    }

    // Tests names parse back to their direction
    #[test]
    fn test_names_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
        assert_eq!(" UP ".parse::<Direction>().unwrap(), Direction::Up);
    }

    // Tests unknown names are rejected
    #[test]
    fn test_parse_unknown() {
        assert!("diagonal".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }
}
