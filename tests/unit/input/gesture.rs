//! Tests for swipe parsing and drag classification

#[cfg(test)]
mod tests {
    use tilemerge::input::gesture::{
        DragTracker, classify_drag, parse_swipe, swipe_event_name,
    };
    use tilemerge::io::configuration::DRAG_DEAD_ZONE_PX;
    use tilemerge::spatial::Direction;

    // Tests every swipe name maps to its direction and back
    #[test]
    fn test_parse_swipe_names() {
        assert_eq!(parse_swipe("swiped-left"), Some(Direction::Left));
        assert_eq!(parse_swipe("swiped-right"), Some(Direction::Right));
        assert_eq!(parse_swipe("swiped-up"), Some(Direction::Up));
        assert_eq!(parse_swipe("swiped-down"), Some(Direction::Down));

        for direction in Direction::ALL {
            assert_eq!(parse_swipe(&swipe_event_name(direction)), Some(direction));
        }
    }

    // Tests unrelated event names are ignored
    #[test]
    fn test_parse_swipe_rejects_unknown() {
        assert_eq!(parse_swipe("swiped-sideways"), None);
        assert_eq!(parse_swipe("left"), None);
        assert_eq!(parse_swipe(""), None);
    }

    // Tests short drags inside the dead zone do nothing
    // Verified by using || instead of && in the dead-zone check
    #[test]
    fn test_drag_inside_dead_zone_is_ignored() {
        assert_eq!(classify_drag(29.0, -29.0, DRAG_DEAD_ZONE_PX), None);
        assert_eq!(classify_drag(0.0, 0.0, DRAG_DEAD_ZONE_PX), None);
        assert_eq!(
            classify_drag(30.0, 0.0, DRAG_DEAD_ZONE_PX),
            Some(Direction::Right)
        );
    }

    // Tests the dominant axis decides the direction
    #[test]
    fn test_drag_dominant_axis() {
        assert_eq!(
            classify_drag(-80.0, 35.0, DRAG_DEAD_ZONE_PX),
            Some(Direction::Left)
        );
        assert_eq!(
            classify_drag(10.0, 50.0, DRAG_DEAD_ZONE_PX),
            Some(Direction::Down)
        );
        assert_eq!(
            classify_drag(20.0, -45.0, DRAG_DEAD_ZONE_PX),
            Some(Direction::Up)
        );
    }

    // Tests equal magnitudes resolve to the vertical axis
    #[test]
    fn test_drag_tie_goes_vertical() {
        assert_eq!(
            classify_drag(40.0, 40.0, DRAG_DEAD_ZONE_PX),
            Some(Direction::Down)
        );
        assert_eq!(
            classify_drag(40.0, -40.0, DRAG_DEAD_ZONE_PX),
            Some(Direction::Up)
        );
    }

    // Tests the tracker measures from press to release
    #[test]
    fn test_tracker_press_release() {
        let mut tracker = DragTracker::new(DRAG_DEAD_ZONE_PX).unwrap();
        assert!(!tracker.is_dragging());

        tracker.press(100.0, 100.0);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.release(40.0, 110.0), Some(Direction::Left));
        assert!(!tracker.is_dragging());
    }

    // Tests a release without a press is ignored
    #[test]
    fn test_tracker_release_without_press() {
        let mut tracker = DragTracker::new(DRAG_DEAD_ZONE_PX).unwrap();
        assert_eq!(tracker.release(500.0, 0.0), None);

        tracker.press(0.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.release(500.0, 0.0), None);
    }

    // Tests invalid dead zones are rejected
    #[test]
    fn test_tracker_rejects_bad_dead_zone() {
        assert!(DragTracker::new(-1.0).is_err());
        assert!(DragTracker::new(f64::NAN).is_err());
        let tracker = DragTracker::new(0.0).unwrap();
        assert!(tracker.dead_zone().abs() < f64::EPSILON);
    }
}
