//! Swipe events and pointer drags normalized to slide directions

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Direction;

/// Event name prefix used by swipe detectors
pub const SWIPE_EVENT_PREFIX: &str = "swiped-";

/// Parse a swipe event name such as `swiped-left`
///
/// Unknown names yield `None`; swipes are treated exactly like arrow keys.
pub fn parse_swipe(event_name: &str) -> Option<Direction> {
    event_name
        .strip_prefix(SWIPE_EVENT_PREFIX)
        .and_then(|rest| rest.parse().ok())
}

/// Swipe event name for `direction`
pub fn swipe_event_name(direction: Direction) -> String {
    format!("{SWIPE_EVENT_PREFIX}{direction}")
}

/// Classify a pointer displacement as a slide
///
/// Returns `None` while both components are inside the dead zone. Otherwise
/// the dominant axis wins, with ties going to the vertical axis, and the sign
/// picks the direction (screen y grows downward).
pub fn classify_drag(dx: f64, dy: f64, dead_zone: f64) -> Option<Direction> {
    if dx.abs() < dead_zone && dy.abs() < dead_zone {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Tracks a press-drag-release gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    dead_zone: f64,
    origin: Option<(f64, f64)>,
}

impl DragTracker {
    /// Create a tracker with the given dead zone
    ///
    /// # Errors
    ///
    /// Returns an error if `dead_zone` is negative or not finite
    pub fn new(dead_zone: f64) -> Result<Self> {
        if !dead_zone.is_finite() || dead_zone < 0.0 {
            return Err(invalid_parameter(
                "dead_zone",
                &dead_zone,
                &"must be finite and non-negative",
            ));
        }

        Ok(Self {
            dead_zone,
            origin: None,
        })
    }

    /// Dead zone applied to both axes
    pub const fn dead_zone(&self) -> f64 {
        self.dead_zone
    }

    /// Whether a press is being tracked
    pub const fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Record the press position
    pub const fn press(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    /// Finish the gesture at the release position
    ///
    /// A release without a tracked press is ignored.
    pub fn release(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (start_x, start_y) = self.origin.take()?;
        classify_drag(x - start_x, y - start_y, self.dead_zone)
    }

    /// Drop any tracked press
    pub const fn cancel(&mut self) {
        self.origin = None;
    }
}
