//! Game-over overlay state

/// Heading shown in the overlay
pub const OVERLAY_TITLE: &str = "Game Over!";
/// Label of the restart action
pub const RESTART_LABEL: &str = "Restart Game";

/// Modal shown when no move remains
///
/// One instance lives for the whole session; it is shown with the final
/// score and hidden again on restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOverOverlay {
    visible: bool,
    final_score: u64,
}

impl GameOverOverlay {
    /// Create a hidden overlay
    pub const fn new() -> Self {
        Self {
            visible: false,
            final_score: 0,
        }
    }

    /// Show the overlay with the score the game ended on
    pub const fn show(&mut self, final_score: u64) {
        self.final_score = final_score;
        self.visible = true;
    }

    /// Hide the overlay
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the overlay is displayed
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Score shown in the overlay
    pub const fn final_score(&self) -> u64 {
        self.final_score
    }

    /// Text lines of the overlay body
    pub fn lines(&self) -> [String; 3] {
        [
            OVERLAY_TITLE.to_string(),
            format!("Your Score: {}", self.final_score),
            format!("[r] {RESTART_LABEL}"),
        ]
    }
}
