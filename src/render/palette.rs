//! Fixed tile colors keyed by value

use crate::spatial::grid::Cell;

/// Background for values the table does not list
pub const FALLBACK_TILE_COLOR: &str = "#3c3a32";
/// Text color on light tiles (values up to 4)
pub const DARK_TEXT_COLOR: &str = "#776e65";
/// Text color on every other tile
pub const LIGHT_TEXT_COLOR: &str = "#f9f6f2";
/// Background of an empty cell
pub const EMPTY_CELL_COLOR: &str = "#cdc1b4";
/// Background of the board behind the cells
pub const BOARD_COLOR: &str = "#bbada0";

const TILE_COLORS: [(Cell, &str); 20] = [
    (2, "#eee4da"),
    (4, "#ede0c8"),
    (8, "#f2b179"),
    (16, "#f59563"),
    (32, "#f67c5f"),
    (64, "#f65e3b"),
    (128, "#edcf72"),
    (256, "#edcc61"),
    (512, "#edc850"),
    (1024, "#edc53f"),
    (2048, "#edc22e"),
    (4096, "#3c3a32"),
    (8192, "#66533c"),
    (16_384, "#776e65"),
    (32_768, "#8b7d6b"),
    (65_536, "#9f8c72"),
    (131_072, "#b39b79"),
    (262_144, "#c7aa80"),
    (524_288, "#dcb988"),
    (1_048_576, "#f0c890"),
];

/// Background color of a tile
pub fn tile_color(value: Cell) -> &'static str {
    TILE_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == value)
        .map_or(FALLBACK_TILE_COLOR, |(_, color)| *color)
}

/// Text color of a tile
pub const fn text_color(value: Cell) -> &'static str {
    if value <= 4 {
        DARK_TEXT_COLOR
    } else {
        LIGHT_TEXT_COLOR
    }
}

/// Parse a `#rrggbb` color into RGB components
///
/// Malformed input yields black.
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };

    if digits.len() == 6 {
        [channel(0..2), channel(2..4), channel(4..6)]
    } else {
        [0, 0, 0]
    }
}
