//! PNG export of the board as colored tile squares

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::error::{GameError, Result, invalid_parameter};
use crate::render::board::BoardView;
use crate::render::palette::{BOARD_COLOR, hex_to_rgb};
use crate::spatial::Grid;

fn rgba(hex: &str) -> Rgba<u8> {
    let [r, g, b] = hex_to_rgb(hex);
    Rgba([r, g, b, 255])
}

/// Edge length in pixels of a snapshot for a board of `board_size`
///
/// Returns `None` when the extent does not fit in a `u32`.
pub const fn snapshot_extent(board_size: u32, tile_px: u32, gap_px: u32) -> Option<u32> {
    let Some(tiles) = board_size.checked_mul(tile_px) else {
        return None;
    };
    let Some(gaps) = board_size.saturating_add(1).checked_mul(gap_px) else {
        return None;
    };
    tiles.checked_add(gaps)
}

/// Export the board as a PNG image
///
/// Each cell is drawn as a `tile_px` square in its palette color over the
/// board background, with `gap_px` between cells and around the edge. Labels
/// are not drawn.
///
/// # Errors
///
/// Returns an error if:
/// - `tile_px` is zero
/// - The snapshot extent overflows a `u32`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    grid: &Grid,
    output_path: &Path,
    tile_px: u32,
    gap_px: u32,
) -> Result<()> {
    if tile_px == 0 {
        return Err(invalid_parameter("tile_px", &tile_px, &"must be positive"));
    }

    let view = BoardView::from_grid(grid);
    let board_size = u32::try_from(view.size)
        .map_err(|e| invalid_parameter("board_size", &view.size, &e))?;
    let extent = snapshot_extent(board_size, tile_px, gap_px).ok_or_else(|| {
        invalid_parameter(
            "tile_px",
            &format!("{tile_px} (gap {gap_px})"),
            &"snapshot extent overflows u32",
        )
    })?;

    let mut img = ImageBuffer::from_pixel(extent, extent, rgba(BOARD_COLOR));

    // Offsets stay below `extent`, which fit in a u32
    for tile in &view.tiles {
        let color = rgba(tile.background);
        let left = gap_px + tile.col as u32 * (tile_px + gap_px);
        let top = gap_px + tile.row as u32 * (tile_px + gap_px);

        for y in top..top + tile_px {
            for x in left..left + tile_px {
                img.put_pixel(x, y, color);
            }
        }
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GameError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %output_path.display(), "exported board snapshot");
    Ok(())
}
