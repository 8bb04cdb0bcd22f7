//! PNG rendering of grids with per-side tile colours

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    CONTRADICTION_COLOR, MAX_CELL_SIZE, MAX_IMAGE_PIXELS, UNDECIDED_COLOR,
};
use crate::io::error::{Result, WfcError, invalid_argument};
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;

/// Darkest shade used for an undecided cell with two candidates left
const UNDECIDED_FLOOR: u8 = 96;

/// Colours used to draw one tile
///
/// A tile is drawn as a centre square surrounded by four triangles, one per
/// side, so that edge labels are visible where tiles meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    /// Colour of the centre square
    pub center: [u8; 4],
    /// Side colours in north, east, south, west order
    pub sides: [[u8; 4]; 4],
}

impl TileStyle {
    /// Style painting the whole tile in one colour
    pub const fn solid(color: [u8; 4]) -> Self {
        Self {
            center: color,
            sides: [color; 4],
        }
    }

    // Colour of pixel (u, v) of a size x size tile, v counted from the top
    fn pixel(&self, u: u32, v: u32, size: u32) -> [u8; 4] {
        let last = size.saturating_sub(1);
        let distances = [v, last - u, last - v, u];
        let (side, nearest) = distances
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, distance)| distance)
            .unwrap_or((0, 0));

        if nearest >= size / 4 {
            self.center
        } else {
            self.sides.get(side).copied().unwrap_or(self.center)
        }
    }
}

/// Shade for a cell that still has `options` of `tile_count` candidates
///
/// More candidates render lighter, up to `UNDECIDED_COLOR`.
pub fn undecided_color(options: usize, tile_count: usize) -> [u8; 4] {
    let ratio = if tile_count > 1 {
        options.saturating_sub(1) as f64 / (tile_count - 1) as f64
    } else {
        1.0
    };
    let [r, g, b, a] = UNDECIDED_COLOR;
    let shade = |channel: u8| {
        let floor = f64::from(UNDECIDED_FLOOR.min(channel));
        (f64::from(channel) - floor).mul_add(ratio.clamp(0.0, 1.0), floor) as u8
    };
    [shade(r), shade(g), shade(b), a]
}

/// Check that a `width` x `height` grid can be rendered at `cell_size`
///
/// # Errors
///
/// Returns `InvalidArgument` if `cell_size` is zero or above
/// `MAX_CELL_SIZE`, or if the image would exceed `MAX_IMAGE_PIXELS`
pub fn check_image_size(width: usize, height: usize, cell_size: u32) -> Result<()> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_argument(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }
    let pixels = (width as u64 * u64::from(cell_size))
        .saturating_mul(height as u64 * u64::from(cell_size));
    if pixels > MAX_IMAGE_PIXELS {
        return Err(invalid_argument(
            "cell_size",
            &cell_size,
            &format!("a {width}x{height} grid would render {pixels} pixels, above {MAX_IMAGE_PIXELS}"),
        ));
    }
    Ok(())
}

/// Render `grid` with one `cell_size` square per cell
///
/// Row `y = height - 1` is drawn at the top so north points up. Empty cells
/// are drawn in `CONTRADICTION_COLOR` and undecided cells in grey.
///
/// # Errors
///
/// Returns `InvalidArgument` if the size fails [`check_image_size`] or if
/// `styles` has fewer entries than the grid has tiles
pub fn render_grid(grid: &Grid, styles: &[TileStyle], cell_size: u32) -> Result<RgbaImage> {
    check_image_size(grid.width(), grid.height(), cell_size)?;
    if styles.len() < grid.tile_count() {
        return Err(invalid_argument(
            "styles",
            &styles.len(),
            &format!("need one style per tile ({})", grid.tile_count()),
        ));
    }

    let height = grid.height();
    let tile_count = grid.tile_count();
    let image_width = grid.width() as u32 * cell_size;
    let image_height = height as u32 * cell_size;

    let image = RgbaImage::from_fn(image_width, image_height, |px, py| {
        let x = (px / cell_size) as usize;
        let row = (py / cell_size) as usize;
        let y = height.saturating_sub(row + 1);

        let color = grid.get([x, y]).map_or(CONTRADICTION_COLOR, |cell| {
            cell_color(cell, styles, tile_count, px % cell_size, py % cell_size, cell_size)
        });
        Rgba(color)
    });

    Ok(image)
}

fn cell_color(
    cell: &Cell,
    styles: &[TileStyle],
    tile_count: usize,
    u: u32,
    v: u32,
    size: u32,
) -> [u8; 4] {
    if cell.is_empty() {
        return CONTRADICTION_COLOR;
    }

    match cell.tile().and_then(|tile| styles.get(tile)) {
        Some(style) => style.pixel(u, v, size),
        None => undecided_color(cell.options_count(), tile_count),
    }
}

/// Export the rendered grid as a PNG file
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    styles: &[TileStyle],
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let image = render_grid(grid, styles, cell_size)?;

    create_parent_dir(output_path)?;

    image
        .save(output_path)
        .map_err(|e| WfcError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::debug!("wrote {}", output_path.display());
    Ok(())
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| WfcError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
