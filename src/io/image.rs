//! Rasterisation of tilings and PNG export

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{MAX_IMAGE_DIMENSION, MIN_CELL_SIZE_FOR_BORDER};
use crate::io::error::{DiamondError, Result, invalid_parameter};
use crate::spatial::{Color, ColorGrids, domino::Orientation};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BORDER: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render a tiling with each grid cell drawn as a `cell_size` square
///
/// Row 0 of the grid is drawn at the bottom of the image so that "up" in the
/// tiling is up on screen. Dominoes get a black outline once cells are large
/// enough for it to stay legible.
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero
/// - The resulting image would exceed the maximum dimension
pub fn render_tiling(grids: &ColorGrids, order: usize, cell_size: u32) -> Result<RgbaImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"cells must be at least one pixel wide",
        ));
    }

    let width_cells = (2 * order) as u64;
    let side = width_cells * u64::from(cell_size);
    if side > u64::from(MAX_IMAGE_DIMENSION) {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!(
                "an order-{order} diamond would be {side} pixels wide (max {MAX_IMAGE_DIMENSION})"
            ),
        ));
    }

    let side = side as u32;
    let mut img = RgbaImage::from_pixel(side, side, BACKGROUND);
    draw_tiling(&mut img, grids, order, cell_size, (0, 0));
    Ok(img)
}

/// Render a tiling centred on a square canvas of fixed side
///
/// The cell size is the largest integer that fits the whole diamond, never
/// less than one pixel, so very large orders are clipped rather than rejected.
pub fn render_frame(grids: &ColorGrids, order: usize, dimension: u32) -> RgbaImage {
    let width_cells = (2 * order).max(1) as u32;
    let cell_size = (dimension / width_cells).max(1);
    let margin = dimension.saturating_sub(cell_size.saturating_mul(width_cells)) / 2;

    let mut img = RgbaImage::from_pixel(dimension, dimension, BACKGROUND);
    draw_tiling(&mut img, grids, order, cell_size, (margin, margin));
    img
}

fn draw_tiling(
    img: &mut RgbaImage,
    grids: &ColorGrids,
    order: usize,
    cell_size: u32,
    origin: (u32, u32),
) {
    let width_cells = (2 * order) as u32;
    let draw_border = cell_size >= MIN_CELL_SIZE_FOR_BORDER;

    for (color, x, y) in grids.dominoes() {
        let (cols, rows) = match color.orientation() {
            Orientation::Vertical => (1, 2),
            Orientation::Horizontal => (2, 1),
        };
        let (x, y) = (x as u32, y as u32);
        let left = origin.0 + x * cell_size;
        let top = origin.1 + width_cells.saturating_sub(y + rows) * cell_size;
        let rect = PixelRect {
            left,
            top,
            width: cols * cell_size,
            height: rows * cell_size,
        };

        fill_rect(img, rect, Rgba(color.rgba()));
        if draw_border {
            outline_rect(img, rect);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PixelRect {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

fn fill_rect(img: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    for py in rect.top..rect.top + rect.height {
        for px in rect.left..rect.left + rect.width {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

fn outline_rect(img: &mut RgbaImage, rect: PixelRect) {
    let right = rect.left + rect.width - 1;
    let bottom = rect.top + rect.height - 1;
    for px in rect.left..=right {
        for py in [rect.top, bottom] {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = BORDER;
            }
        }
    }
    for py in rect.top..=bottom {
        for px in [rect.left, right] {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = BORDER;
            }
        }
    }
}

/// Colour found at the centre of the given grid cell in an image produced by
/// [`render_tiling`], if any domino covers it
pub fn color_at_cell(
    img: &RgbaImage,
    order: usize,
    cell_size: u32,
    x: usize,
    y: usize,
) -> Option<Color> {
    let width_cells = (2 * order) as u32;
    let px = x as u32 * cell_size + cell_size / 2;
    let py = width_cells.checked_sub(y as u32 + 1)? * cell_size + cell_size / 2;
    let pixel = img.get_pixel_checked(px, py)?;
    Color::ALL.into_iter().find(|color| pixel.0 == color.rgba())
}

/// Export a tiling as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The tiling cannot be rendered at the requested cell size
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_png(
    grids: &ColorGrids,
    order: usize,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_tiling(grids, order, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DiamondError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| DiamondError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
