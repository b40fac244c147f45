//! Structural checks for the tiling invariant

use ndarray::Array2;

use crate::io::error::{Result, invariant_violation};
use crate::spatial::{AztecRegion, Color, ColorGrids};

/// Verify that the dominoes exactly tile the Aztec diamond of `order`
///
/// Every footprint cell must lie inside the diamond, no cell may be covered
/// twice, and every cell of the diamond must be covered.
///
/// # Errors
///
/// Returns an invariant violation describing the first defect found
pub fn verify_tiling(grids: &ColorGrids, order: usize) -> Result<()> {
    let region = AztecRegion::new(order);
    let width = region.width();
    let mut coverage: Array2<Option<Color>> = Array2::from_elem((width, width), None);

    for (color, x, y) in grids.dominoes() {
        for (cx, cy) in color.footprint(x, y) {
            if !region.contains(cx, cy) {
                return Err(invariant_violation(
                    "tiling check",
                    &format!(
                        "{color} domino at ({x}, {y}) covers ({cx}, {cy}) outside the order-{order} diamond"
                    ),
                ));
            }
            let Some(cell) = coverage.get_mut([cy, cx]) else {
                continue;
            };
            if let Some(existing) = cell.replace(color) {
                return Err(invariant_violation(
                    "tiling check",
                    &format!(
                        "cell ({cx}, {cy}) is covered by both a {existing} and a {color} domino"
                    ),
                ));
            }
        }
    }

    if let Some((x, y)) = region
        .cells()
        .find(|&(x, y)| coverage.get([y, x]).is_none_or(Option::is_none))
    {
        return Err(invariant_violation(
            "tiling check",
            &format!("cell ({x}, {y}) of the order-{order} diamond is uncovered"),
        ));
    }

    Ok(())
}

/// Collect every cell covered by more than one footprint
///
/// Unlike [`verify_tiling`] this inspects the whole grid extent and does not
/// stop at the first conflict.
pub fn overlapping_cells(grids: &ColorGrids) -> Vec<(usize, usize)> {
    let extent = grids.extent() + 1;
    let mut counts: Array2<u8> = Array2::zeros((extent, extent));

    for (color, x, y) in grids.dominoes() {
        for (cx, cy) in color.footprint(x, y) {
            if let Some(count) = counts.get_mut([cy, cx]) {
                *count = count.saturating_add(1);
            }
        }
    }

    counts
        .indexed_iter()
        .filter(|&(_, &count)| count > 1)
        .map(|((y, x), _)| (x, y))
        .collect()
}
