//! Derived cell-coverage buffer rebuilt from the color grids

use ndarray::{Array2, Slice};

use crate::spatial::ColorGrids;

/// Scratch buffer marking every cell covered by some domino footprint
///
/// Never a source of truth: it is cleared and rebuilt from the four color
/// grids before each refill pass. Indexed as `[row, col]`, i.e. `[y, x]`.
#[derive(Debug, Clone)]
pub struct OccupancyCache {
    cells: Array2<bool>,
}

impl OccupancyCache {
    /// Create an all-vacant buffer with the given side length
    pub fn new(extent: usize) -> Self {
        Self {
            cells: Array2::from_elem((extent, extent), false),
        }
    }

    /// Side length of the buffer
    pub fn extent(&self) -> usize {
        self.cells.nrows()
    }

    /// Recompute coverage of the `width x width` working square
    ///
    /// Cells outside the square are left untouched; callers pass the current
    /// bounding box width, which only grows between rebuilds.
    pub fn rebuild(&mut self, grids: &ColorGrids, width: usize) {
        let span = width.saturating_add(1).min(self.extent());
        self.cells
            .slice_each_axis_mut(|_axis| Slice::from(..span))
            .fill(false);

        for (color, x, y) in grids.dominoes() {
            if x >= width || y >= width {
                continue;
            }
            for (cx, cy) in color.footprint(x, y) {
                self.mark(cx, cy);
            }
        }
    }

    /// Mark a single cell covered; out-of-range cells are ignored
    pub fn mark(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut([y, x]) {
            *cell = true;
        }
    }

    /// Check whether a cell is covered
    ///
    /// Cells beyond the buffer count as covered so that no block reaching past
    /// the capacity is ever reported vacant.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells.get([y, x]).copied().unwrap_or(true)
    }

    /// Check whether the 2x2 block with lower-left corner (x, y) is entirely vacant
    pub fn block_vacant(&self, x: usize, y: usize) -> bool {
        !(self.is_occupied(x, y)
            || self.is_occupied(x + 1, y)
            || self.is_occupied(x, y + 1)
            || self.is_occupied(x + 1, y + 1))
    }

    /// Mark all four cells of the 2x2 block with lower-left corner (x, y)
    pub fn mark_block(&mut self, x: usize, y: usize) {
        self.mark(x, y);
        self.mark(x + 1, y);
        self.mark(x, y + 1);
        self.mark(x + 1, y + 1);
    }

    /// Number of covered cells in the `width x width` working square
    pub fn covered_count(&self, width: usize) -> usize {
        let span = width.min(self.extent());
        self.cells
            .slice_each_axis(|_axis| Slice::from(..span))
            .iter()
            .filter(|&&covered| covered)
            .count()
    }
}
