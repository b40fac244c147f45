//! Aztec diamond support geometry

use std::ops::Range;

/// The Aztec diamond of a given order, anchored at the origin
///
/// Occupies the cells of the `2n x 2n` bounding box whose centres lie within
/// taxicab distance `n` of the box centre. The outermost columns hold two
/// cells and the two middle columns span the full height `2n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AztecRegion {
    order: usize,
}

impl AztecRegion {
    /// Region of the given order
    pub const fn new(order: usize) -> Self {
        Self { order }
    }

    /// Order of the diamond
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Side of the bounding box
    pub const fn width(&self) -> usize {
        2 * self.order
    }

    /// Number of cells in the region, `2n(n + 1)`
    pub const fn cell_count(&self) -> usize {
        2 * self.order * (self.order + 1)
    }

    /// Distance from the bounding box edge to the first row of column `x`
    ///
    /// Zero for the two middle columns, growing by one per column towards
    /// either tip.
    pub const fn column_inset(&self, x: usize) -> usize {
        if x < self.order {
            self.order - x - 1
        } else {
            x - self.order
        }
    }

    /// Rows of column `x` that belong to the region
    ///
    /// Empty for columns outside the bounding box.
    pub const fn column_span(&self, x: usize) -> Range<usize> {
        if x >= self.width() {
            return 0..0;
        }
        let inset = self.column_inset(x);
        inset..self.width() - inset
    }

    /// Check if a cell is part of the region
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        let span = self.column_span(x);
        y >= span.start && y < span.end
    }

    /// All cells of the region, column by column
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width()).flat_map(move |x| self.column_span(x).map(move |y| (x, y)))
    }
}
