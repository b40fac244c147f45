//! Fixed-capacity presence grid for dominoes of a single color
//!
//! Each grid is allocated once at full capacity so that whole-grid translations
//! never reallocate. Shifts operate on the entire backing store regardless of
//! the diamond's current order.

use bitvec::{bitvec, order::BitOrder, slice::BitSlice, store::BitStore, vec::BitVec};
use std::fmt;

use crate::io::error::{DiamondError, Result};
use crate::spatial::domino::Color;

/// Square boolean presence map of domino anchors
///
/// Cells are stored row-major, so a cell at column `x` and row `y` lives at
/// bit `y * extent + x`. Row `y + 1` is "up" from row `y`.
#[derive(Clone, PartialEq, Eq)]
pub struct TileGrid {
    bits: BitVec,
    extent: usize,
}

impl TileGrid {
    /// Create an empty grid with the given side length
    pub fn new(extent: usize) -> Self {
        Self {
            bits: bitvec![0; extent * extent],
            extent,
        }
    }

    /// Side length of the grid
    pub const fn extent(&self) -> usize {
        self.extent
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.extent && y < self.extent {
            Some(y * self.extent + x)
        } else {
            None
        }
    }

    /// Test whether a domino is anchored at (x, y)
    ///
    /// Out-of-bounds coordinates are never occupied.
    pub fn present(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Anchor a domino at (x, y)
    ///
    /// # Errors
    ///
    /// Returns an error without modifying the grid if:
    /// - The coordinates lie outside the grid
    /// - A domino is already anchored at the cell
    pub fn set(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.checked_index(x, y)?;
        if self.bits.replace(index, true) {
            return Err(DiamondError::CellOccupied { x, y });
        }
        Ok(())
    }

    /// Remove the domino anchored at (x, y)
    ///
    /// # Errors
    ///
    /// Returns an error without modifying the grid if:
    /// - The coordinates lie outside the grid
    /// - No domino is anchored at the cell
    pub fn clear(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.checked_index(x, y)?;
        if !self.bits.replace(index, false) {
            return Err(DiamondError::CellVacant { x, y });
        }
        Ok(())
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        self.index(x, y).ok_or(DiamondError::OutOfBounds {
            x,
            y,
            extent: self.extent,
        })
    }

    /// Remove every domino
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// Number of anchored dominoes
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no dominoes are anchored
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Anchor coordinates `(x, y)` in row-major order
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let extent = self.extent;
        self.bits
            .iter_ones()
            .map(move |index| (index % extent, index / extent))
    }

    /// Copy of the `width x width` corner at the origin as a grid of that extent
    ///
    /// Anchors outside the corner are dropped. Widths beyond the extent are
    /// clamped to it.
    pub fn cropped(&self, width: usize) -> Self {
        let width = width.min(self.extent);
        let mut corner = Self::new(width);
        if width == 0 {
            return corner;
        }
        let source_rows = self.bits.chunks_exact(self.extent);
        for (row, source) in corner.bits.chunks_exact_mut(width).zip(source_rows) {
            if let Some(head) = source.get(..width) {
                row.clone_from_bitslice(head);
            }
        }
        corner
    }

    /// Move every anchor from row `y` to row `y + 1`
    ///
    /// Row 0 is cleared and the top row is discarded.
    pub fn shift_up(&mut self) {
        let by = self.extent;
        shift_towards_end(&mut self.bits, by);
    }

    /// Move every anchor from row `y` to row `y - 1`
    ///
    /// The top row is cleared and row 0 is discarded.
    pub fn shift_down(&mut self) {
        let by = self.extent;
        shift_towards_start(&mut self.bits, by);
    }

    /// Move every anchor from column `x` to column `x - 1`
    ///
    /// The rightmost column is cleared and column 0 is discarded.
    pub fn shift_left(&mut self) {
        if self.extent == 0 {
            return;
        }
        for row in self.bits.chunks_exact_mut(self.extent) {
            shift_towards_start(row, 1);
        }
    }

    /// Move every anchor from column `x` to column `x + 1`
    ///
    /// Column 0 is cleared and the rightmost column is discarded.
    pub fn shift_right(&mut self) {
        if self.extent == 0 {
            return;
        }
        for row in self.bits.chunks_exact_mut(self.extent) {
            shift_towards_end(row, 1);
        }
    }
}

// `shift_start` and `shift_end` reject shifts past the slice length; anything that large empties the slice
fn shift_towards_end<T: BitStore, O: BitOrder>(bits: &mut BitSlice<T, O>, by: usize) {
    if by >= bits.len() {
        bits.fill(false);
    } else {
        bits.shift_end(by);
    }
}

fn shift_towards_start<T: BitStore, O: BitOrder>(bits: &mut BitSlice<T, O>, by: usize) {
    if by >= bits.len() {
        bits.fill(false);
    } else {
        bits.shift_start(by);
    }
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileGrid")
            .field("extent", &self.extent)
            .field("count", &self.count())
            .finish()
    }
}

/// The four per-color grids that together describe one tiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrids {
    orange: TileGrid,
    red: TileGrid,
    green: TileGrid,
    blue: TileGrid,
}

impl ColorGrids {
    /// Create four empty grids with the given side length
    pub fn new(extent: usize) -> Self {
        Self {
            orange: TileGrid::new(extent),
            red: TileGrid::new(extent),
            green: TileGrid::new(extent),
            blue: TileGrid::new(extent),
        }
    }

    /// Side length shared by all four grids
    pub const fn extent(&self) -> usize {
        self.orange.extent()
    }

    /// Grid holding the given color
    pub const fn get(&self, color: Color) -> &TileGrid {
        match color {
            Color::Orange => &self.orange,
            Color::Red => &self.red,
            Color::Green => &self.green,
            Color::Blue => &self.blue,
        }
    }

    /// Mutable grid holding the given color
    pub fn get_mut(&mut self, color: Color) -> &mut TileGrid {
        match color {
            Color::Orange => &mut self.orange,
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        }
    }

    /// Test whether a domino of the given color is anchored at (x, y)
    pub fn present(&self, color: Color, x: usize, y: usize) -> bool {
        self.get(color).present(x, y)
    }

    /// Grids paired with their colors, in [`Color::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Color, &TileGrid)> + '_ {
        Color::ALL.into_iter().map(move |color| (color, self.get(color)))
    }

    /// Every anchored domino as `(color, x, y)`
    pub fn dominoes(&self) -> impl Iterator<Item = (Color, usize, usize)> + '_ {
        self.iter()
            .flat_map(|(color, grid)| grid.iter_present().map(move |(x, y)| (color, x, y)))
    }

    /// Total number of anchored dominoes across all colors
    pub fn count(&self) -> usize {
        self.iter().map(|(_, grid)| grid.count()).sum()
    }

    /// Copy of the `width x width` corner of every grid
    ///
    /// A tiling of order `n` lives in the `2n x 2n` corner, so this keeps it
    /// whole at a fraction of the full-capacity footprint.
    pub fn cropped(&self, width: usize) -> Self {
        Self {
            orange: self.orange.cropped(width),
            red: self.red.cropped(width),
            green: self.green.cropped(width),
            blue: self.blue.cropped(width),
        }
    }

    /// Apply a whole-grid operation to every color
    pub fn for_each_mut(&mut self, mut operation: impl FnMut(Color, &mut TileGrid)) {
        for color in Color::ALL {
            operation(color, self.get_mut(color));
        }
    }
}
