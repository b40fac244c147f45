//! Domino color tags with their footprints and directions of travel

use std::fmt;

/// Tag identifying a domino's orientation and forced direction of travel
///
/// `Orange` and `Red` are upright dominoes covering their anchor and the cell
/// above it; a unit diamond places them side by side. `Green` and `Blue` lie
/// flat, covering their anchor and the cell to its right; a unit diamond stacks
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Upright, travels towards decreasing x
    Orange,
    /// Upright, travels towards increasing x
    Red,
    /// Flat, travels towards decreasing y
    Green,
    /// Flat, travels towards increasing y
    Blue,
}

/// Axis-aligned unit translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing y
    Up,
    /// Decreasing y
    Down,
    /// Decreasing x
    Left,
    /// Increasing x
    Right,
}

/// Layout of the two cells a domino covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Anchor plus the cell above
    Vertical,
    /// Anchor plus the cell to the right
    Horizontal,
}

impl Color {
    /// All colors in storage order
    pub const ALL: [Self; 4] = [Self::Orange, Self::Red, Self::Green, Self::Blue];

    /// Dense index in `0..4` matching [`Color::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Orange => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Blue => 3,
        }
    }

    /// Direction this color is forced to move during shuffling
    pub const fn direction(self) -> Direction {
        match self {
            Self::Orange => Direction::Left,
            Self::Red => Direction::Right,
            Self::Green => Direction::Down,
            Self::Blue => Direction::Up,
        }
    }

    /// Footprint layout of this color
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Orange | Self::Red => Orientation::Vertical,
            Self::Green | Self::Blue => Orientation::Horizontal,
        }
    }

    /// Offset of the second covered cell relative to the anchor
    pub const fn partner_offset(self) -> (usize, usize) {
        match self.orientation() {
            Orientation::Vertical => (0, 1),
            Orientation::Horizontal => (1, 0),
        }
    }

    /// Both cells covered by a domino anchored at (x, y)
    pub const fn footprint(self, x: usize, y: usize) -> [(usize, usize); 2] {
        let (dx, dy) = self.partner_offset();
        [(x, y), (x + dx, y + dy)]
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// RGBA fill used by the image exporters
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Orange => [255, 165, 0, 255],
            Self::Red => [255, 0, 0, 255],
            Self::Green => [0, 128, 0, 255],
            Self::Blue => [0, 0, 255, 255],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
