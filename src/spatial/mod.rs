//! Spatial data structures for domino tilings
//!
//! This module contains spatial-related functionality including:
//! - Fixed-capacity presence grids with whole-grid shifts
//! - Domino colors, footprints, and directions of travel
//! - Aztec diamond support geometry

/// Domino color tags and footprints
pub mod domino;
/// Fixed-capacity presence grid for a single color
pub mod grid;
/// Aztec diamond region geometry
pub mod region;

pub use domino::Color;
pub use grid::{ColorGrids, TileGrid};
pub use region::AztecRegion;
