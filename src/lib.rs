//! Uniformly random domino tilings of the Aztec diamond by domino shuffling
//!
//! A tiling is grown one order at a time: every increment expands the board,
//! annihilates colliding dominoes, slides the survivors, and refills the holes
//! with random unit diamonds. Starting from a uniform tiling of order n, the
//! result is a uniform tiling of order n + 1.

#![forbid(unsafe_code)]

/// Domino-shuffling engine, occupancy cache, and tiling checks
pub mod algorithm;
/// Statistical summaries of generated tilings
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for goodness-of-fit testing
pub mod math;
/// Presence grids, domino colors, and diamond geometry
pub mod spatial;

pub use algorithm::{DiamondEngine, Growth, ShuffleStep};
pub use io::error::{DiamondError, Result};
pub use spatial::Color;
