//! Mathematical utilities for the algorithm

/// Error function and chi-square goodness-of-fit helpers
pub mod probability;
