//! Statistical summaries of generated tilings

/// Per-color counts and frequency tallies over sampled tilings
pub mod statistics;
