//! Summary statistics of tilings and frequency tallies across sampled tilings

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::math::probability::uniformity_p_value;
use crate::spatial::{AztecRegion, Color, ColorGrids};

/// Per-color domino counts of a single tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingStatistics {
    /// Order of the tiled diamond
    pub order: usize,
    /// Domino count per color, indexed by [`Color::index`]
    pub color_counts: [usize; 4],
}

impl TilingStatistics {
    /// Count the dominoes of every color
    pub fn from_grids(grids: &ColorGrids, order: usize) -> Self {
        let mut color_counts = [0; 4];
        for (color, grid) in grids.iter() {
            if let Some(count) = color_counts.get_mut(color.index()) {
                *count = grid.count();
            }
        }
        Self {
            order,
            color_counts,
        }
    }

    /// Dominoes of a single color
    pub fn count(&self, color: Color) -> usize {
        self.color_counts.get(color.index()).copied().unwrap_or(0)
    }

    /// Dominoes of every color
    pub fn total(&self) -> usize {
        self.color_counts.iter().sum()
    }

    /// Number of dominoes a complete tiling of this order must contain, `n(n + 1)`
    pub const fn expected_total(&self) -> usize {
        AztecRegion::new(self.order).cell_count() / 2
    }

    /// Share of dominoes of the given color, 0.0 for an empty tiling
    pub fn fraction(&self, color: Color) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(color) as f64 / total as f64
    }
}

impl fmt::Display for TilingStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "order {} ({} dominoes, expected {})",
            self.order,
            self.total(),
            self.expected_total()
        )?;
        for color in Color::ALL {
            writeln!(
                f,
                "  {:<6} {:>8}  {:>6.2}%",
                color.name(),
                self.count(color),
                self.fraction(color) * 100.0
            )?;
        }
        Ok(())
    }
}

/// Occurrence counts of outcomes drawn repeatedly from some random process
#[derive(Debug, Clone)]
pub struct FrequencyTally<K> {
    counts: HashMap<K, usize>,
    trials: usize,
}

impl<K: Eq + Hash> Default for FrequencyTally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FrequencyTally<K> {
    /// Create an empty tally
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            trials: 0,
        }
    }

    /// Record one observation
    pub fn record(&mut self, outcome: K) {
        *self.counts.entry(outcome).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Number of observations recorded
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Number of distinct outcomes observed
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Observations of a single outcome
    pub fn count(&self, outcome: &K) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Smallest and largest count among observed outcomes
    pub fn count_range(&self) -> Option<(usize, usize)> {
        let min = self.counts.values().min()?;
        let max = self.counts.values().max()?;
        Some((*min, *max))
    }

    /// p-value of the observed counts under a uniform distribution over
    /// `categories` outcomes
    ///
    /// Categories that were never observed count as zero, so passing the true
    /// number of possible outcomes also penalises missing ones.
    pub fn uniformity_p_value(&self, categories: usize) -> f64 {
        let mut observed: Vec<usize> = self.counts.values().copied().collect();
        observed.resize(categories.max(observed.len()), 0);
        uniformity_p_value(&observed)
    }
}
