/// Domino-shuffling growth engine
pub mod engine;
/// Derived occupancy buffer used by the refill pass
pub mod occupancy;
/// Tiling invariant checks
pub mod validation;

pub use engine::{DiamondEngine, Growth, Placement, ShuffleStep, StepReport, UnitDiamond};
