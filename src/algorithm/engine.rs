//! Domino-shuffling growth engine for uniformly random Aztec diamond tilings
//!
//! Each increment turns a uniform random tiling of the order-n diamond into a
//! uniform random tiling of the order-(n + 1) diamond by expanding the board,
//! annihilating dominoes that would collide, sliding the survivors one cell
//! along their direction of travel, and refilling the vacated 2x2 blocks with
//! random unit diamonds.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::occupancy::OccupancyCache;
use crate::algorithm::validation::verify_tiling;
use crate::io::configuration::DEFAULT_GRID_EXTENT;
use crate::io::error::{Result, WithContext, invalid_parameter, invariant_violation};
use crate::spatial::{AztecRegion, Color, ColorGrids, TileGrid};

/// The two tilings of the order-1 diamond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitDiamond {
    /// Orange at the anchor, red one cell to the right
    OrangeRed,
    /// Green at the anchor, blue one cell above
    GreenBlue,
}

/// A unit diamond placed with its lower-left corner at (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Column of the lower-left corner
    pub x: usize,
    /// Row of the lower-left corner
    pub y: usize,
    /// Which of the two unit tilings was chosen
    pub diamond: UnitDiamond,
}

/// One of the four stages of a shuffling increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShuffleStep {
    /// Translate the tiling diagonally and raise the order by one
    Expand,
    /// Remove facing pairs that would collide when moved
    DeleteClashingTiles,
    /// Slide every color one cell along its direction of travel
    MoveAllColors,
    /// Cover every vacant 2x2 block with a random unit diamond
    FillWithUnitDiamonds,
}

impl ShuffleStep {
    /// The only ordering that preserves both validity and uniformity
    pub const CANONICAL: [Self; 4] = [
        Self::Expand,
        Self::DeleteClashingTiles,
        Self::MoveAllColors,
        Self::FillWithUnitDiamonds,
    ];

    /// Short name used in error context
    pub const fn name(self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::DeleteClashingTiles => "delete clashing tiles",
            Self::MoveAllColors => "move all colors",
            Self::FillWithUnitDiamonds => "fill with unit diamonds",
        }
    }
}

/// What a single step changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Number of colliding pairs removed
    pub annihilated: usize,
    /// Unit diamonds placed during refill
    pub placements: Vec<Placement>,
}

/// Outcome of a request to grow the diamond
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// The diamond reached a new order
    Advanced {
        /// Order after the increment
        order: usize,
        /// Colliding pairs removed during the increment
        annihilated: usize,
        /// Unit diamonds placed during the increment
        refilled: usize,
    },
    /// Growth stopped because the grids are full; nothing changed
    AtCapacity,
}

/// Random Aztec diamond tiling grown by domino shuffling
///
/// Owns one presence grid per color plus a scratch occupancy buffer, all
/// allocated once at a fixed extent. The highest reachable order is half the
/// extent; further growth requests are no-ops.
#[derive(Debug, Clone)]
pub struct DiamondEngine<R = StdRng> {
    grids: ColorGrids,
    occupancy: OccupancyCache,
    order: usize,
    rng: R,
}

impl DiamondEngine<StdRng> {
    /// Create an order-1 diamond at the default capacity from a seed
    ///
    /// # Errors
    ///
    /// Returns an error if the initial unit diamond cannot be placed
    pub fn new(seed: u64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiamondEngine<R> {
    /// Create an order-1 diamond at the default capacity from a random source
    ///
    /// # Errors
    ///
    /// Returns an error if the initial unit diamond cannot be placed
    pub fn with_rng(rng: R) -> Result<Self> {
        Self::with_capacity(DEFAULT_GRID_EXTENT, rng)
    }

    /// Create an order-1 diamond on grids of side `extent`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `extent` is odd or smaller than 2
    /// - The initial unit diamond cannot be placed
    pub fn with_capacity(extent: usize, rng: R) -> Result<Self> {
        if extent < 2 || extent % 2 != 0 {
            return Err(invalid_parameter(
                "extent",
                &extent,
                &"grid extent must be an even number of at least 2",
            ));
        }

        let mut engine = Self {
            grids: ColorGrids::new(extent),
            occupancy: OccupancyCache::new(extent),
            order: 1,
            rng,
        };
        engine
            .place_random_unit_diamond(0, 0)
            .with_operation("initial placement")?;
        Ok(engine)
    }

    /// Current order of the diamond
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Side length of the backing grids
    pub const fn extent(&self) -> usize {
        self.grids.extent()
    }

    /// Highest order these grids can hold
    pub const fn max_order(&self) -> usize {
        self.extent() / 2
    }

    /// Whether further growth requests will be ignored
    pub const fn is_at_capacity(&self) -> bool {
        self.order >= self.max_order()
    }

    /// Region currently tiled
    pub const fn region(&self) -> AztecRegion {
        AztecRegion::new(self.order)
    }

    /// Test whether a domino of `color` is anchored at (x, y)
    pub fn tile_present(&self, color: Color, x: usize, y: usize) -> bool {
        self.grids.present(color, x, y)
    }

    /// Presence grid of a single color
    pub const fn grid(&self, color: Color) -> &TileGrid {
        self.grids.get(color)
    }

    /// All four presence grids
    pub const fn grids(&self) -> &ColorGrids {
        &self.grids
    }

    /// Every anchored domino as `(color, x, y)`
    pub fn dominoes(&self) -> impl Iterator<Item = (Color, usize, usize)> + '_ {
        self.grids.dominoes()
    }

    /// Check that the dominoes exactly tile the current diamond
    ///
    /// # Errors
    ///
    /// Returns an invariant violation describing the first defect found
    pub fn verify(&self) -> Result<()> {
        verify_tiling(&self.grids, self.order)
    }

    /// Place one of the two unit tilings with its lower-left corner at (x, y)
    ///
    /// Each tiling is chosen with probability one half. The engine itself only
    /// calls this for the initial diamond and from the refill step.
    ///
    /// Calling it directly writes into the color grids without regard for the
    /// tiling, so the result is generally no longer a tiling of the current
    /// diamond. It is exposed for tests and tooling that need to build such
    /// states. [`Self::verify`] reports them as invariant violations, and so
    /// does [`Self::increment`] when its refill leaves the diamond covered
    /// other than exactly once.
    ///
    /// # Errors
    ///
    /// Returns a grid error if any of the two anchors is out of range or
    /// already taken by a domino of the same color; nothing is placed then.
    pub fn place_random_unit_diamond(&mut self, x: usize, y: usize) -> Result<UnitDiamond> {
        let diamond = if self.rng.random::<bool>() {
            UnitDiamond::OrangeRed
        } else {
            UnitDiamond::GreenBlue
        };

        let (first, second, partner) = match diamond {
            UnitDiamond::OrangeRed => (Color::Orange, Color::Red, (x + 1, y)),
            UnitDiamond::GreenBlue => (Color::Green, Color::Blue, (x, y + 1)),
        };

        self.grids.get_mut(first).set(x, y)?;
        if let Err(error) = self.grids.get_mut(second).set(partner.0, partner.1) {
            // Roll back the half already placed
            self.grids.get_mut(first).clear(x, y)?;
            return Err(error);
        }
        Ok(diamond)
    }

    /// Grow the tiling to the next order
    ///
    /// Applies expand, delete, move, and fill exactly once each in that order.
    /// Once the grids are full the call changes nothing and reports
    /// [`Growth::AtCapacity`].
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if any step meets state a valid tiling
    /// cannot produce, including a refill that leaves the diamond covered
    /// other than exactly once. The engine must be discarded afterwards.
    pub fn increment(&mut self) -> Result<Growth> {
        if self.is_at_capacity() {
            return Ok(Growth::AtCapacity);
        }

        let mut annihilated = 0;
        let mut refilled = 0;
        for step in ShuffleStep::CANONICAL {
            let report = self.apply_step(step)?;
            annihilated += report.annihilated;
            refilled += report.placements.len();
        }

        Ok(Growth::Advanced {
            order: self.order,
            annihilated,
            refilled,
        })
    }

    /// Increment until `target` is reached or growth stops at capacity
    ///
    /// Returns the order actually reached.
    ///
    /// # Errors
    ///
    /// Propagates the first invariant violation raised by [`Self::increment`]
    pub fn grow_to(&mut self, target: usize) -> Result<usize> {
        while self.order < target {
            if self.increment()? == Growth::AtCapacity {
                break;
            }
        }
        Ok(self.order)
    }

    /// Run a single shuffling step in isolation
    ///
    /// [`Self::increment`] is the canonical composition; this exists for
    /// callers that need to observe or reorder the individual stages.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `step` is [`ShuffleStep::Expand`] and the grids are already full
    /// - The step meets state a valid tiling cannot produce
    pub fn apply_step(&mut self, step: ShuffleStep) -> Result<StepReport> {
        match step {
            ShuffleStep::Expand => {
                self.expand()?;
                Ok(StepReport::default())
            }
            ShuffleStep::DeleteClashingTiles => Ok(StepReport {
                annihilated: self.delete_clashing_tiles().with_operation(step.name())?,
                placements: Vec::new(),
            }),
            ShuffleStep::MoveAllColors => {
                self.move_all_colors();
                Ok(StepReport::default())
            }
            ShuffleStep::FillWithUnitDiamonds => Ok(StepReport {
                annihilated: 0,
                placements: self.fill_with_unit_diamonds().with_operation(step.name())?,
            }),
        }
    }

    fn expand(&mut self) -> Result<()> {
        if self.is_at_capacity() {
            return Err(invalid_parameter(
                "step",
                &ShuffleStep::Expand.name(),
                &format!("order {} is already the maximum", self.order),
            ));
        }
        self.grids.for_each_mut(|_, grid| {
            grid.shift_up();
            grid.shift_right();
        });
        self.order += 1;
        Ok(())
    }

    // Red facing orange to its right, or blue facing green above it, would
    // swap through each other when moved
    fn delete_clashing_tiles(&mut self) -> Result<usize> {
        let width = self.region().width();
        let mut annihilated = 0;

        for x in 0..width {
            for y in 0..width {
                if self.grids.present(Color::Red, x, y)
                    && self.grids.present(Color::Orange, x + 1, y)
                {
                    self.grids.get_mut(Color::Red).clear(x, y)?;
                    self.grids.get_mut(Color::Orange).clear(x + 1, y)?;
                    annihilated += 1;
                }
                if self.grids.present(Color::Blue, x, y)
                    && self.grids.present(Color::Green, x, y + 1)
                {
                    self.grids.get_mut(Color::Blue).clear(x, y)?;
                    self.grids.get_mut(Color::Green).clear(x, y + 1)?;
                    annihilated += 1;
                }
            }
        }

        Ok(annihilated)
    }

    fn move_all_colors(&mut self) {
        self.grids.get_mut(Color::Red).shift_right();
        self.grids.get_mut(Color::Orange).shift_left();
        self.grids.get_mut(Color::Blue).shift_up();
        self.grids.get_mut(Color::Green).shift_down();
    }

    // Column-major scan restricted to the diamond's support: the first vacant
    // cell met in a column is always the lower-left corner of its hole
    fn fill_with_unit_diamonds(&mut self) -> Result<Vec<Placement>> {
        let region = self.region();
        self.occupancy.rebuild(&self.grids, region.width());

        let mut placements = Vec::new();
        for x in 0..region.width() {
            for y in region.column_span(x) {
                if self.occupancy.block_vacant(x, y) {
                    let diamond = self.place_random_unit_diamond(x, y)?;
                    self.occupancy.mark_block(x, y);
                    placements.push(Placement { x, y, diamond });
                }
            }
        }

        // Every diamond cell is covered once and no anchor sits outside the scan
        let covered = self.occupancy.covered_count(region.width());
        let dominoes = self.grids.count();
        if covered != region.cell_count() || 2 * dominoes != covered {
            return Err(invariant_violation(
                ShuffleStep::FillWithUnitDiamonds.name(),
                &format!(
                    "{dominoes} dominoes cover {covered} of the {} cells of the order-{} diamond",
                    region.cell_count(),
                    self.order
                ),
            ));
        }

        Ok(placements)
    }
}
