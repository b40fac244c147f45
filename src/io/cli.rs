//! Command-line interface for growing and exporting random Aztec diamond tilings

use crate::algorithm::{DiamondEngine, Growth};
use crate::analysis::statistics::TilingStatistics;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_MAX_ORDER, DEFAULT_SEED, DEFAULT_TARGET_ORDER,
    GIF_FRAME_DELAY_MS, GIF_FRAME_DIMENSION, MAX_IMAGE_DIMENSION, OUTPUT_FILENAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_tiling_png;
use crate::io::progress::GrowthProgress;
use crate::io::visualization::GrowthRecorder;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aztec-shuffle")]
#[command(
    author,
    version,
    about = "Grow a uniformly random domino tiling of the Aztec diamond"
)]
/// Command-line arguments for the tiling generator
// Independent output toggles are clearer as flags than as an enum
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Order of the diamond to generate
    #[arg(short, long, default_value_t = DEFAULT_TARGET_ORDER)]
    pub order: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// PNG file receiving the final tiling
    #[arg(long, value_name = "PATH", default_value = OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// Pixels per grid cell in the PNG (borders appear from 5 upwards)
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Also write an animated GIF with one frame per order
    #[arg(short, long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,

    /// Check the tiling invariant after every increment
    #[arg(long)]
    pub verify: bool,

    /// Print per-color domino counts when done
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject option values the generator cannot honour
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The order is zero or beyond the grid capacity
    /// - The cell size is zero
    /// - The final PNG would exceed the maximum image dimension
    pub fn validate(&self) -> Result<()> {
        if self.order == 0 || self.order > DEFAULT_MAX_ORDER {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &format!("must be between 1 and {DEFAULT_MAX_ORDER}"),
            ));
        }
        if self.cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &"must be at least 1",
            ));
        }
        let side = 2 * self.order as u64 * u64::from(self.cell_size);
        if side > u64::from(MAX_IMAGE_DIMENSION) {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!(
                    "an order-{} diamond would be {side} pixels wide (max {MAX_IMAGE_DIMENSION})",
                    self.order
                ),
            ));
        }
        Ok(())
    }
}

/// Drives one generation run from parsed arguments to written files
pub struct GrowthRunner {
    cli: Cli,
}

impl GrowthRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Grow the diamond and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Argument validation fails
    /// - The engine reports an invariant violation
    /// - Image or animation export fails
    pub fn run(&self) -> Result<DiamondEngine> {
        self.cli.validate()?;

        let engine = self.grow()?;

        export_tiling_png(
            engine.grids(),
            engine.order(),
            self.cli.cell_size,
            &self.cli.output,
        )?;

        if self.cli.stats {
            self.report_statistics(&engine);
        }

        Ok(engine)
    }

    /// Grow a fresh engine to the requested order, capturing frames if asked
    ///
    /// # Errors
    ///
    /// Returns an error if an increment or verification fails, or if the
    /// animation cannot be exported
    pub fn grow(&self) -> Result<DiamondEngine> {
        let mut engine = DiamondEngine::new(self.cli.seed)?;
        let target = self.cli.order;

        let progress = if self.cli.should_show_progress() {
            GrowthProgress::new(engine.order(), target)
        } else {
            GrowthProgress::hidden(target)
        };

        let mut recorder = self
            .cli
            .visualize
            .as_ref()
            .map(|_| GrowthRecorder::new(GIF_FRAME_DIMENSION, target));
        if let Some(ref mut recorder) = recorder {
            recorder.capture(engine.grids(), engine.order());
        }

        if self.cli.verify {
            engine.verify()?;
        }

        while engine.order() < target {
            match engine.increment()? {
                Growth::Advanced {
                    order,
                    annihilated,
                    refilled,
                } => {
                    progress.update(order, annihilated, refilled);
                }
                Growth::AtCapacity => {
                    self.warn(&format!(
                        "Stopped at order {} (grid capacity reached)",
                        engine.order()
                    ));
                    break;
                }
            }

            if self.cli.verify {
                engine.verify()?;
            }
            if let Some(ref mut recorder) = recorder {
                recorder.capture(engine.grids(), engine.order());
            }
        }

        progress.finish(engine.order());

        if let (Some(recorder), Some(path)) = (&recorder, &self.cli.visualize) {
            recorder.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(engine)
    }

    // Allow print for the requested statistics report
    #[allow(clippy::print_stdout)]
    fn report_statistics(&self, engine: &DiamondEngine) {
        let statistics = TilingStatistics::from_grids(engine.grids(), engine.order());
        println!("seed {}", self.cli.seed);
        print!("{statistics}");
    }

    // Allow print for user-facing warnings
    #[allow(clippy::print_stderr)]
    fn warn(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("Warning: {message}");
        }
    }
}
