//! Capacity constants and runtime configuration defaults

// Hard ceiling on growth: grids are allocated once at this side length
/// Side length of every color grid (supports orders up to half of this)
pub const DEFAULT_GRID_EXTENT: usize = 1000;

/// Highest order reachable with the default grid extent
pub const DEFAULT_MAX_ORDER: usize = DEFAULT_GRID_EXTENT / 2;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Order the command-line tool grows to when none is given
pub const DEFAULT_TARGET_ORDER: usize = 50;

// Rendering settings
/// Pixels per grid cell in exported images
pub const DEFAULT_CELL_SIZE: u32 = 4;
/// Cells smaller than this are drawn without black borders
pub const MIN_CELL_SIZE_FOR_BORDER: u32 = 5;
/// Upper bound on the side of a single exported image
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Side length of every animation frame
pub const GIF_FRAME_DIMENSION: u32 = 512;

// Output settings
/// Filename used when no output path is given
pub const OUTPUT_FILENAME: &str = "aztec_diamond.png";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the delay of the final animation frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
