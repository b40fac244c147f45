//! Frame capture and GIF generation for diamond growth

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{DiamondError, Result};
use crate::io::image::render_frame;
use crate::spatial::ColorGrids;

/// Records the tiling at every order while a diamond grows
///
/// The engine mutates its grids in place, so each capture keeps a copy of the
/// `2n x 2n` corner holding the order-`n` tiling. Frames are rasterised one at
/// a time during export. Every frame shares the same square dimension, so
/// later orders are drawn with smaller cells.
pub struct GrowthRecorder {
    snapshots: Vec<Snapshot>,
    dimension: u32,
}

struct Snapshot {
    grids: ColorGrids,
    order: usize,
}

impl GrowthRecorder {
    /// Create a recorder producing square frames of the given side
    pub fn new(dimension: u32, expected_frames: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(expected_frames),
            dimension,
        }
    }

    /// Store the current tiling
    pub fn capture(&mut self, grids: &ColorGrids, order: usize) {
        self.snapshots.push(Snapshot {
            grids: grids.cropped(2 * order),
            order,
        });
    }

    /// Render the frame captured at the given position
    pub fn frame(&self, index: usize) -> Option<RgbaImage> {
        self.snapshots
            .get(index)
            .map(|snapshot| self.render(snapshot))
    }

    fn render(&self, snapshot: &Snapshot) -> RgbaImage {
        render_frame(&snapshot.grids, snapshot.order, self.dimension)
    }

    /// Returns the total number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Side length of every frame
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Delays shorter than viewers honour are stretched to the viewer minimum
    /// and intermediate frames are dropped to keep the apparent speed. The
    /// last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.snapshots.is_empty() {
            return Err(DiamondError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "No frames captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.select_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DiamondError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| DiamondError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| DiamondError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    // Frames are rendered lazily so only one image is alive while encoding
    fn select_frames(
        &self,
        delay_ms: u32,
        skip_factor: usize,
    ) -> impl Iterator<Item = Frame> + '_ {
        let last_index = self.snapshots.len().saturating_sub(1);
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let kept = self
            .snapshots
            .iter()
            .enumerate()
            .filter(move |(index, _)| index % skip_factor == 0 || *index == last_index)
            .map(move |(_, snapshot)| Frame::from_parts(self.render(snapshot), 0, 0, delay));

        // Final frame displays longer for better visibility
        let hold = Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD, 1);
        let held = self
            .snapshots
            .last()
            .into_iter()
            .map(move |snapshot| Frame::from_parts(self.render(snapshot), 0, 0, hold));

        kept.chain(held)
    }
}
