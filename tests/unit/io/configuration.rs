//! Tests for capacity constants and configuration defaults

#[cfg(test)]
mod tests {
    use aztec_shuffle::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_GRID_EXTENT, DEFAULT_MAX_ORDER, DEFAULT_SEED,
        DEFAULT_TARGET_ORDER, GIF_FRAME_DELAY_MS, MAX_IMAGE_DIMENSION, MIN_CELL_SIZE_FOR_BORDER,
        OUTPUT_FILENAME, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the grid extent supports orders up to 500
    // Verified by changing the extent to an odd number
    #[test]
    fn test_grid_capacity() {
        assert_eq!(DEFAULT_GRID_EXTENT, 1000);
        assert_eq!(DEFAULT_GRID_EXTENT % 2, 0);
        assert_eq!(DEFAULT_MAX_ORDER, 500);
    }

    // Tests the default run fits the grids and the image limit
    // Verified by raising the default order past capacity
    #[test]
    fn test_defaults_fit_limits() {
        assert_eq!(DEFAULT_SEED, 42);
        assert!(DEFAULT_TARGET_ORDER <= DEFAULT_MAX_ORDER);
        let side = 2 * DEFAULT_TARGET_ORDER as u32 * DEFAULT_CELL_SIZE;
        assert!(side <= MAX_IMAGE_DIMENSION);
    }

    // Tests default cells are drawn without borders
    // Verified by lowering the border threshold
    #[test]
    fn test_default_cells_are_borderless() {
        assert!(DEFAULT_CELL_SIZE < MIN_CELL_SIZE_FOR_BORDER);
    }

    // Tests the default frame delay needs no frame skipping
    // Verified by lowering the delay below the viewer minimum
    #[test]
    fn test_frame_delay_above_viewer_minimum() {
        assert!(GIF_FRAME_DELAY_MS >= VIEWER_MIN_FRAME_DELAY_MS);
    }

    // Tests output filename is a PNG
    // Verified by changing the extension
    #[test]
    fn test_output_filename() {
        assert!(
            std::path::Path::new(OUTPUT_FILENAME)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        );
    }
}
