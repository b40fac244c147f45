//! Tests for the derived occupancy buffer used by the refill scan

#[cfg(test)]
mod tests {
    use aztec_shuffle::algorithm::occupancy::OccupancyCache;
    use aztec_shuffle::spatial::{Color, ColorGrids};

    // Tests a fresh buffer is vacant everywhere inside its extent
    // Verified by initialising the buffer to true
    #[test]
    fn test_new_cache_is_vacant() {
        let cache = OccupancyCache::new(6);
        assert_eq!(cache.extent(), 6);
        assert_eq!(cache.covered_count(6), 0);
        assert!(cache.block_vacant(0, 0));
        assert!(cache.block_vacant(4, 4));
    }

    // Tests cells past the buffer never form a vacant block
    // Verified by treating out-of-range cells as vacant
    #[test]
    fn test_out_of_range_counts_as_covered() {
        let mut cache = OccupancyCache::new(6);
        assert!(cache.is_occupied(6, 0));
        assert!(cache.is_occupied(0, 6));
        assert!(!cache.block_vacant(5, 0));
        assert!(!cache.block_vacant(0, 5));

        cache.mark(9, 9);
        assert_eq!(cache.covered_count(6), 0);
    }

    // Tests a single marked cell blocks every 2x2 block containing it
    // Verified by checking only the lower-left corner in block_vacant
    #[test]
    fn test_single_mark_blocks_neighbouring_blocks() {
        let mut cache = OccupancyCache::new(6);
        cache.mark(2, 2);

        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(!cache.block_vacant(x, y), "block at ({x}, {y})");
        }
        assert!(cache.block_vacant(3, 3));
        assert!(cache.block_vacant(0, 0));
    }

    // Tests marking a block covers exactly four cells
    // Verified by omitting the upper-right corner in mark_block
    #[test]
    fn test_mark_block_covers_four_cells() {
        let mut cache = OccupancyCache::new(6);
        cache.mark_block(1, 3);
        assert_eq!(cache.covered_count(6), 4);
        assert!(cache.is_occupied(2, 4));
        assert!(!cache.is_occupied(3, 4));
    }

    // Tests rebuild marks both cells of every footprint and drops stale marks
    // Verified by marking only anchors during rebuild
    #[test]
    fn test_rebuild_from_grids() -> aztec_shuffle::Result<()> {
        let mut grids = ColorGrids::new(6);
        grids.get_mut(Color::Orange).set(0, 0)?;
        grids.get_mut(Color::Green).set(2, 3)?;

        let mut cache = OccupancyCache::new(6);
        cache.mark(3, 0);
        cache.rebuild(&grids, 4);

        assert!(!cache.is_occupied(3, 0));
        for (x, y) in [(0, 0), (0, 1), (2, 3), (3, 3)] {
            assert!(cache.is_occupied(x, y), "cell ({x}, {y})");
        }
        assert!(!cache.is_occupied(1, 0));
        assert_eq!(cache.covered_count(4), 4);
        Ok(())
    }

    // Tests anchors beyond the working square are ignored by rebuild
    // Verified by removing the width filter in rebuild
    #[test]
    fn test_rebuild_ignores_anchors_outside_width() -> aztec_shuffle::Result<()> {
        let mut grids = ColorGrids::new(8);
        grids.get_mut(Color::Blue).set(5, 5)?;
        grids.get_mut(Color::Red).set(1, 1)?;

        let mut cache = OccupancyCache::new(8);
        cache.rebuild(&grids, 4);

        assert!(!cache.is_occupied(5, 5));
        assert_eq!(cache.covered_count(8), 2);
        Ok(())
    }

    // Tests rebuild clears only the square one wider than the working width
    // Verified by clearing the whole buffer in rebuild
    #[test]
    fn test_rebuild_clears_only_working_square() {
        let grids = ColorGrids::new(8);
        let mut cache = OccupancyCache::new(8);
        for (x, y) in [(4, 4), (5, 2), (2, 5), (7, 7)] {
            cache.mark(x, y);
        }

        cache.rebuild(&grids, 4);

        assert!(!cache.is_occupied(4, 4));
        for (x, y) in [(5, 2), (2, 5), (7, 7)] {
            assert!(cache.is_occupied(x, y), "cell ({x}, {y})");
        }
        assert_eq!(cache.covered_count(5), 0);
        assert_eq!(cache.covered_count(6), 2);
        assert_eq!(cache.covered_count(8), 3);
    }

    // Tests the count is limited to the requested square and to the buffer
    // Verified by counting the whole buffer in covered_count
    #[test]
    fn test_covered_count_respects_width() {
        let mut cache = OccupancyCache::new(4);
        cache.mark(0, 0);
        cache.mark(1, 2);
        cache.mark(3, 3);

        assert_eq!(cache.covered_count(0), 0);
        assert_eq!(cache.covered_count(1), 1);
        assert_eq!(cache.covered_count(3), 2);
        assert_eq!(cache.covered_count(4), 3);
        assert_eq!(cache.covered_count(40), 3);
    }
}
