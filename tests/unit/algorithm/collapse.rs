//! Tests for collapsing a single cell to one random candidate

#[cfg(test)]
mod tests {
    use gridcollapse::WfcError;
    use gridcollapse::algorithm::bitset::TileBitset;
    use gridcollapse::algorithm::collapse::collapse_cell;
    use gridcollapse::spatial::grid::Grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests collapse leaves exactly one tile taken from the prior domain
    // Verified by restricting to a tile outside the domain
    #[test]
    fn test_collapse_picks_remaining_candidate() {
        let mut grid = Grid::new(2, 2, 6).expect("valid grid");
        grid.cell_mut(1, 0)
            .expect("in bounds")
            .restrict_to(&TileBitset::from_tiles(6, [2, 5]));
        let mut rng = StdRng::seed_from_u64(7);

        let tile = collapse_cell(&mut grid, [1, 0], &mut rng)
            .expect("collapse succeeds")
            .expect("cell was undecided");

        assert!(tile == 2 || tile == 5);
        assert_eq!(grid.tile_at(1, 0).expect("in bounds"), Some(tile));
    }

    // Tests collapsing an already collapsed cell is a no-op
    // Verified by removing the early return for collapsed cells
    #[test]
    fn test_collapse_is_idempotent() {
        let mut grid = Grid::new(1, 1, 4).expect("valid grid");
        grid.cell_mut(0, 0)
            .expect("in bounds")
            .restrict_to(&TileBitset::from_tiles(4, [3]));
        let mut rng = StdRng::seed_from_u64(1);

        let result = collapse_cell(&mut grid, [0, 0], &mut rng).expect("collapse succeeds");

        assert_eq!(result, None);
        assert_eq!(grid.tile_at(0, 0).expect("in bounds"), Some(3));
    }

    // Tests collapsing an empty domain is rejected as invalid state
    // Verified by skipping the empty-domain check
    #[test]
    fn test_collapse_empty_domain_fails() {
        let mut grid = Grid::new(1, 1, 3).expect("valid grid");
        grid.cell_mut(0, 0)
            .expect("in bounds")
            .restrict_to(&TileBitset::new(3));
        let mut rng = StdRng::seed_from_u64(1);

        let result = collapse_cell(&mut grid, [0, 0], &mut rng);

        assert!(matches!(
            result,
            Err(WfcError::InvalidState {
                operation: "collapse",
                ..
            })
        ));
    }

    // Tests positions outside the grid are reported as out of bounds
    // Verified by clamping the position into the grid
    #[test]
    fn test_collapse_out_of_bounds() {
        let mut grid = Grid::new(2, 2, 3).expect("valid grid");
        let mut rng = StdRng::seed_from_u64(1);

        let result = collapse_cell(&mut grid, [2, 0], &mut rng);

        assert!(matches!(result, Err(WfcError::OutOfBounds { x: 2, y: 0, .. })));
    }

    // Tests every remaining candidate can be chosen with similar frequency
    // Verified by always selecting the first set bit
    #[test]
    fn test_collapse_distribution_is_uniform() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = [0usize; 4];
        let trials = 4000;

        for _ in 0..trials {
            let mut grid = Grid::new(1, 1, 4).expect("valid grid");
            grid.cell_mut(0, 0)
                .expect("in bounds")
                .restrict_to(&TileBitset::from_tiles(4, [1, 3]));
            let tile = collapse_cell(&mut grid, [0, 0], &mut rng)
                .expect("collapse succeeds")
                .expect("cell was undecided");
            if let Some(count) = counts.get_mut(tile) {
                *count += 1;
            }
        }

        assert_eq!(counts[0] + counts[2], 0);
        assert!(counts[1] > trials * 2 / 5, "tile 1 chosen {} times", counts[1]);
        assert!(counts[3] > trials * 2 / 5, "tile 3 chosen {} times", counts[3]);
    }
}
