use crate::spatial::grid::{Grid, Position};
use rand::Rng;

/// Find every undecided cell sharing the minimum entropy
///
/// Only cells with more than one candidate qualify, so collapsed and empty
/// cells are never returned. Positions come back in x-major scan order.
pub fn min_entropy_candidates(grid: &Grid) -> Vec<Position> {
    let mut min_entropy = usize::MAX;
    let mut candidates = Vec::new();

    for (position, cell) in grid.cells() {
        let entropy = cell.entropy();
        if entropy <= 1 {
            continue;
        }

        if entropy < min_entropy {
            min_entropy = entropy;
            candidates.clear();
            candidates.push(position);
        } else if entropy == min_entropy {
            candidates.push(position);
        }
    }

    candidates
}

/// Pick the most constrained undecided cell, breaking ties uniformly
///
/// Returns `None` when no cell has more than one candidate left.
pub fn select_min_entropy_position<G: Rng + ?Sized>(grid: &Grid, rng: &mut G) -> Option<Position> {
    let candidates = min_entropy_candidates(grid);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.random_range(0..candidates.len());
    candidates.get(index).copied()
}
