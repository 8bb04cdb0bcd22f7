use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, invalid_state};
use crate::spatial::grid::{Grid, Position};
use rand::Rng;

/// Reduce the cell at `position` to one uniformly chosen candidate
///
/// Candidates are enumerated in ascending id order and the `k`-th is kept,
/// with `k` drawn from `0..size`. An already collapsed cell is left alone
/// and no random draw is made.
///
/// Returns the chosen tile, or `None` if the cell was already collapsed.
///
/// # Errors
///
/// Returns:
/// - `OutOfBounds` if `position` is not inside the grid
/// - `InvalidState` if the cell's domain is empty
pub fn collapse_cell<G: Rng + ?Sized>(
    grid: &mut Grid,
    position: Position,
    rng: &mut G,
) -> Result<Option<usize>> {
    let [x, y] = position;
    let tile_count = grid.tile_count();
    let cell = grid.cell_mut(x as i64, y as i64)?;

    if cell.is_empty() {
        return Err(invalid_state(
            "collapse",
            &format!("cell ({x}, {y}) has an empty domain"),
        ));
    }

    if cell.is_collapsed() {
        return Ok(None);
    }

    let choice = rng.random_range(0..cell.options_count());
    let tile = cell
        .domain()
        .as_bitset()
        .nth_one(choice)
        .ok_or_else(|| {
            invalid_state(
                "collapse",
                &format!("failed to select a tile at ({x}, {y})"),
            )
        })?;

    cell.restrict_to(&TileBitset::from_tiles(tile_count, [tile]));
    log::trace!("collapsed ({x}, {y}) to tile {tile}");

    Ok(Some(tile))
}
