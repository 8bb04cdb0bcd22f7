//! Adjacency contract consumed by the solver

use crate::algorithm::bitset::TileBitset;
use crate::spatial::direction::Direction;

/// Adjacency oracle mapping `(tile, direction)` to the tiles allowed there
///
/// The solver only asks "with `tile` at the source, which tiles may sit in
/// `direction` from it" and never derives the inverse relation itself, so
/// rulesets are free to be asymmetric. Masks are handed out as shared borrows
/// and must stay stable for the ruleset's lifetime.
pub trait Ruleset {
    /// Number of tile ids, `0..tile_count`
    fn tile_count(&self) -> usize;

    /// Tiles allowed in `direction` from a cell holding `tile`
    ///
    /// The mask has length [`Ruleset::tile_count`]. Behaviour for a `tile`
    /// outside `0..tile_count` is implementation-defined.
    fn allowed_mask(&self, tile: usize, direction: Direction) -> &TileBitset;
}

impl<T: Ruleset + ?Sized> Ruleset for &T {
    fn tile_count(&self) -> usize {
        (**self).tile_count()
    }

    fn allowed_mask(&self, tile: usize, direction: Direction) -> &TileBitset {
        (**self).allowed_mask(tile, direction)
    }
}

impl<T: Ruleset + ?Sized> Ruleset for Box<T> {
    fn tile_count(&self) -> usize {
        (**self).tile_count()
    }

    fn allowed_mask(&self, tile: usize, direction: Direction) -> &TileBitset {
        (**self).allowed_mask(tile, direction)
    }
}
