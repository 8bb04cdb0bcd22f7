//! Explicit per-tile, per-direction adjacency masks

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, invalid_argument};
use crate::rules::ruleset::Ruleset;
use crate::spatial::direction::Direction;

/// Ruleset backed by one precomputed mask per `(tile, direction)` pair
///
/// Masks are stored flat at `tile * 4 + direction.index()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    tile_count: usize,
    masks: Vec<TileBitset>,
    // Returned for out-of-range tiles so lookups never fail
    empty: TileBitset,
}

impl AdjacencyTable {
    /// Table in which no tile may neighbour any other
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tile_count` is zero
    pub fn new(tile_count: usize) -> Result<Self> {
        Self::filled(tile_count, TileBitset::new(tile_count))
    }

    /// Table in which every tile may neighbour every tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tile_count` is zero
    pub fn permissive(tile_count: usize) -> Result<Self> {
        Self::filled(tile_count, TileBitset::all(tile_count))
    }

    fn filled(tile_count: usize, mask: TileBitset) -> Result<Self> {
        if tile_count == 0 {
            return Err(invalid_argument(
                "tile_count",
                &tile_count,
                &"must be positive",
            ));
        }

        Ok(Self {
            tile_count,
            masks: vec![mask; tile_count * Direction::ALL.len()],
            empty: TileBitset::new(tile_count),
        })
    }

    /// Allow `neighbor` in `direction` from `tile`
    ///
    /// Only this one relation is recorded; see [`Self::allow_symmetric`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either tile id is out of range
    pub fn allow(&mut self, tile: usize, direction: Direction, neighbor: usize) -> Result<()> {
        self.check_tile("neighbor", neighbor)?;
        let mask = self.mask_mut(tile, direction)?;
        mask.insert(neighbor);
        Ok(())
    }

    /// Allow `neighbor` in `direction` from `tile` and the inverse relation
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either tile id is out of range
    pub fn allow_symmetric(
        &mut self,
        tile: usize,
        direction: Direction,
        neighbor: usize,
    ) -> Result<()> {
        self.allow(tile, direction, neighbor)?;
        self.allow(neighbor, direction.opposite(), tile)
    }

    /// Replace the whole mask for `(tile, direction)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tile` is out of range or `mask` was not
    /// built over this table's tile count
    pub fn set_mask(&mut self, tile: usize, direction: Direction, mask: TileBitset) -> Result<()> {
        if mask.capacity() != self.tile_count {
            return Err(invalid_argument(
                "mask",
                &mask,
                &format!("must cover exactly {} tiles", self.tile_count),
            ));
        }
        *self.mask_mut(tile, direction)? = mask;
        Ok(())
    }

    /// True if every allowed pair is also allowed from the other side
    ///
    /// `b` allowed in `d` from `a` must imply `a` allowed in `opposite(d)`
    /// from `b`. The solver does not need this, but hand-written tables that
    /// violate it usually contain a typo.
    pub fn is_symmetric(&self) -> bool {
        (0..self.tile_count).all(|tile| {
            Direction::ALL.iter().all(|&direction| {
                self.allowed_mask(tile, direction)
                    .iter_ones()
                    .all(|neighbor| {
                        self.allowed_mask(neighbor, direction.opposite())
                            .contains(tile)
                    })
            })
        })
    }

    fn check_tile(&self, parameter: &'static str, tile: usize) -> Result<()> {
        if tile < self.tile_count {
            Ok(())
        } else {
            Err(invalid_argument(
                parameter,
                &tile,
                &format!("tile ids range over 0..{}", self.tile_count),
            ))
        }
    }

    fn mask_mut(&mut self, tile: usize, direction: Direction) -> Result<&mut TileBitset> {
        self.check_tile("tile", tile)?;
        let slot = tile * Direction::ALL.len() + direction.index();
        self.masks
            .get_mut(slot)
            .ok_or_else(|| invalid_argument("tile", &tile, &"no mask stored for tile"))
    }
}

impl Ruleset for AdjacencyTable {
    fn tile_count(&self) -> usize {
        self.tile_count
    }

    fn allowed_mask(&self, tile: usize, direction: Direction) -> &TileBitset {
        let slot = tile
            .checked_mul(Direction::ALL.len())
            .and_then(|base| base.checked_add(direction.index()));
        slot.and_then(|index| self.masks.get(index))
            .unwrap_or(&self.empty)
    }
}
