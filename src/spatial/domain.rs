//! Candidate tile set of a single cell

use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, invalid_state};

/// Tiles still possible for one cell
///
/// Created full and only ever shrinks: the sole mutation is
/// [`Domain::restrict_to`], an intersection with an externally supplied mask.
/// `Clone` gives an independent deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    possible: TileBitset,
}

impl Domain {
    /// Domain with every tile in `0..tile_count` possible
    ///
    /// A zero tile count yields a permanently empty domain; the owning grid
    /// rejects that case.
    pub fn full(tile_count: usize) -> Self {
        Self {
            possible: TileBitset::all(tile_count),
        }
    }

    /// Number of tile ids the domain was created over
    pub fn tile_count(&self) -> usize {
        self.possible.capacity()
    }

    /// Number of remaining candidates
    pub fn size(&self) -> usize {
        self.possible.count()
    }

    /// True if no candidate remains
    pub fn is_empty(&self) -> bool {
        self.possible.is_empty()
    }

    /// True if exactly one candidate remains
    pub fn is_collapsed(&self) -> bool {
        self.size() == 1
    }

    /// The single remaining candidate
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the domain is not collapsed
    pub fn only_option(&self) -> Result<usize> {
        if !self.is_collapsed() {
            return Err(invalid_state(
                "only_option",
                &format!("domain holds {} candidates ({self})", self.size()),
            ));
        }
        self.possible
            .nth_one(0)
            .ok_or_else(|| invalid_state("only_option", &"collapsed domain has no set bit"))
    }

    /// Test whether `tile` is still possible
    pub fn contains(&self, tile: usize) -> bool {
        self.possible.contains(tile)
    }

    /// Remaining candidates in ascending order
    pub fn options(&self) -> impl Iterator<Item = usize> + '_ {
        self.possible.iter_ones()
    }

    /// Intersect with `allowed`, returning whether any candidate was removed
    pub fn restrict_to(&mut self, allowed: &TileBitset) -> bool {
        self.possible.intersect_with(allowed)
    }

    /// Read-only view of the candidate bits
    pub const fn as_bitset(&self) -> &TileBitset {
        &self.possible
    }

    /// Independent copy of the candidate bits
    pub fn to_bitset(&self) -> TileBitset {
        self.possible.clone()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.options().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
