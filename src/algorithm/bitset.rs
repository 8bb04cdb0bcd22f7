use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of tile ids used for domains and adjacency masks
///
/// Uses 0-based indexing, so tile `i` is bit `i`. All sets taking part in one
/// solve share the same length: the tile count of the ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Create a bitset containing all possible tiles
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Create a bitset holding the given tiles
    ///
    /// Ids outside `0..tile_count` are ignored.
    pub fn from_tiles(tile_count: usize, tiles: impl IntoIterator<Item = usize>) -> Self {
        let mut bitset = Self::new(tile_count);
        for tile in tiles {
            bitset.insert(tile);
        }
        bitset
    }

    /// Number of tile ids this set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile id, returning whether it was newly added
    pub fn insert(&mut self, tile: usize) -> bool {
        match self.bits.get_mut(tile) {
            Some(mut bit) => !bit.replace(true),
            None => false,
        }
    }

    /// Remove a tile id, returning whether it was present
    pub fn remove(&mut self, tile: usize) -> bool {
        match self.bits.get_mut(tile) {
            Some(mut bit) => bit.replace(false),
            None => false,
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    ///
    /// Returns true iff any tile was removed. Intersection only ever clears
    /// bits, so comparing population counts detects a change.
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        let before = self.count();
        self.bits &= &other.bits;
        self.count() != before
    }

    /// Add every tile of another bitset in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present tile ids in ascending order
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The `k`-th present tile id in ascending order
    pub fn nth_one(&self, k: usize) -> Option<usize> {
        self.bits.iter_ones().nth(k)
    }

    /// Extract all tile ids as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
