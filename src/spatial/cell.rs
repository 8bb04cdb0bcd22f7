//! Grid cell wrapping a single domain

use crate::algorithm::bitset::TileBitset;
use crate::io::error::Result;
use crate::spatial::domain::Domain;

/// One grid position's state
///
/// Holds no coordinate; the grid supplies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    domain: Domain,
}

impl Cell {
    /// Cell whose domain holds every tile in `0..tile_count`
    pub fn new(tile_count: usize) -> Self {
        Self {
            domain: Domain::full(tile_count),
        }
    }

    /// Cell owning an existing domain
    pub const fn from_domain(domain: Domain) -> Self {
        Self { domain }
    }

    /// Number of remaining candidates
    pub fn options_count(&self) -> usize {
        self.domain.size()
    }

    /// Remaining candidate count used by the selection heuristic
    pub fn entropy(&self) -> usize {
        self.domain.size()
    }

    /// True if no candidate remains
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// True if exactly one candidate remains
    pub fn is_collapsed(&self) -> bool {
        self.domain.is_collapsed()
    }

    /// The tile this cell collapsed to
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the cell is not collapsed
    pub fn only_option_id(&self) -> Result<usize> {
        self.domain.only_option()
    }

    /// Collapsed tile, if any
    pub fn tile(&self) -> Option<usize> {
        if self.is_collapsed() {
            self.domain.options().next()
        } else {
            None
        }
    }

    /// Read-only access to the domain
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Snapshot of the domain, independent of later restriction
    pub fn domain_copy(&self) -> Domain {
        self.domain.clone()
    }

    /// Intersect the domain with `allowed`, returning whether it changed
    pub fn restrict_to(&mut self, allowed: &TileBitset) -> bool {
        self.domain.restrict_to(allowed)
    }
}
