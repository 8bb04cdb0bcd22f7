//! Worklist propagation of domain restrictions to a fixed point
//!
//! After a cell changes, each neighbour is restricted to the union of the
//! masks allowed by the cell's remaining tiles. Neighbours that shrink are
//! queued in turn, breadth first, until nothing changes or a domain empties.

use ndarray::Array2;
use std::collections::VecDeque;

use crate::algorithm::bitset::TileBitset;
use crate::io::error::Result;
use crate::rules::ruleset::Ruleset;
use crate::spatial::cell::Cell;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Grid, Position};

/// How a propagation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// The worklist drained; every constraint reached a fixed point
    Settled {
        /// Number of positions dequeued and examined
        processed: usize,
    },
    /// A domain was found or made empty and propagation stopped early
    Contradiction {
        /// The cell whose domain is empty
        position: Position,
    },
}

impl PropagationOutcome {
    /// True if propagation stopped on an empty domain
    pub const fn is_contradiction(&self) -> bool {
        matches!(self, Self::Contradiction { .. })
    }
}

/// Reusable worklist for propagating from changed cells
///
/// Holds a FIFO queue and a grid-sized membership set so that a position is
/// never queued twice. Buffers are kept between runs to avoid reallocating.
#[derive(Debug, Clone)]
pub struct Propagator {
    queue: VecDeque<Position>,
    queued: Array2<bool>,
    support: TileBitset,
}

impl Propagator {
    /// Create a propagator sized for `grid`
    pub fn new(grid: &Grid) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: Array2::from_elem((grid.width(), grid.height()), false),
            support: TileBitset::new(grid.tile_count()),
        }
    }

    /// Propagate the current domain of `start` outward until a fixed point
    ///
    /// Domains only ever shrink. A contradiction is an outcome, not an error:
    /// the grid is left with the empty domain in place for the caller's scan
    /// to find.
    ///
    /// When restricting a neighbour empties it, the remaining sides of the
    /// same source cell are still restricted before propagation stops, so
    /// every neighbour the source rules out ends up empty. The reported
    /// position is the first neighbour emptied.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `start` is not inside the grid
    pub fn propagate_from<R: Ruleset + ?Sized>(
        &mut self,
        grid: &mut Grid,
        ruleset: &R,
        start: Position,
    ) -> Result<PropagationOutcome> {
        grid.checked_position(start[0] as i64, start[1] as i64)?;

        if self.queued.dim() != (grid.width(), grid.height()) {
            self.queued = Array2::from_elem((grid.width(), grid.height()), false);
        }
        if self.support.capacity() != grid.tile_count() {
            self.support = TileBitset::new(grid.tile_count());
        }

        self.reset();
        self.enqueue(start);

        let mut processed = 0;
        while let Some(position) = self.queue.pop_front() {
            if let Some(flag) = self.queued.get_mut(position) {
                *flag = false;
            }
            processed += 1;

            let Some(source) = grid.get(position).map(Cell::domain_copy) else {
                continue;
            };
            if source.is_empty() {
                self.reset();
                return Ok(PropagationOutcome::Contradiction { position });
            }

            // An emptied neighbour ends propagation once this cell's
            // remaining sides are restricted; nothing further is queued.
            let mut emptied = None;
            for direction in Direction::ALL {
                let Some(neighbor) = grid.neighbor(position, direction) else {
                    continue;
                };
                let Some(cell) = grid.get_mut(neighbor) else {
                    continue;
                };

                if cell.is_empty() {
                    if emptied.is_some() {
                        continue;
                    }
                    self.reset();
                    return Ok(PropagationOutcome::Contradiction { position: neighbor });
                }

                self.support.clear();
                for tile in source.options() {
                    self.support.union_with(ruleset.allowed_mask(tile, direction));
                }

                let changed = cell.restrict_to(&self.support);

                if cell.is_empty() {
                    log::trace!("propagation from {position:?} emptied {neighbor:?} ({direction})");
                    if emptied.is_none() {
                        emptied = Some(neighbor);
                    }
                } else if changed && emptied.is_none() {
                    self.enqueue(neighbor);
                }
            }

            if let Some(empty_at) = emptied {
                self.reset();
                return Ok(PropagationOutcome::Contradiction { position: empty_at });
            }
        }

        Ok(PropagationOutcome::Settled { processed })
    }

    fn enqueue(&mut self, position: Position) {
        if let Some(flag) = self.queued.get_mut(position)
            && !*flag
        {
            *flag = true;
            self.queue.push_back(position);
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.queued.fill(false);
    }
}
