//! Solver state machine driving selection, collapse and propagation
//!
//! Each [`Solver::step`] picks the most constrained undecided cell, collapses
//! it at random and propagates the consequences. Status moves from
//! `Running` to one of the absorbing states `Solved` or `Contradiction`.
//! There is no backtracking: a contradiction is final for this solver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::collapse::collapse_cell;
use crate::algorithm::propagation::{PropagationOutcome, Propagator};
use crate::algorithm::selection::select_min_entropy_position;
use crate::io::error::{Result, invalid_argument, invalid_state};
use crate::rules::ruleset::Ruleset;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Lifecycle of a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Undecided cells remain and no domain is empty
    Running,
    /// Every cell holds exactly one tile
    Solved,
    /// Some cell has no candidate left
    Contradiction,
}

impl Status {
    /// True for `Solved` and `Contradiction`
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Running => "RUNNING",
            Self::Solved => "SOLVED",
            Self::Contradiction => "CONTRADICTION",
        };
        write!(f, "{label}")
    }
}

/// Wave function collapse solver over an owned grid
///
/// The random source is injected so runs can be replayed; see
/// [`Solver::with_seed`] and [`Solver::with_rng`].
#[derive(Debug)]
pub struct Solver<R, G = StdRng> {
    grid: Grid,
    ruleset: R,
    rng: G,
    propagator: Propagator,
    status: Status,
    steps: usize,
}

impl<R: Ruleset> Solver<R, StdRng> {
    /// Create a solver seeded from operating system entropy
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the grid and ruleset disagree on the tile
    /// count or a ruleset mask has the wrong length
    pub fn new(grid: Grid, ruleset: R) -> Result<Self> {
        Self::with_rng(grid, ruleset, StdRng::from_os_rng())
    }

    /// Create a solver whose random choices are fixed by `seed`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the grid and ruleset disagree on the tile
    /// count or a ruleset mask has the wrong length
    pub fn with_seed(grid: Grid, ruleset: R, seed: u64) -> Result<Self> {
        Self::with_rng(grid, ruleset, StdRng::seed_from_u64(seed))
    }
}

impl<R: Ruleset, G: Rng> Solver<R, G> {
    /// Create a solver drawing from the given random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the grid and ruleset disagree on the tile
    /// count or a ruleset mask has the wrong length
    pub fn with_rng(grid: Grid, ruleset: R, rng: G) -> Result<Self> {
        let tile_count = grid.tile_count();
        if ruleset.tile_count() != tile_count {
            return Err(invalid_argument(
                "ruleset",
                &ruleset.tile_count(),
                &format!("tile count must match the grid's {tile_count}"),
            ));
        }

        for tile in 0..tile_count {
            for direction in Direction::ALL {
                let length = ruleset.allowed_mask(tile, direction).capacity();
                if length != tile_count {
                    return Err(invalid_argument(
                        "ruleset",
                        &length,
                        &format!(
                            "mask for tile {tile} towards {direction} must have length {tile_count}"
                        ),
                    ));
                }
            }
        }

        log::debug!(
            "solver created for {}x{} grid with {tile_count} tiles",
            grid.width(),
            grid.height()
        );

        Ok(Self {
            propagator: Propagator::new(&grid),
            grid,
            ruleset,
            rng,
            status: Status::Running,
            steps: 0,
        })
    }

    /// Advance by one selection, collapse and propagation
    ///
    /// Returns `false` without touching the grid once the status is
    /// terminal, and `true` whenever work was attempted.
    ///
    /// # Errors
    ///
    /// Returns an error only if an internal precondition is violated, which
    /// indicates a bug rather than an unsolvable grid
    pub fn step(&mut self) -> Result<bool> {
        if self.status.is_terminal() {
            return Ok(false);
        }

        if self.check_contradiction() || self.check_solved() {
            return Ok(true);
        }

        let Some(target) = select_min_entropy_position(&self.grid, &mut self.rng) else {
            self.set_status(Status::Solved);
            return Ok(true);
        };

        collapse_cell(&mut self.grid, target, &mut self.rng)?;
        self.steps += 1;

        let outcome = self
            .propagator
            .propagate_from(&mut self.grid, &self.ruleset, target)?;
        if let PropagationOutcome::Contradiction { position } = outcome {
            log::trace!("contradiction at {position:?} after collapsing {target:?}");
        }

        self.refresh_status();
        Ok(true)
    }

    /// Step until a terminal status or until `max_steps` calls were made
    ///
    /// `None` runs to completion, which always terminates since every step
    /// collapses a cell or ends the solve.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by [`Self::step`]
    pub fn run(&mut self, max_steps: Option<usize>) -> Result<Status> {
        let mut taken = 0;
        while !self.status.is_terminal() {
            if max_steps.is_some_and(|limit| taken >= limit) {
                break;
            }
            self.step()?;
            taken += 1;
        }
        Ok(self.status)
    }

    /// Restrict the cell at `(x, y)` to `mask` and propagate the change
    ///
    /// Used to seed fixed tiles before solving. Status is refreshed
    /// afterwards, so an impossible constraint ends in `Contradiction`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidState` if the solve has already finished
    /// - `InvalidArgument` if `mask` has the wrong length
    /// - `OutOfBounds` if `(x, y)` is outside the grid
    pub fn constrain(&mut self, x: i64, y: i64, mask: &TileBitset) -> Result<PropagationOutcome> {
        if self.status.is_terminal() {
            return Err(invalid_state(
                "constrain",
                &format!("solver already finished with status {}", self.status),
            ));
        }
        if mask.capacity() != self.grid.tile_count() {
            return Err(invalid_argument(
                "mask",
                &mask.capacity(),
                &format!("length must be {}", self.grid.tile_count()),
            ));
        }

        let position = self.grid.checked_position(x, y)?;
        self.grid.cell_mut(x, y)?.restrict_to(mask);

        let outcome = self
            .propagator
            .propagate_from(&mut self.grid, &self.ruleset, position)?;
        self.refresh_status();
        Ok(outcome)
    }

    /// Propagate the current domain of `(x, y)` to its surroundings
    ///
    /// Leaves the status untouched; follow with [`Self::check_contradiction`]
    /// to record any contradiction found.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn propagate_from(&mut self, x: i64, y: i64) -> Result<PropagationOutcome> {
        let position = self.grid.checked_position(x, y)?;
        self.propagator
            .propagate_from(&mut self.grid, &self.ruleset, position)
    }

    /// Scan for an empty domain, moving to `Contradiction` if one exists
    pub fn check_contradiction(&mut self) -> bool {
        let found = self.grid.has_empty_cell();
        if found {
            self.set_status(Status::Contradiction);
        }
        found
    }

    /// Scan for a fully collapsed grid, moving to `Solved` if so
    pub fn check_solved(&mut self) -> bool {
        let solved = self.grid.is_fully_collapsed();
        if solved {
            self.set_status(Status::Solved);
        }
        solved
    }

    /// Current status
    pub const fn status(&self) -> Status {
        self.status
    }

    /// True once every cell holds one tile
    pub const fn is_solved(&self) -> bool {
        matches!(self.status, Status::Solved)
    }

    /// True once some domain emptied
    pub const fn has_contradiction(&self) -> bool {
        matches!(self.status, Status::Contradiction)
    }

    /// Number of cells collapsed by [`Self::step`] so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Read access to the grid being solved
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The adjacency rules in use
    pub const fn ruleset(&self) -> &R {
        &self.ruleset
    }

    /// Consume the solver, keeping the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn refresh_status(&mut self) {
        if !self.check_contradiction() {
            self.check_solved();
        }
    }

    fn set_status(&mut self, status: Status) {
        if self.status != status {
            log::debug!(
                "solver status {} -> {status} after {} steps",
                self.status,
                self.steps
            );
            self.status = status;
        }
    }
}
