//! Wave function collapse on a 2D grid of tiles
//!
//! Each cell starts able to hold any tile. The solver repeatedly collapses
//! the most constrained cell to a random candidate and propagates adjacency
//! constraints until the grid is solved or a cell runs out of candidates.

#![forbid(unsafe_code)]

/// Selection, collapse, propagation and the solver state machine
pub mod algorithm;
/// Built-in road and terrain tile sets
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Adjacency rules and their implementations
pub mod rules;
/// Directions, domains, cells and the grid
pub mod spatial;

pub use io::error::{Result, WfcError};
