//! Spatial data model of the solver
//!
//! This module contains:
//! - The four grid directions and their offsets
//! - Per-cell domains of candidate tiles
//! - The fixed-size grid of cells

/// Cell wrapping one domain
pub mod cell;
/// Grid directions, offsets and opposites
pub mod direction;
/// Set of tiles still possible for a cell
pub mod domain;
/// Grid of cells with bounds-checked access
pub mod grid;

pub use direction::Direction;
pub use grid::{Grid, Position};
