/// Bitset of tile ids shared by domains and adjacency masks
pub mod bitset;
/// Random collapse of a single cell
pub mod collapse;
/// Worklist propagation of domain restrictions
pub mod propagation;
/// Minimum-entropy cell selection with random tie-break
pub mod selection;
/// Solver state machine tying selection, collapse and propagation together
pub mod solver;

pub use solver::{Solver, Status};
