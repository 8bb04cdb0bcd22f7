//! Adjacency rules consulted during propagation

/// Rules derived from matching side labels
pub mod edges;
/// Contract between the solver and its adjacency rules
pub mod ruleset;
/// Explicit table of allowed neighbours
pub mod table;

pub use ruleset::Ruleset;
pub use table::AdjacencyTable;
