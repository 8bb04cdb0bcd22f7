//! Adjacency derived from per-side edge labels
//!
//! Each tile declares a label for its north, east, south and west sides
//! (in [`Direction::ALL`] order). Two tiles may touch across an edge when the
//! labels on the touching sides are equal.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::Result;
use crate::rules::table::AdjacencyTable;
use crate::spatial::direction::Direction;

/// Build a table allowing `b` in direction `d` of `a` iff
/// `edges[a][d] == edges[b][opposite(d)]`
///
/// The result is symmetric by construction.
///
/// # Errors
///
/// Returns `InvalidArgument` if `tile_edges` is empty
pub fn matching_edges<E: PartialEq>(tile_edges: &[[E; 4]]) -> Result<AdjacencyTable> {
    let tile_count = tile_edges.len();
    let mut table = AdjacencyTable::new(tile_count)?;

    for (tile, edges) in tile_edges.iter().enumerate() {
        for (direction, need) in Direction::ALL.into_iter().zip(edges) {
            let facing = direction.opposite().index();
            let mask = TileBitset::from_tiles(
                tile_count,
                tile_edges
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| other.get(facing) == Some(need))
                    .map(|(neighbor, _)| neighbor),
            );
            table.set_mask(tile, direction, mask)?;
        }
    }

    Ok(table)
}
