use clap::ValueEnum;
use std::fmt;

use crate::catalog::road::{RoadTile, road_ruleset};
use crate::catalog::terrain::{TerrainTile, terrain_ruleset};
use crate::io::error::Result;
use crate::io::image::TileStyle;
use crate::rules::table::AdjacencyTable;

/// One of the bundled tile sets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Catalog {
    /// Grass and T-junction roads
    Roads,
    /// Water, sand, grass and forest with transitions
    Terrain,
}

impl Catalog {
    /// Adjacency rules for this catalog
    ///
    /// # Errors
    ///
    /// Propagates table construction errors
    pub fn ruleset(self) -> Result<AdjacencyTable> {
        match self {
            Self::Roads => road_ruleset(),
            Self::Terrain => terrain_ruleset(),
        }
    }

    /// Number of tiles in the catalog
    pub const fn tile_count(self) -> usize {
        match self {
            Self::Roads => RoadTile::ALL.len(),
            Self::Terrain => TerrainTile::ALL.len(),
        }
    }

    /// Tile names indexed by tile id
    pub fn tile_names(self) -> Vec<&'static str> {
        match self {
            Self::Roads => RoadTile::ALL.iter().map(|tile| tile.name()).collect(),
            Self::Terrain => TerrainTile::ALL.iter().map(|tile| tile.name()).collect(),
        }
    }

    /// Text glyphs indexed by tile id
    pub fn glyphs(self) -> Vec<char> {
        match self {
            Self::Roads => RoadTile::ALL.iter().map(|tile| tile.glyph()).collect(),
            Self::Terrain => TerrainTile::ALL
                .iter()
                .map(|tile| tile.base().glyph())
                .collect(),
        }
    }

    /// Render styles indexed by tile id
    pub fn styles(self) -> Vec<TileStyle> {
        match self {
            Self::Roads => RoadTile::ALL.iter().map(|tile| tile.style()).collect(),
            Self::Terrain => TerrainTile::ALL.iter().map(|tile| tile.style()).collect(),
        }
    }

    /// Grid size `(width, height)` used when none is given
    pub const fn default_size(self) -> (usize, usize) {
        match self {
            Self::Roads => (20, 20),
            Self::Terrain => (30, 30),
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roads => f.write_str("roads"),
            Self::Terrain => f.write_str("terrain"),
        }
    }
}
