//! Terrain tiles: biomes with transition pieces between neighbouring biomes
//!
//! Every side carries one [`Edge`] label and neighbouring sides must carry
//! the same label. Transition tiles are named after their base material and
//! the material showing on the listed side(s), e.g. `SandWaterNe` is sand
//! with water along its north and east edges.

use crate::io::error::Result;
use crate::io::image::TileStyle;
use crate::rules::edges::matching_edges;
use crate::rules::table::AdjacencyTable;

/// Material along one side of a terrain tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Open ocean
    DeepWater,
    /// Shallow water
    Water,
    /// Beach
    Sand,
    /// Open grassland
    Grass,
    /// Grassland with scattered trees
    GrassTrees,
    /// Closed forest
    Forest,
}

impl Edge {
    /// Render colour of this material
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::DeepWater => [22, 56, 128, 255],
            Self::Water => [52, 112, 196, 255],
            Self::Sand => [222, 204, 140, 255],
            Self::Grass => [110, 180, 80, 255],
            Self::GrassTrees => [70, 140, 60, 255],
            Self::Forest => [28, 92, 40, 255],
        }
    }

    /// Character used in text output
    pub const fn glyph(self) -> char {
        match self {
            Self::DeepWater => '≈',
            Self::Water => '~',
            Self::Sand => '.',
            Self::Grass => ',',
            Self::GrassTrees => 't',
            Self::Forest => 'T',
        }
    }
}

/// Terrain tile, with the tile id being the declaration index
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainTile {
    DeepWater,
    Water,
    Sand,
    Grass,
    GrassTrees,
    ForestTrees,

    WaterDeepN,
    WaterDeepE,
    WaterDeepS,
    WaterDeepW,

    SandWaterN,
    SandWaterE,
    SandWaterS,
    SandWaterW,

    SandWaterNe,
    SandWaterNw,
    SandWaterSe,
    SandWaterSw,

    GrassSandN,
    GrassSandE,
    GrassSandS,
    GrassSandW,

    GrassSandNe,
    GrassSandNw,
    GrassSandSe,
    GrassSandSw,

    GrassTreesN,
    GrassTreesE,
    GrassTreesS,
    GrassTreesW,

    ForestEdgeLight,
    ForestEdgeDense,
}

impl TerrainTile {
    /// All terrain tiles in id order
    pub const ALL: [Self; 32] = [
        Self::DeepWater,
        Self::Water,
        Self::Sand,
        Self::Grass,
        Self::GrassTrees,
        Self::ForestTrees,
        Self::WaterDeepN,
        Self::WaterDeepE,
        Self::WaterDeepS,
        Self::WaterDeepW,
        Self::SandWaterN,
        Self::SandWaterE,
        Self::SandWaterS,
        Self::SandWaterW,
        Self::SandWaterNe,
        Self::SandWaterNw,
        Self::SandWaterSe,
        Self::SandWaterSw,
        Self::GrassSandN,
        Self::GrassSandE,
        Self::GrassSandS,
        Self::GrassSandW,
        Self::GrassSandNe,
        Self::GrassSandNw,
        Self::GrassSandSe,
        Self::GrassSandSw,
        Self::GrassTreesN,
        Self::GrassTreesE,
        Self::GrassTreesS,
        Self::GrassTreesW,
        Self::ForestEdgeLight,
        Self::ForestEdgeDense,
    ];

    /// Tile id used by the solver
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Tile for a solver id
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Edge labels in north, east, south, west order
    pub const fn edges(self) -> [Edge; 4] {
        use Edge::{DeepWater as D, Forest as F, Grass as G, GrassTrees as T, Sand as S, Water as W};

        match self {
            Self::DeepWater => [D, D, D, D],
            Self::Water => [W, W, W, W],
            Self::Sand => [S, S, S, S],
            Self::Grass => [G, G, G, G],
            Self::GrassTrees => [T, T, T, T],
            Self::ForestTrees | Self::ForestEdgeDense => [F, F, F, F],

            Self::WaterDeepN => [D, W, W, W],
            Self::WaterDeepE => [W, D, W, W],
            Self::WaterDeepS => [W, W, D, W],
            Self::WaterDeepW => [W, W, W, D],

            Self::SandWaterN => [W, S, S, S],
            Self::SandWaterE => [S, W, S, S],
            Self::SandWaterS => [S, S, W, S],
            Self::SandWaterW => [S, S, S, W],

            Self::SandWaterNe => [W, W, S, S],
            Self::SandWaterNw => [W, S, S, W],
            Self::SandWaterSe => [S, W, W, S],
            Self::SandWaterSw => [S, S, W, W],

            Self::GrassSandN => [S, G, G, G],
            Self::GrassSandE => [G, S, G, G],
            Self::GrassSandS => [G, G, S, G],
            Self::GrassSandW => [G, G, G, S],

            Self::GrassSandNe => [S, S, G, G],
            Self::GrassSandNw => [S, G, G, S],
            Self::GrassSandSe => [G, S, S, G],
            Self::GrassSandSw => [G, G, S, S],

            Self::GrassTreesN => [T, G, G, G],
            Self::GrassTreesE => [G, T, G, G],
            Self::GrassTreesS => [G, G, T, G],
            Self::GrassTreesW => [G, G, G, T],

            // Forest on three sides, blending into scattered trees westwards
            Self::ForestEdgeLight => [F, F, F, T],
        }
    }

    /// Material filling the body of the tile
    pub const fn base(self) -> Edge {
        match self {
            Self::DeepWater => Edge::DeepWater,
            Self::Water
            | Self::WaterDeepN
            | Self::WaterDeepE
            | Self::WaterDeepS
            | Self::WaterDeepW => Edge::Water,
            Self::Sand
            | Self::SandWaterN
            | Self::SandWaterE
            | Self::SandWaterS
            | Self::SandWaterW
            | Self::SandWaterNe
            | Self::SandWaterNw
            | Self::SandWaterSe
            | Self::SandWaterSw => Edge::Sand,
            Self::Grass
            | Self::GrassSandN
            | Self::GrassSandE
            | Self::GrassSandS
            | Self::GrassSandW
            | Self::GrassSandNe
            | Self::GrassSandNw
            | Self::GrassSandSe
            | Self::GrassSandSw
            | Self::GrassTreesN
            | Self::GrassTreesE
            | Self::GrassTreesS
            | Self::GrassTreesW => Edge::Grass,
            Self::GrassTrees => Edge::GrassTrees,
            Self::ForestTrees | Self::ForestEdgeLight | Self::ForestEdgeDense => Edge::Forest,
        }
    }

    /// Symbolic name in snake case
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepWater => "deepwater",
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::GrassTrees => "grass_trees",
            Self::ForestTrees => "forest_trees",
            Self::WaterDeepN => "water_deep_n",
            Self::WaterDeepE => "water_deep_e",
            Self::WaterDeepS => "water_deep_s",
            Self::WaterDeepW => "water_deep_w",
            Self::SandWaterN => "sand_water_n",
            Self::SandWaterE => "sand_water_e",
            Self::SandWaterS => "sand_water_s",
            Self::SandWaterW => "sand_water_w",
            Self::SandWaterNe => "sand_water_ne",
            Self::SandWaterNw => "sand_water_nw",
            Self::SandWaterSe => "sand_water_se",
            Self::SandWaterSw => "sand_water_sw",
            Self::GrassSandN => "grass_sand_n",
            Self::GrassSandE => "grass_sand_e",
            Self::GrassSandS => "grass_sand_s",
            Self::GrassSandW => "grass_sand_w",
            Self::GrassSandNe => "grass_sand_ne",
            Self::GrassSandNw => "grass_sand_nw",
            Self::GrassSandSe => "grass_sand_se",
            Self::GrassSandSw => "grass_sand_sw",
            Self::GrassTreesN => "grass_trees_n",
            Self::GrassTreesE => "grass_trees_e",
            Self::GrassTreesS => "grass_trees_s",
            Self::GrassTreesW => "grass_trees_w",
            Self::ForestEdgeLight => "forest_edge_light",
            Self::ForestEdgeDense => "forest_edge_dense",
        }
    }

    /// Colours for rendering: body in the base material, sides per edge
    pub const fn style(self) -> TileStyle {
        let [n, e, s, w] = self.edges();
        TileStyle {
            center: self.base().color(),
            sides: [n.color(), e.color(), s.color(), w.color()],
        }
    }
}

/// Terrain adjacency: touching sides must carry the same edge label
///
/// # Errors
///
/// Propagates table construction errors
pub fn terrain_ruleset() -> Result<AdjacencyTable> {
    let edges: Vec<[Edge; 4]> = TerrainTile::ALL.iter().map(|tile| tile.edges()).collect();
    matching_edges(&edges)
}
