//! Road tiles: grass and T-junctions that must join open sides to open sides

use crate::io::error::Result;
use crate::io::image::TileStyle;
use crate::rules::edges::matching_edges;
use crate::rules::table::AdjacencyTable;
use crate::spatial::direction::Direction;

const ROAD_COLOR: [u8; 4] = [90, 90, 96, 255];
const GRASS_COLOR: [u8; 4] = [96, 168, 72, 255];

/// Road tile, with the tile id being the declaration index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadTile {
    /// Grass, closed on every side
    Blank,
    /// Junction open to the north, east and west
    Up,
    /// Junction open to the north, east and south
    Right,
    /// Junction open to the east, south and west
    Down,
    /// Junction open to the north, south and west
    Left,
}

impl RoadTile {
    /// All road tiles in id order
    pub const ALL: [Self; 5] = [Self::Blank, Self::Up, Self::Right, Self::Down, Self::Left];

    /// Open sides as a bit mask in direction order
    pub const fn open_sides(self) -> u8 {
        match self {
            Self::Blank => 0b0000,
            Self::Up => 0b1011,
            Self::Right => 0b0111,
            Self::Down => 0b1110,
            Self::Left => 0b1101,
        }
    }

    /// True if a road leaves this tile through `direction`
    pub const fn is_open(self, direction: Direction) -> bool {
        self.open_sides() & direction.bit() != 0
    }

    /// Tile id used by the solver
    pub const fn id(self) -> usize {
        self as usize
    }

    /// Tile for a solver id
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    /// Symbolic name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }

    /// Box-drawing character for text output
    pub const fn glyph(self) -> char {
        match self {
            Self::Blank => '·',
            Self::Up => '┴',
            Self::Right => '├',
            Self::Down => '┬',
            Self::Left => '┤',
        }
    }

    /// Colours for rendering: open sides are road, closed sides grass
    pub fn style(self) -> TileStyle {
        let sides = Direction::ALL.map(|direction| {
            if self.is_open(direction) {
                ROAD_COLOR
            } else {
                GRASS_COLOR
            }
        });
        let center = if self.open_sides() == 0 {
            GRASS_COLOR
        } else {
            ROAD_COLOR
        };
        TileStyle { center, sides }
    }
}

/// Road adjacency: two tiles may touch iff both or neither side is open
///
/// # Errors
///
/// Propagates table construction errors
pub fn road_ruleset() -> Result<AdjacencyTable> {
    let edges: Vec<[bool; 4]> = RoadTile::ALL
        .iter()
        .map(|tile| Direction::ALL.map(|direction| tile.is_open(direction)))
        .collect();
    matching_edges(&edges)
}
