//! The four sides of a cell on a 4-connected grid

use std::fmt;

/// Side of a cell, with north pointing towards increasing `y`
///
/// The declaration order is the bit order used by every adjacency and
/// side mask: North = bit 0, East = 1, South = 2, West = 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards `y + 1`
    North,
    /// Towards `x + 1`
    East,
    /// Towards `y - 1`
    South,
    /// Towards `x - 1`
    West,
}

impl Direction {
    /// All directions in propagation order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step `[dx, dy]` taken when moving in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [0, 1],
            Self::East => [1, 0],
            Self::South => [0, -1],
            Self::West => [-1, 0],
        }
    }

    /// The side facing this one across an edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Stable bit index of this direction
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-bit side mask (`1 << index`)
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
