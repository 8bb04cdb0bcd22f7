//! Fixed-size grid of cells with bounds-checked coordinate access
//!
//! Coordinates are `(x, y)` with `x` in `0..width` and `y` in `0..height`.
//! Cells are stored in an `Array2` indexed `[x, y]`, so the logical iteration
//! order is x-major: every scan visits `(0, 0), (0, 1), .., (1, 0), ..`.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, WfcError, invalid_argument};
use crate::spatial::cell::Cell;
use crate::spatial::direction::Direction;

/// Grid index `[x, y]` of a cell known to be in bounds
pub type Position = [usize; 2];

/// Width x height array of cells sharing one tile count
///
/// Dimensions and tile count are fixed at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
    tile_count: usize,
}

impl Grid {
    /// Create a grid where every cell can still be any tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a dimension or the tile count is zero, or
    /// a dimension exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize, tile_count: usize) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(invalid_argument(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_argument(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if tile_count == 0 {
            return Err(invalid_argument(
                "tile_count",
                &tile_count,
                &"must be positive",
            ));
        }

        Ok(Self {
            cells: Array2::from_elem((width, height), Cell::new(tile_count)),
            width,
            height,
            tile_count,
        })
    }

    /// Get the number of columns in the grid
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the number of rows in the grid
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of tile ids every cell's domain ranges over
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check whether `(x, y)` lies inside the grid
    pub const fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn cell(&self, x: i64, y: i64) -> Result<&Cell> {
        let position = self.checked_position(x, y)?;
        self.cells
            .get(position)
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Mutable cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn cell_mut(&mut self, x: i64, y: i64) -> Result<&mut Cell> {
        let position = self.checked_position(x, y)?;
        let error = self.out_of_bounds(x, y);
        self.cells.get_mut(position).ok_or(error)
    }

    /// Whether the cell at `(x, y)` holds exactly one candidate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn is_collapsed(&self, x: i64, y: i64) -> Result<bool> {
        Ok(self.cell(x, y)?.is_collapsed())
    }

    /// Remaining candidate count of the cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn options_count(&self, x: i64, y: i64) -> Result<usize> {
        Ok(self.cell(x, y)?.options_count())
    }

    /// Tile chosen for the cell at `(x, y)`, if it has collapsed
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn tile_at(&self, x: i64, y: i64) -> Result<Option<usize>> {
        Ok(self.cell(x, y)?.tile())
    }

    /// Cell at an index produced by this grid
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Mutable cell at an index produced by this grid
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// Convert external coordinates to a grid index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the grid
    pub fn checked_position(&self, x: i64, y: i64) -> Result<Position> {
        if self.in_bounds(x, y) {
            Ok([x as usize, y as usize])
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    /// Index of the neighbour of `position` in `direction`, if inside the grid
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let [dx, dy] = direction.offset();
        let x = position[0].checked_add_signed(dx as isize)?;
        let y = position[1].checked_add_signed(dy as isize)?;
        (x < self.width && y < self.height).then_some([x, y])
    }

    /// Every grid index in x-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| [x, y]))
    }

    /// Every cell with its index, in x-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells.indexed_iter().map(|((x, y), cell)| ([x, y], cell))
    }

    /// True if some cell's domain is empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    /// True if every cell holds exactly one candidate
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Number of cells holding exactly one candidate
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    const fn out_of_bounds(&self, x: i64, y: i64) -> WfcError {
        WfcError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
