use std::fmt;

use bit_set::BitSet;

use crate::cells::{Cartesian2DCoordinate, Cell, MoveDirection};
use crate::units::{ColumnsCount, Height, RowsCount, Width};

/// Rectangular grid of wall and open cells.
///
/// A set bit means the cell is `Open`, so a freshly built grid is solid wall.
#[derive(Clone)]
pub struct Grid {
    open_cells: BitSet,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, open: {}",
               self.rows, self.columns, self.open_count())
    }
}

impl Grid {
    /// A grid of `rows * columns` cells, all `Wall`.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Grid {
        Grid {
            open_cells: BitSet::with_capacity(rows.0 * columns.0),
            rows,
            columns,
        }
    }

    /// A wall grid with room for `width * height` corridor cells and the walls around them.
    pub fn for_corridors(width: Width, height: Height) -> Grid {
        Grid::new(RowsCount::from(height), ColumnsCount::from(width))
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    /// Number of corridor cells across, the inverse of `2 * width + 1`.
    #[inline]
    pub fn width(&self) -> Width {
        Width(self.columns.0.saturating_sub(1) / 2)
    }

    /// Number of corridor cells down, the inverse of `2 * height + 1`.
    #[inline]
    pub fn height(&self) -> Height {
        Height(self.rows.0.saturating_sub(1) / 2)
    }

    /// Is the grid coordinate within the grid's dimensions?
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.columns.0 && (coord.y as usize) < self.rows.0
    }

    /// Is the coordinate strictly inside the outer wall ring?
    #[inline]
    pub fn is_interior_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x > 0 && coord.y > 0 &&
        (coord.x as usize) + 1 < self.columns.0 && (coord.y as usize) + 1 < self.rows.0
    }

    #[inline]
    pub fn is_border_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        self.is_valid_coordinate(coord) && !self.is_interior_coordinate(coord)
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.columns.0 + coord.x as usize)
        } else {
            None
        }
    }

    /// The cell at a coordinate, None if the coordinate is outside the grid.
    pub fn get(&self, coord: Cartesian2DCoordinate) -> Option<Cell> {
        self.grid_coordinate_to_index(coord).map(|index| {
            if self.open_cells.contains(index) {
                Cell::Open
            } else {
                Cell::Wall
            }
        })
    }

    /// Out of grid coordinates are never open.
    #[inline]
    pub fn is_open(&self, coord: Cartesian2DCoordinate) -> bool {
        self.get(coord).map_or(false, Cell::is_open)
    }

    /// Out of grid coordinates count as wall.
    #[inline]
    pub fn is_wall(&self, coord: Cartesian2DCoordinate) -> bool {
        !self.is_open(coord)
    }

    /// Mark a cell `Open`. Returns false if the coordinate is outside the grid or the
    /// cell was already open.
    pub fn carve(&mut self, coord: Cartesian2DCoordinate) -> bool {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => self.open_cells.insert(index),
            None => false,
        }
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open_cells.len()
    }

    #[inline]
    pub fn wall_count(&self) -> usize {
        self.size() - self.open_count()
    }

    /// The adjacent cell in a direction, if it is on the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: MoveDirection)
                                  -> Option<Cartesian2DCoordinate> {
        let (dx, dy) = direction.grid_offset();
        coord.offset(dx, dy).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Is the adjacent cell in `direction` open?
    pub fn is_neighbour_open(&self, coord: Cartesian2DCoordinate, direction: MoveDirection) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour| self.is_open(neighbour))
    }

    /// All coordinates in row major order, row 0 first.
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.columns.0,
            cells_count: self.size(),
        }
    }

    /// Coordinates grouped by row, row 0 first.
    pub fn iter_row(&self) -> impl Iterator<Item = Vec<Cartesian2DCoordinate>> {
        let columns = self.columns.0 as u32;
        (0..self.rows.0 as u32)
            .map(move |y| (0..columns).map(|x| Cartesian2DCoordinate::new(x, y)).collect())
    }

    pub fn iter_wall_cells<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        self.iter().filter(move |coord| self.is_wall(*coord))
    }

    pub fn iter_open_cells<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        self.iter().filter(move |coord| self.is_open(*coord))
    }

    /// The odd-odd corridor positions, open or not.
    pub fn iter_corridor_cells<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        self.iter()
            .filter(move |coord| self.is_interior_coordinate(*coord) && coord.is_corridor_position())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: usize,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let x = self.current_cell_number % self.row_length;
            let y = self.current_cell_number / self.row_length;
            self.current_cell_number += 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()
