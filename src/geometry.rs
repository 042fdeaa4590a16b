//! Mapping between world coordinates and grid cells.
//!
//! World space has `+y` pointing up. The grid is laid out so that row 0 sits at the bottom,
//! column 0 on the left, and the whole grid is centred on the world origin.

use std::ops::Add;

use crate::cells::{Cartesian2DCoordinate, MoveDirection};
use crate::units::{ColumnsCount, RowsCount};

#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64) -> WorldPoint {
        WorldPoint { x, y }
    }

    /// Shift by `distance` along a direction.
    pub fn step(self, direction: MoveDirection, distance: f64) -> WorldPoint {
        let (ux, uy) = direction.unit_offset();
        self + WorldPoint::new(ux * distance, uy * distance)
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    fn add(self, other: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

/// An axis aligned square covering one wall cell. `x`, `y` is the lower left corner.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Fixed for the lifetime of a maze.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Geometry {
    origin: WorldPoint,
    cell_size: f64,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl Geometry {
    /// Centre a `rows` by `columns` grid of `cell_size` squares on the world origin.
    pub fn centred(rows: RowsCount, columns: ColumnsCount, cell_size: f64) -> Geometry {
        let origin = WorldPoint::new(-(columns.0 as f64 * cell_size) / 2.0,
                                     -(rows.0 as f64 * cell_size) / 2.0);
        Geometry { origin, cell_size, rows, columns }
    }

    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// The grid cell containing a world point, None if the point lies outside the grid.
    ///
    /// Cells are half open: a point exactly on the boundary between two cells belongs to the
    /// cell above or to the right of it.
    pub fn world_to_grid(&self, point: WorldPoint) -> Option<Cartesian2DCoordinate> {
        let col = ((point.x - self.origin.x) / self.cell_size).floor();
        let row = ((point.y - self.origin.y) / self.cell_size).floor();

        // NaN fails both comparisons.
        let in_columns = col >= 0.0 && col < self.columns.0 as f64;
        let in_rows = row >= 0.0 && row < self.rows.0 as f64;
        if in_columns && in_rows {
            Some(Cartesian2DCoordinate::new(col as u32, row as u32))
        } else {
            None
        }
    }

    /// Lower left world corner of a cell.
    pub fn cell_corner(&self, coord: Cartesian2DCoordinate) -> WorldPoint {
        WorldPoint::new(self.origin.x + f64::from(coord.x) * self.cell_size,
                        self.origin.y + f64::from(coord.y) * self.cell_size)
    }

    pub fn cell_centre(&self, coord: Cartesian2DCoordinate) -> WorldPoint {
        let half = self.cell_size / 2.0;
        self.cell_corner(coord) + WorldPoint::new(half, half)
    }

    pub fn cell_rect(&self, coord: Cartesian2DCoordinate) -> WallRect {
        let corner = self.cell_corner(coord);
        WallRect { x: corner.x, y: corner.y, size: self.cell_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn seven_by_seven() -> Geometry {
        Geometry::centred(RowsCount(7), ColumnsCount(7), 20.0)
    }

    #[test]
    fn origin_centres_the_grid() {
        let g = seven_by_seven();
        assert_eq!(g.origin(), WorldPoint::new(-70.0, -70.0));

        let wide = Geometry::centred(RowsCount(3), ColumnsCount(21), 10.0);
        assert_eq!(wide.origin(), WorldPoint::new(-105.0, -15.0));
    }

    #[test]
    fn world_to_grid_floors() {
        let g = seven_by_seven();
        assert_eq!(g.world_to_grid(WorldPoint::new(-70.0, -70.0)), Some(gc(0, 0)));
        assert_eq!(g.world_to_grid(WorldPoint::new(-50.1, -50.1)), Some(gc(0, 0)));
        assert_eq!(g.world_to_grid(WorldPoint::new(-50.0, -50.0)), Some(gc(1, 1)));
        assert_eq!(g.world_to_grid(WorldPoint::new(0.0, 0.0)), Some(gc(3, 3)));
        assert_eq!(g.world_to_grid(WorldPoint::new(69.9, -69.9)), Some(gc(6, 0)));
    }

    #[test]
    fn world_to_grid_outside() {
        let g = seven_by_seven();
        assert_eq!(g.world_to_grid(WorldPoint::new(-70.1, 0.0)), None);
        assert_eq!(g.world_to_grid(WorldPoint::new(0.0, -70.1)), None);
        assert_eq!(g.world_to_grid(WorldPoint::new(70.0, 0.0)), None);
        assert_eq!(g.world_to_grid(WorldPoint::new(0.0, 70.0)), None);
        assert_eq!(g.world_to_grid(WorldPoint::new(f64::NAN, 0.0)), None);
        assert_eq!(g.world_to_grid(WorldPoint::new(0.0, f64::INFINITY)), None);
    }

    #[test]
    fn cell_positions() {
        let g = seven_by_seven();
        assert_eq!(g.cell_corner(gc(1, 1)), WorldPoint::new(-50.0, -50.0));
        assert_eq!(g.cell_centre(gc(1, 1)), WorldPoint::new(-40.0, -40.0));
        assert_eq!(g.cell_rect(gc(6, 0)), WallRect { x: 50.0, y: -70.0, size: 20.0 });
        assert_eq!(g.world_to_grid(g.cell_centre(gc(5, 2))), Some(gc(5, 2)));
    }

    #[test]
    fn stepping() {
        let p = WorldPoint::new(1.0, 2.0);
        assert_eq!(p.step(MoveDirection::Up, 20.0), WorldPoint::new(1.0, 22.0));
        assert_eq!(p.step(MoveDirection::Down, 20.0), WorldPoint::new(1.0, -18.0));
        assert_eq!(p.step(MoveDirection::Left, 20.0), WorldPoint::new(-19.0, 2.0));
        assert_eq!(p.step(MoveDirection::Right, 20.0), WorldPoint::new(21.0, 2.0));
    }
}
