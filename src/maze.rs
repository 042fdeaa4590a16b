use std::error::Error;
use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::cells::{Cartesian2DCoordinate, Cell, MoveDirection};
use crate::config::MazeConfig;
use crate::generators;
use crate::geometry::{Geometry, WallRect, WorldPoint};
use crate::grid::Grid;
use crate::units::{ColumnsCount, GridHeight, GridWidth, Height, RowsCount, Width};

/// Default side length of one grid cell in world units.
pub const CELL_SIZE: f64 = 20.0;

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    /// A maze needs at least one corridor cell in each direction.
    DimensionTooSmall { width: Width, height: Height },
    /// Cell sizes must be finite and positive.
    InvalidCellSize(f64),
    /// A corridor grid needs an odd number of rows and columns.
    EvenDimensions { rows: RowsCount, columns: ColumnsCount },
    /// The outer ring of a grid must be wall.
    OpenBorder(Cartesian2DCoordinate),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MazeError::DimensionTooSmall { width, height } => {
                write!(f, "maze needs at least 1x1 corridor cells, got {}x{}", width.0, height.0)
            }
            MazeError::InvalidCellSize(size) => write!(f, "invalid cell size {}", size),
            MazeError::EvenDimensions { rows, columns } => {
                write!(f, "grid dimensions must be odd, got {} rows by {} columns", rows.0, columns.0)
            }
            MazeError::OpenBorder(coord) => {
                write!(f, "border cell ({}, {}) is open", coord.x, coord.y)
            }
        }
    }
}

impl Error for MazeError {}

pub(crate) fn validate_cell_size(cell_size: f64) -> Result<f64, MazeError> {
    if cell_size.is_finite() && cell_size > 0.0 {
        Ok(cell_size)
    } else {
        Err(MazeError::InvalidCellSize(cell_size))
    }
}

/// A generated maze positioned in world space.
///
/// The grid never changes after construction. Callers own the marker position and ask the
/// maze whether a move is allowed.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    geometry: Geometry,
}

impl Maze {
    /// Generate a maze filling an overall `grid_width` by `grid_height` cells, walls included.
    ///
    /// Odd dimensions are recommended: the corridor counts are `(dimension - 1) / 2`, so an
    /// even dimension loses its last row or column.
    pub fn new(grid_width: GridWidth, grid_height: GridHeight, cell_size: f64) -> Result<Maze, MazeError> {
        Maze::with_rng(grid_width, grid_height, cell_size, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(grid_width: GridWidth,
                                     grid_height: GridHeight,
                                     cell_size: f64,
                                     rng: &mut R)
                                     -> Result<Maze, MazeError> {
        let cell_size = validate_cell_size(cell_size)?;
        let grid = generators::recursive_backtracker(Width::from(grid_width),
                                                     Height::from(grid_height),
                                                     rng)?;
        debug!("Grid size (all cells): {}x{}", grid_width.0, grid_height.0);
        Maze::from_grid(grid, cell_size)
    }

    pub fn from_config(config: &MazeConfig) -> Result<Maze, MazeError> {
        config.validate()?;
        let grid = match config.seed {
            Some(seed) => generators::generate_seeded(config.width(), config.height(), seed)?,
            None => generators::generate(config.width(), config.height())?,
        };
        Maze::from_grid(grid, config.cell_size)
    }

    /// Position an existing grid, centred on the world origin.
    ///
    /// The grid must have odd dimensions, at least one corridor cell each way and an all wall
    /// outer ring, as every generated grid does.
    pub fn from_grid(grid: Grid, cell_size: f64) -> Result<Maze, MazeError> {
        let cell_size = validate_cell_size(cell_size)?;
        let (rows, columns) = (grid.rows(), grid.columns());
        if rows.0 % 2 == 0 || columns.0 % 2 == 0 {
            return Err(MazeError::EvenDimensions { rows, columns });
        }
        let (width, height) = (grid.width(), grid.height());
        if width.0 == 0 || height.0 == 0 {
            return Err(MazeError::DimensionTooSmall { width, height });
        }
        if let Some(coord) = grid.iter_open_cells().find(|coord| grid.is_border_coordinate(*coord)) {
            return Err(MazeError::OpenBorder(coord));
        }
        let geometry = Geometry::centred(grid.rows(), grid.columns(), cell_size);

        let maze = Maze { grid, geometry };
        debug!("Corridor cells: {}x{}", maze.width().0, maze.height().0);
        debug!("Cell size: {}", maze.cell_size());
        debug!("Rows: {}, Cols: {}", maze.rows(), maze.cols());
        debug!("Origin: ({}, {})", maze.origin_x(), maze.origin_y());
        trace!("Maze:\n{}", maze.grid);
        Ok(maze)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.geometry.cell_size()
    }

    #[inline]
    pub fn origin_x(&self) -> f64 {
        self.geometry.origin().x
    }

    #[inline]
    pub fn origin_y(&self) -> f64 {
        self.geometry.origin().y
    }

    /// Overall row count, walls included.
    #[inline]
    pub fn rows(&self) -> usize {
        let RowsCount(rows) = self.grid.rows();
        rows
    }

    /// Overall column count, walls included.
    #[inline]
    pub fn cols(&self) -> usize {
        let ColumnsCount(columns) = self.grid.columns();
        columns
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.grid.height()
    }

    /// Is the world point inside an open cell? Points off the grid are not open.
    pub fn is_open(&self, x: f64, y: f64) -> bool {
        self.geometry
            .world_to_grid(WorldPoint::new(x, y))
            .map_or(false, |coord| self.grid.is_open(coord))
    }

    /// Step one cell in `direction` if the destination is open, otherwise stay put.
    pub fn attempt_move(&self, current: WorldPoint, direction: MoveDirection) -> WorldPoint {
        let candidate = current.step(direction, self.cell_size());
        trace!("Current position: ({}, {}), New position: ({}, {})",
               current.x, current.y, candidate.x, candidate.y);

        if self.is_open(candidate.x, candidate.y) {
            candidate
        } else {
            current
        }
    }

    /// Grid cell the marker starts in.
    pub fn start_cell(&self) -> Cartesian2DCoordinate {
        generators::START_CELL
    }

    /// Innermost open cell nearest the far corner.
    pub fn goal_cell(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new((self.cols() - 2) as u32, (self.rows() - 2) as u32)
    }

    pub fn start_position(&self) -> WorldPoint {
        self.geometry.cell_centre(self.start_cell())
    }

    pub fn goal_position(&self) -> WorldPoint {
        self.geometry.cell_centre(self.goal_cell())
    }

    /// The grid cell at a world point.
    pub fn cell_at(&self, point: WorldPoint) -> Option<Cell> {
        self.geometry.world_to_grid(point).and_then(|coord| self.grid.get(coord))
    }

    /// One square per wall cell, in row major order.
    pub fn wall_rectangles(&self) -> Vec<WallRect> {
        self.grid
            .iter_wall_cells()
            .map(|coord| self.geometry.cell_rect(coord))
            .collect()
    }
}
