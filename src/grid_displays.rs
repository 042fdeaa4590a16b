use std::fmt;

use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::game::Session;
use crate::grid::Grid;
use crate::units::RowsCount;
use crate::utils::{self, FnvHashMap};

const WALL: &str = "██";
const OPEN: &str = "  ";

/// Decides what is drawn inside open cells when rendering a grid as text.
pub trait GridDisplay {
    /// Two characters for the open cell at `coord`, or None for an empty floor.
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> Option<String>;
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// Shows start points as `S`, end points as `E` and the player marker as `@`.
/// The marker wins when it shares a cell with a start or end point.
#[derive(Debug, Default)]
pub struct MarkerDisplay {
    bodies: FnvHashMap<Cartesian2DCoordinate, &'static str>,
}

impl MarkerDisplay {
    pub fn new(starts: &[Cartesian2DCoordinate],
               ends: &[Cartesian2DCoordinate],
               marker: Option<Cartesian2DCoordinate>)
               -> MarkerDisplay {
        let mut bodies = utils::fnv_hashmap(starts.len() + ends.len() + 1);
        for start in starts {
            bodies.insert(*start, "S ");
        }
        for end in ends {
            bodies.insert(*end, "E ");
        }
        if let Some(marker_coord) = marker {
            bodies.insert(marker_coord, "@ ");
        }
        MarkerDisplay { bodies }
    }

    /// Start, goal and the current marker cell of a session.
    pub fn for_session(session: &Session) -> MarkerDisplay {
        let maze = session.maze();
        let marker = maze.geometry().world_to_grid(session.marker());
        let starts: CoordinateSmallVec = [maze.start_cell()].iter().cloned().collect();
        let ends: CoordinateSmallVec = [maze.goal_cell()].iter().cloned().collect();
        MarkerDisplay::new(&starts, &ends, marker)
    }
}

impl GridDisplay for MarkerDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> Option<String> {
        self.bodies.get(&coord).map(|body| String::from(*body))
    }
}

/// A grid paired with a cell body display.
pub struct GridWithDisplay<'a> {
    grid: &'a Grid,
    display: Option<&'a dyn GridDisplay>,
}

impl Grid {
    pub fn display_with<'a>(&'a self, display: &'a dyn GridDisplay) -> GridWithDisplay<'a> {
        GridWithDisplay { grid: self, display: Some(display) }
    }
}

impl<'a> fmt::Display for GridWithDisplay<'a> {
    /// The highest row is printed first so that world up is up on the screen.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let RowsCount(rows_count) = self.grid.rows();
        let mut output = String::with_capacity(self.grid.size() * WALL.len() + rows_count);

        for row in self.grid.iter_row().collect::<Vec<_>>().into_iter().rev() {
            for coord in row {
                if self.grid.is_wall(coord) {
                    output.push_str(WALL);
                } else {
                    let body = self.display.and_then(|display| display.render_cell_body(coord));
                    match body {
                        Some(text) => output.push_str(&text),
                        None => output.push_str(OPEN),
                    }
                }
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let plain = GridWithDisplay { grid: self, display: None };
        write!(f, "{}", plain)
    }
}
