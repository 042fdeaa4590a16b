//! **mazewalk** generates perfect mazes, positions them in world space and validates marker
//! moves through their corridors.

pub mod cells;
pub mod config;
pub mod game;
pub mod generators;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod renderers;
pub mod units;
mod utils;

pub use crate::cells::{Cell, MoveDirection};
pub use crate::config::MazeConfig;
pub use crate::game::{MoveOutcome, Session};
pub use crate::geometry::WorldPoint;
pub use crate::maze::{Maze, MazeError};
