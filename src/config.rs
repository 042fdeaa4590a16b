use crate::maze::{self, MazeError, CELL_SIZE};
use crate::units::{GridHeight, GridWidth, Height, Width};

/// Settings for building a maze.
#[derive(PartialEq, Clone, Debug)]
pub struct MazeConfig {
    /// Overall columns, walls included. Odd values recommended.
    pub grid_width: usize,
    /// Overall rows, walls included. Odd values recommended.
    pub grid_height: usize,
    pub cell_size: f64,
    /// Fixed seed for a reproducible maze, a fresh random maze each time if None.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            grid_width: 21,
            grid_height: 21,
            cell_size: CELL_SIZE,
            seed: None,
        }
    }
}

impl MazeConfig {
    #[inline]
    pub fn width(&self) -> Width {
        Width::from(GridWidth(self.grid_width))
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height::from(GridHeight(self.grid_height))
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        maze::validate_cell_size(self.cell_size)?;
        let (width, height) = (self.width(), self.height());
        if width.0 == 0 || height.0 == 0 {
            return Err(MazeError::DimensionTooSmall { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn defaults() {
        let config = MazeConfig::default();
        assert_eq!(config.width(), Width(10));
        assert_eq!(config.height(), Height(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation() {
        let narrow = MazeConfig { grid_width: 1, ..MazeConfig::default() };
        assert_eq!(narrow.validate(),
                   Err(MazeError::DimensionTooSmall { width: Width(0), height: Height(10) }));

        let flat = MazeConfig { cell_size: 0.0, ..MazeConfig::default() };
        assert_eq!(flat.validate(), Err(MazeError::InvalidCellSize(0.0)));
    }

    #[test]
    fn seeded_config_builds_the_same_maze() {
        let config = MazeConfig { seed: Some(99), grid_width: 31, grid_height: 17, ..MazeConfig::default() };
        let a = Maze::from_config(&config).unwrap();
        let b = Maze::from_config(&config).unwrap();
        assert_eq!(a.rows(), 17);
        assert_eq!(a.cols(), 31);
        assert_eq!(a.wall_rectangles(), b.wall_rectangles());
    }
}
