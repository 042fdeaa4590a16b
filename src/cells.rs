use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The state of one grid cell.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    #[inline]
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// Grid coordinate, `x` is the column and `y` is the row.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Offset by `(dx, dy)`. None if either component would go negative.
    pub fn offset(self, dx: i64, dy: i64) -> Option<Cartesian2DCoordinate> {
        let x = i64::from(self.x) + dx;
        let y = i64::from(self.y) + dy;
        if x < 0 || y < 0 || x > i64::from(u32::MAX) || y > i64::from(u32::MAX) {
            None
        } else {
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        }
    }

    /// Is this a corridor cell position (odd column, odd row)?
    #[inline]
    pub fn is_corridor_position(self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }
}

/// Marker movement directions in world space, `Up` is `+y`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] =
        [MoveDirection::Up, MoveDirection::Down, MoveDirection::Left, MoveDirection::Right];

    /// Unit step along the world axes.
    pub fn unit_offset(self) -> (f64, f64) {
        match self {
            MoveDirection::Up => (0.0, 1.0),
            MoveDirection::Down => (0.0, -1.0),
            MoveDirection::Left => (-1.0, 0.0),
            MoveDirection::Right => (1.0, 0.0),
        }
    }

    /// Step in grid index space. Rows grow with world `y`.
    pub fn grid_offset(self) -> (i64, i64) {
        match self {
            MoveDirection::Up => (0, 1),
            MoveDirection::Down => (0, -1),
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
        };
        write!(f, "{}", name)
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognised direction '{}'", self.0)
    }
}

impl Error for ParseDirectionError {}

impl FromStr for MoveDirection {
    type Err = ParseDirectionError;

    /// Accepts direction names plus the wasd and vi movement keys.
    fn from_str(s: &str) -> Result<MoveDirection, ParseDirectionError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "k" => Ok(MoveDirection::Up),
            "down" | "s" | "j" => Ok(MoveDirection::Down),
            "left" | "a" | "h" => Ok(MoveDirection::Left),
            "right" | "d" | "l" => Ok(MoveDirection::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_offsets() {
        let c = Cartesian2DCoordinate::new(1, 1);
        assert_eq!(c.offset(2, 0), Some(Cartesian2DCoordinate::new(3, 1)));
        assert_eq!(c.offset(0, -1), Some(Cartesian2DCoordinate::new(1, 0)));
        assert_eq!(c.offset(-2, 0), None);
        assert_eq!(c.offset(0, -2), None);
    }

    #[test]
    fn cell_states() {
        assert!(Cell::Open.is_open());
        assert!(!Cell::Wall.is_open());
    }

    #[test]
    fn corridor_positions() {
        assert!(Cartesian2DCoordinate::new(1, 1).is_corridor_position());
        assert!(Cartesian2DCoordinate::new(3, 5).is_corridor_position());
        assert!(!Cartesian2DCoordinate::new(2, 1).is_corridor_position());
        assert!(!Cartesian2DCoordinate::new(0, 0).is_corridor_position());
    }

    #[test]
    fn parse_directions() {
        assert_eq!("up".parse(), Ok(MoveDirection::Up));
        assert_eq!(" Down\n".parse(), Ok(MoveDirection::Down));
        assert_eq!("a".parse(), Ok(MoveDirection::Left));
        assert_eq!("h".parse(), Ok(MoveDirection::Left));
        assert_eq!("d".parse(), Ok(MoveDirection::Right));
        assert_eq!("j".parse(), Ok(MoveDirection::Down));
        assert_eq!("right".parse(), Ok(MoveDirection::Right));
        assert_eq!("k".parse(), Ok(MoveDirection::Up));
        assert_eq!("x".parse::<MoveDirection>(),
                   Err(ParseDirectionError("x".to_string())));
    }

    #[test]
    fn direction_names_round_trip_through_display() {
        for dir in MoveDirection::ALL.iter() {
            assert_eq!(dir.to_string().parse::<MoveDirection>(), Ok(*dir));
        }
    }
}
