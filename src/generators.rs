use log::debug;
use rand::{self, seq::SliceRandom, Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::grid::Grid;
use crate::maze::MazeError;
use crate::units::{Height, Width};

/// Two cell jumps to the next corridor cell, skipping over the wall between.
const CORRIDOR_OFFSETS: [(i64, i64); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Where carving always begins.
pub const START_CELL: Cartesian2DCoordinate = Cartesian2DCoordinate { x: 1, y: 1 };

type OffsetSmallVec = SmallVec<[(i64, i64); 4]>;

/// Generate a maze with `width * height` corridor cells using the thread local rng.
pub fn generate(width: Width, height: Height) -> Result<Grid, MazeError> {
    recursive_backtracker(width, height, &mut rand::thread_rng())
}

/// Generate a reproducible maze, the same seed always carves the same passages.
pub fn generate_seeded(width: Width, height: Height, seed: u64) -> Result<Grid, MazeError> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    recursive_backtracker(width, height, &mut rng)
}

/// Apply the recursive backtracker maze generation algorithm to a fresh all wall grid of
/// `(2 * height + 1)` rows by `(2 * width + 1)` columns.
///
/// Corridor cells sit at odd-odd coordinates with a wall cell between each pair. Starting at
/// `(1, 1)` we open the current cell, then look two cells away in each of the four directions
/// in a random order. Any such cell that is still wall and inside the border has never been
/// visited, so the wall between is knocked through and we carry on from there. When every
/// direction is exhausted we back up to the previous cell.
///
/// A cell is only ever entered once from an already visited cell, so the passages form a
/// spanning tree over the corridor cells: a perfect maze with exactly one route between any
/// two points.
///
/// The backtracking uses an explicit stack rather than recursion so large grids cannot
/// overflow the call stack. Each frame remembers its shuffled directions and how far through
/// them it has got, which gives exactly the visiting order of the recursive formulation.
pub fn recursive_backtracker<R: Rng + ?Sized>(width: Width,
                                               height: Height,
                                               rng: &mut R)
                                               -> Result<Grid, MazeError> {
    if width.0 == 0 || height.0 == 0 {
        return Err(MazeError::DimensionTooSmall { width, height });
    }

    let mut grid = Grid::for_corridors(width, height);

    let mut stack = vec![CarveFrame::enter(&mut grid, START_CELL, rng)];

    while let Some(frame) = stack.last_mut() {
        match frame.next_offset() {
            Some((dx, dy)) => {
                let current = frame.coord;
                let next = current.offset(dx, dy)
                    .filter(|coord| grid.is_interior_coordinate(*coord) && grid.is_wall(*coord));

                if let Some(next_coord) = next {
                    // Knock through the wall midway between the two corridor cells.
                    if let Some(between) = current.offset(dx / 2, dy / 2) {
                        grid.carve(between);
                    }
                    stack.push(CarveFrame::enter(&mut grid, next_coord, rng));
                }
            }
            None => {
                let _ = stack.pop();
            }
        }
    }

    debug!("Carved {}x{} corridor maze, {} open of {} cells",
           width.0, height.0, grid.open_count(), grid.size());

    Ok(grid)
}

/// One step of the backtracking walk.
#[derive(Debug)]
struct CarveFrame {
    coord: Cartesian2DCoordinate,
    offsets: OffsetSmallVec,
    next: usize,
}

impl CarveFrame {
    /// Open `coord` and decide the random order its neighbours will be tried in.
    fn enter<R: Rng + ?Sized>(grid: &mut Grid, coord: Cartesian2DCoordinate, rng: &mut R) -> CarveFrame {
        grid.carve(coord);
        let mut offsets: OffsetSmallVec = CORRIDOR_OFFSETS.iter().cloned().collect();
        offsets.shuffle(rng);
        CarveFrame { coord, offsets, next: 0 }
    }

    fn next_offset(&mut self) -> Option<(i64, i64)> {
        let offset = self.offsets.get(self.next).cloned();
        self.next += 1;
        offset
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};
    use std::collections::VecDeque;

    use super::*;
    use crate::cells::Cell;
    use crate::units::{ColumnsCount, RowsCount};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn reachable_from_start(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.size()];
        let mut frontier = VecDeque::new();
        frontier.push_back(START_CELL);
        seen[grid.grid_coordinate_to_index(START_CELL).unwrap()] = true;
        let mut count = 0;
        while let Some(coord) = frontier.pop_front() {
            count += 1;
            for dir in crate::cells::MoveDirection::ALL.iter() {
                if let Some(n) = grid.neighbour_at_direction(coord, *dir) {
                    let index = grid.grid_coordinate_to_index(n).unwrap();
                    if grid.is_open(n) && !seen[index] {
                        seen[index] = true;
                        frontier.push_back(n);
                    }
                }
            }
        }
        count
    }

    fn border_is_wall(grid: &Grid) -> bool {
        grid.iter()
            .filter(|coord| grid.is_border_coordinate(*coord))
            .all(|coord| grid.is_wall(coord))
    }

    #[test]
    fn three_by_three() {
        let g = generate(Width(3), Height(3)).unwrap();
        assert_eq!(g.rows(), RowsCount(7));
        assert_eq!(g.columns(), ColumnsCount(7));
        assert_eq!(g.get(gc(1, 1)), Some(Cell::Open));
        assert_eq!(g.get(gc(0, 0)), Some(Cell::Wall));
    }

    #[test]
    fn single_cell_maze() {
        let g = generate(Width(1), Height(1)).unwrap();
        assert_eq!(g.open_count(), 1);
        assert!(g.is_open(gc(1, 1)));
    }

    #[test]
    fn single_corridor_row() {
        let g = generate(Width(4), Height(1)).unwrap();
        // no choice in a 1 high maze, everything along row 1 is carved
        for x in 1..8 {
            assert!(g.is_open(gc(x, 1)));
        }
        assert_eq!(g.open_count(), 7);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(generate(Width(0), Height(3)).unwrap_err(),
                   MazeError::DimensionTooSmall { width: Width(0), height: Height(3) });
        assert!(generate(Width(3), Height(0)).is_err());
    }

    #[test]
    fn open_cell_count_is_a_spanning_tree() {
        let g = generate(Width(10), Height(7)).unwrap();
        let corridors = 10 * 7;
        assert_eq!(g.open_count(), corridors + (corridors - 1));
    }

    #[test]
    fn all_corridor_cells_reachable() {
        let g = generate(Width(12), Height(9)).unwrap();
        assert!(g.iter_corridor_cells().all(|coord| g.is_open(coord)));
        assert_eq!(reachable_from_start(&g), g.open_count());
    }

    #[test]
    fn even_coordinates_never_open() {
        let g = generate(Width(8), Height(8)).unwrap();
        assert!(g.iter()
            .filter(|coord| coord.x % 2 == 0 && coord.y % 2 == 0)
            .all(|coord| g.is_wall(coord)));
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_seeded(Width(15), Height(11), 42).unwrap();
        let b = generate_seeded(Width(15), Height(11), 42).unwrap();
        assert_eq!(a.iter_open_cells().collect::<Vec<_>>(),
                   b.iter_open_cells().collect::<Vec<_>>());
    }

    #[test]
    fn large_maze_does_not_overflow_the_stack() {
        let g = generate_seeded(Width(400), Height(400), 7).unwrap();
        assert_eq!(g.open_count(), 2 * 400 * 400 - 1);
    }

    #[test]
    fn quickcheck_perfect_maze_properties() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (usize::from(w % 24), usize::from(h % 24));
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let g = generate_seeded(Width(w), Height(h), seed).unwrap();
            let corridors = w * h;
            TestResult::from_bool(g.open_count() == 2 * corridors - 1 &&
                                  border_is_wall(&g) &&
                                  reachable_from_start(&g) == g.open_count())
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult)
    }
}
