//! Marker movement and the one-time win notification.

use log::info;

use crate::cells::MoveDirection;
use crate::geometry::WorldPoint;
use crate::maze::Maze;

/// Latches the first time the marker comes within half a cell of the goal on both axes.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WinLatch {
    goal: WorldPoint,
    tolerance: f64,
    fired: bool,
}

impl WinLatch {
    pub fn new(goal: WorldPoint, cell_size: f64) -> WinLatch {
        WinLatch {
            goal,
            tolerance: cell_size / 2.0,
            fired: false,
        }
    }

    #[inline]
    pub fn goal(&self) -> WorldPoint {
        self.goal
    }

    pub fn is_at_goal(&self, point: WorldPoint) -> bool {
        (point.x - self.goal.x).abs() < self.tolerance &&
        (point.y - self.goal.y).abs() < self.tolerance
    }

    /// True exactly once, the first time `point` is at the goal.
    pub fn check(&mut self, point: WorldPoint) -> bool {
        if !self.fired && self.is_at_goal(point) {
            self.fired = true;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    /// The marker stepped to a new open cell.
    Moved(WorldPoint),
    /// A wall was in the way, the marker did not move.
    Blocked(WorldPoint),
    /// The goal was reached for the first time this session.
    Solved(WorldPoint),
}

impl MoveOutcome {
    pub fn position(&self) -> WorldPoint {
        match *self {
            MoveOutcome::Moved(p) | MoveOutcome::Blocked(p) | MoveOutcome::Solved(p) => p,
        }
    }
}

/// One play through of a maze: owns the marker position and the win latch.
#[derive(Debug)]
pub struct Session {
    maze: Maze,
    marker: WorldPoint,
    latch: WinLatch,
    moves: usize,
    blocked: usize,
}

impl Session {
    /// Marker starts at the centre of the start cell.
    pub fn new(maze: Maze) -> Session {
        let latch = WinLatch::new(maze.goal_position(), maze.cell_size());
        let marker = maze.start_position();
        Session {
            maze,
            marker,
            latch,
            moves: 0,
            blocked: 0,
        }
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn marker(&self) -> WorldPoint {
        self.marker
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.latch.has_fired()
    }

    /// Accepted moves so far.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Moves rejected by a wall so far.
    #[inline]
    pub fn blocked_moves(&self) -> usize {
        self.blocked
    }

    /// Try to move the marker one cell. The goal is checked after every attempt, blocked
    /// or not.
    pub fn step(&mut self, direction: MoveDirection) -> MoveOutcome {
        let next = self.maze.attempt_move(self.marker, direction);
        let moved = next != self.marker;
        self.marker = next;
        if moved {
            self.moves += 1;
        } else {
            self.blocked += 1;
        }

        if self.latch.check(next) {
            let goal = self.latch.goal();
            info!("Maze solved at ({}, {}) in {} moves ({} blocked)",
                  goal.x, goal.y, self.moves, self.blocked);
            MoveOutcome::Solved(next)
        } else if moved {
            MoveOutcome::Moved(next)
        } else {
            MoveOutcome::Blocked(next)
        }
    }
}
