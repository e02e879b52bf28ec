use std::collections::VecDeque;
use std::fmt;

use mazer_core::{Maze, Pos};

/// Maze search engine.
///
/// Owns the frontier storage for both search flavours so that repeated
/// solves reuse allocations. The engine keeps no reference to any maze:
/// each solve call receives an explicit `&mut Maze` handle for the duration
/// of that call.
#[derive(Debug, Default)]
pub struct Solver {
    pub(crate) stack: Vec<Pos>,
    pub(crate) queue: VecDeque<Pos>,
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe a candidate neighbor. On first discovery, mark it explored,
    /// record `from` as its parent and return it for frontier insertion.
    ///
    /// Walls, out-of-bounds positions and already-explored cells yield
    /// `None`; parents are therefore set exactly once per search.
    pub(crate) fn discover(maze: &mut Maze, at: Pos, from: Pos) -> Option<Pos> {
        if !maze.is_valid(at) {
            return None;
        }
        let cell = maze.cell_mut(at)?;
        if cell.explored() {
            return None;
        }
        cell.set_explored(true);
        cell.set_parent(Some(from));
        Some(at)
    }
}

/// Errors from maze searches and path reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The frontier emptied before the end cell was reached: no route
    /// exists from start to end.
    Unsolvable,
    /// Path reconstruction hit a cell with no recorded parent; no search
    /// has connected end back to start on this maze.
    NoPathRecorded,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsolvable => write!(f, "unsolvable maze: no route from start to end"),
            Self::NoPathRecorded => {
                write!(f, "no path recorded: run a search before reconstructing")
            }
        }
    }
}

impl std::error::Error for SolveError {}
