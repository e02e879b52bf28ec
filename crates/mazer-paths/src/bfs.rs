use mazer_core::{Maze, Pos};

use crate::SolveError;
use crate::solver::Solver;

/// Frontier probe order for BFS:
/// (row+1,col), (row,col+1), (row-1,col), (row,col-1).
const BFS_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl Solver {
    /// Solve the maze with a queue-based breadth-first search.
    ///
    /// Returns the full path from start to end (both inclusive), or
    /// [`SolveError::Unsolvable`] if the end cell is unreachable. Because
    /// whole frontier rings are enqueued before any ring member is dequeued
    /// and each cell is visited at most once, the returned path has minimal
    /// length among all wall-avoiding start-to-end paths.
    ///
    /// Assumes a freshly reset maze (no explored flags or parent links set).
    pub fn solve_bfs(&mut self, maze: &mut Maze) -> Result<Vec<Pos>, SolveError> {
        let end = maze.end();
        let mut current = maze.start();
        if current == end {
            return Ok(vec![current]);
        }

        self.queue.clear();
        if let Some(cell) = maze.cell_mut(current) {
            cell.set_explored(true);
        }

        while current != end {
            for (drow, dcol) in BFS_OFFSETS {
                if let Some(found) = Self::discover(maze, current.shift(drow, dcol), current) {
                    self.queue.push_back(found);
                }
            }
            current = self.queue.pop_front().ok_or(SolveError::Unsolvable)?;
        }

        log::debug!("bfs reached {end} from {}", maze.start());
        self.solution(maze)
    }
}
