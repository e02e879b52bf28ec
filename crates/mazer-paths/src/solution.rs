use mazer_core::{Maze, Pos};

use crate::SolveError;
use crate::solver::Solver;

impl Solver {
    /// Reconstruct the path recorded on `maze` by the last search.
    ///
    /// Walks parent links backward from the end cell, collecting positions,
    /// then reverses so the order runs start to end (both inclusive). Valid
    /// only after a successful search on this maze; a missing parent link
    /// yields [`SolveError::NoPathRecorded`].
    pub fn solution(&self, maze: &Maze) -> Result<Vec<Pos>, SolveError> {
        let start = maze.start();
        let end = maze.end();
        if start == end {
            return Ok(vec![start]);
        }

        let mut path = Vec::new();
        let mut at = end;
        while at != start {
            path.push(at);
            at = maze
                .cell(at)
                .and_then(|c| c.parent())
                .ok_or(SolveError::NoPathRecorded)?;
        }
        path.push(start);
        path.reverse();
        Ok(path)
    }
}
