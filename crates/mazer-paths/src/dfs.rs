use mazer_core::{Maze, Pos};

use crate::SolveError;
use crate::solver::Solver;

/// Frontier probe order for DFS:
/// (row-1,col), (row,col-1), (row+1,col), (row,col+1).
const DFS_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

impl Solver {
    /// Solve the maze with an explicit-stack depth-first search.
    ///
    /// Returns the full path from start to end (both inclusive), or
    /// [`SolveError::Unsolvable`] if the end cell is unreachable. The path
    /// carries no shortest-length guarantee.
    ///
    /// Assumes a freshly reset maze (no explored flags or parent links set).
    pub fn solve_dfs(&mut self, maze: &mut Maze) -> Result<Vec<Pos>, SolveError> {
        let end = maze.end();
        let mut current = maze.start();
        if current == end {
            return Ok(vec![current]);
        }

        self.stack.clear();
        if let Some(cell) = maze.cell_mut(current) {
            cell.set_explored(true);
        }

        while current != end {
            for (drow, dcol) in DFS_OFFSETS {
                if let Some(found) = Self::discover(maze, current.shift(drow, dcol), current) {
                    self.stack.push(found);
                }
            }
            current = self.stack.pop().ok_or(SolveError::Unsolvable)?;
        }

        log::debug!("dfs reached {end} from {}", maze.start());
        self.solution(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_connects(path: &[Pos], maze: &Maze) {
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
        for pair in path.windows(2) {
            assert!(
                pair[0].adjacent(pair[1]),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
        for &p in path {
            assert!(maze.is_valid(p));
        }
    }

    #[test]
    fn open_grid_probe_order() {
        let mut maze = Maze::parse("S..\n...\n..E").unwrap();
        let path = Solver::new().solve_dfs(&mut maze).unwrap();
        // The fixed probe order makes this fully deterministic.
        assert_eq!(
            path,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn winding_maze() {
        let mut maze = Maze::parse(
            "\
S#...
.#.#.
.#.#.
...#E",
        )
        .unwrap();
        let path = Solver::new().solve_dfs(&mut maze).unwrap();
        assert_connects(&path, &maze);
    }

    #[test]
    fn start_equals_end_skips_traversal() {
        let p = Pos::new(1, 1);
        let mut maze = Maze::open(3, 3, p, p);
        let path = Solver::new().solve_dfs(&mut maze).unwrap();
        assert_eq!(path, vec![p]);
        // No traversal happened: nothing got marked explored.
        assert!(maze.iter().all(|c| !c.explored()));
    }

    #[test]
    fn walled_off_end_is_unsolvable() {
        let mut maze = Maze::parse("S#.\n.#.\n.#E").unwrap();
        let err = Solver::new().solve_dfs(&mut maze).unwrap_err();
        assert_eq!(err, SolveError::Unsolvable);
    }

    #[test]
    fn reset_and_rerun_is_idempotent() {
        let mut maze = Maze::parse("S..\n.#.\n..E").unwrap();
        let mut solver = Solver::new();
        let first = solver.solve_dfs(&mut maze).unwrap();
        maze.reset();
        let second = solver.solve_dfs(&mut maze).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn solution_reproduces_returned_path() {
        let mut maze = Maze::parse("S..\n.#.\n..E").unwrap();
        let mut solver = Solver::new();
        let path = solver.solve_dfs(&mut maze).unwrap();
        assert_eq!(solver.solution(&maze).unwrap(), path);
    }
}
