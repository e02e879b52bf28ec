//! Text rendering of mazes and their solutions.

use std::collections::HashSet;

use crate::geom::Pos;
use crate::maze::Maze;

impl Maze {
    /// Render the maze as text, overdrawing the cells of `path` with `*`.
    ///
    /// The start and end cells keep their `S`/`E` glyphs. Passing an empty
    /// path renders the maze as parsed.
    pub fn render(&self, path: &[Pos]) -> String {
        let on_path: HashSet<Pos> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for row in 0..self.height() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.width() {
                let p = Pos::new(row, col);
                let ch = if p == self.start() {
                    'S'
                } else if p == self.end() {
                    'E'
                } else if self.cell(p).is_some_and(|c| c.is_wall()) {
                    '#'
                } else if on_path.contains(&p) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
            }
        }
        out
    }
}
