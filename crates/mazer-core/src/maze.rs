//! The maze arena: a fixed-size row-major grid of [`Cell`] records.

use crate::cell::Cell;
use crate::geom::Pos;

/// A rectangular maze with designated start and end cells.
///
/// Cells live in a single row-major arena. Searches mutate their
/// explored/parent state in place through [`cell_mut`](Self::cell_mut); the
/// dimensions, walls and endpoints are fixed at construction. One search at
/// a time holds the arena via `&mut Maze`, and [`reset`](Self::reset) must
/// be called between searches.
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    start: Pos,
    end: Pos,
}

impl Maze {
    pub(crate) fn from_parts(
        cells: Vec<Cell>,
        width: i32,
        height: i32,
        start: Pos,
        end: Pos,
    ) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            cells,
            width,
            height,
            start,
            end,
        }
    }

    /// Create a maze with every cell open.
    ///
    /// Intended for programmatic construction; `start` and `end` must be in
    /// bounds and may coincide. For walls, parse a textual maze instead.
    pub fn open(width: i32, height: i32, start: Pos, end: Pos) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut cells = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(Pos::new(row, col), false));
            }
        }
        let maze = Self::from_parts(cells, width, height, start, end);
        debug_assert!(maze.in_bounds(start) && maze.in_bounds(end));
        maze
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The designated start cell position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The designated end cell position.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Whether `p` lies within the grid rectangle.
    #[inline]
    pub fn in_bounds(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_valid(&self, p: Pos) -> bool {
        self.idx(p).is_some_and(|i| !self.cells[i].is_wall())
    }

    /// Convert a position to a flat arena index. Returns `None` if out of
    /// bounds.
    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some((p.row * self.width + p.col) as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        let i = self.idx(p)?;
        Some(&self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    pub fn cell_mut(&mut self, p: Pos) -> Option<&mut Cell> {
        let i = self.idx(p)?;
        Some(&mut self.cells[i])
    }

    /// Clear all search-scoped state (explored flags and parent links),
    /// making the maze ready for a fresh search.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear_search_state();
        }
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S.#
.##
..E";

    #[test]
    fn bounds_and_endpoints() {
        let m = Maze::parse(MAZE).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 3);
        assert_eq!(m.start(), Pos::new(0, 0));
        assert_eq!(m.end(), Pos::new(2, 2));
        assert!(m.in_bounds(Pos::new(2, 2)));
        assert!(!m.in_bounds(Pos::new(3, 0)));
        assert!(!m.in_bounds(Pos::new(0, -1)));
    }

    #[test]
    fn validity_excludes_walls_and_out_of_bounds() {
        let m = Maze::parse(MAZE).unwrap();
        assert!(m.is_valid(Pos::new(1, 0)));
        assert!(!m.is_valid(Pos::new(1, 1))); // wall
        assert!(!m.is_valid(Pos::new(-1, 0))); // out of bounds
    }

    #[test]
    fn cell_lookup() {
        let m = Maze::parse(MAZE).unwrap();
        assert!(m.cell(Pos::new(0, 2)).unwrap().is_wall());
        assert!(!m.cell(Pos::new(2, 1)).unwrap().is_wall());
        assert!(m.cell(Pos::new(5, 5)).is_none());
    }

    #[test]
    fn reset_clears_search_state() {
        let mut m = Maze::parse(MAZE).unwrap();
        let p = Pos::new(1, 0);
        {
            let c = m.cell_mut(p).unwrap();
            c.set_explored(true);
            c.set_parent(Some(Pos::new(0, 0)));
        }
        m.reset();
        let c = m.cell(p).unwrap();
        assert!(!c.explored());
        assert_eq!(c.parent(), None);
    }

    #[test]
    fn iter_row_major() {
        let m = Maze::parse(MAZE).unwrap();
        let cells: Vec<_> = m.iter().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0].pos(), Pos::new(0, 0));
        assert_eq!(cells[3].pos(), Pos::new(1, 0));
        assert_eq!(cells[8].pos(), Pos::new(2, 2));
    }
}
