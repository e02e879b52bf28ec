//! Cell records for the maze arena.

use crate::geom::Pos;

/// One grid cell: a position plus wall, explored and parent state.
///
/// The parent is a plain position back-reference into the owning [`Maze`]
/// arena, set once on first discovery during a search and consulted only
/// for path reconstruction.
///
/// [`Maze`]: crate::Maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    wall: bool,
    explored: bool,
    parent: Option<Pos>,
}

impl Cell {
    pub(crate) const fn new(pos: Pos, wall: bool) -> Self {
        Self {
            pos,
            wall,
            explored: false,
            parent: None,
        }
    }

    /// The cell's position in the grid.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Row index.
    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    /// Column index.
    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// Whether the cell is impassable.
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.wall
    }

    /// Whether the current search has discovered this cell.
    #[inline]
    pub fn explored(&self) -> bool {
        self.explored
    }

    /// Mark or clear the explored flag.
    #[inline]
    pub fn set_explored(&mut self, explored: bool) {
        self.explored = explored;
    }

    /// The cell this one was first discovered from, if any.
    #[inline]
    pub fn parent(&self) -> Option<Pos> {
        self.parent
    }

    /// Record the cell this one was discovered from.
    #[inline]
    pub fn set_parent(&mut self, parent: Option<Pos>) {
        self.parent = parent;
    }

    /// Clear search-scoped state (explored flag and parent link).
    pub(crate) fn clear_search_state(&mut self) {
        self.explored = false;
        self.parent = None;
    }
}
