//! Maze construction from text.
//!
//! A maze is described by equal-width lines of `#` (wall), `.` (open),
//! `S` (start, open) and `E` (end, open), with exactly one `S` and one `E`.

use std::fmt;

use crate::cell::Cell;
use crate::geom::Pos;
use crate::maze::Maze;

impl Maze {
    /// Parse a maze from its textual form.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines.
    pub fn parse(s: &str) -> Result<Maze, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut height: i32 = 0;
        let mut start: Option<Pos> = None;
        let mut end: Option<Pos> = None;

        for (row, line) in s.lines().enumerate() {
            let row = row as i32;
            let mut w: i32 = 0;
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row, col as i32);
                let wall = match ch {
                    '#' => true,
                    '.' => false,
                    'S' => {
                        if let Some(pos) = start.replace(pos) {
                            return Err(ParseError::DuplicateStart { pos });
                        }
                        false
                    }
                    'E' => {
                        if let Some(pos) = end.replace(pos) {
                            return Err(ParseError::DuplicateEnd { pos });
                        }
                        false
                    }
                    _ => return Err(ParseError::InvalidRune { ch, pos }),
                };
                cells.push(Cell::new(pos, wall));
                w += 1;
            }
            if width < 0 {
                width = w;
            } else if w != width {
                return Err(ParseError::RaggedLine { line: row as usize });
            }
            height += 1;
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        let end = end.ok_or(ParseError::MissingEnd)?;
        Ok(Maze::from_parts(cells, width, height, start, end))
    }
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no cells.
    Empty,
    /// A line's width differs from the first line's.
    RaggedLine { line: usize },
    /// A character outside `#.SE` was found.
    InvalidRune { ch: char, pos: Pos },
    /// No `S` cell was found.
    MissingStart,
    /// No `E` cell was found.
    MissingEnd,
    /// More than one `S` cell; holds the first occurrence.
    DuplicateStart { pos: Pos },
    /// More than one `E` cell; holds the first occurrence.
    DuplicateEnd { pos: Pos },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty input"),
            Self::RaggedLine { line } => {
                write!(f, "maze: line {line} has inconsistent width")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "maze: no start cell"),
            Self::MissingEnd => write!(f, "maze: no end cell"),
            Self::DuplicateStart { pos } => {
                write!(f, "maze: more than one start cell (first at {pos})")
            }
            Self::DuplicateEnd { pos } => {
                write!(f, "maze: more than one end cell (first at {pos})")
            }
        }
    }
}

impl std::error::Error for ParseError {}
