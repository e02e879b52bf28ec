//! **mazer-core** — maze grid model.
//!
//! This crate provides the data side of the maze solver: the [`Pos`]
//! coordinate type, [`Cell`] records carrying wall/explored/parent state,
//! and the [`Maze`] arena with bounds checking, text parsing and solution
//! rendering.

pub mod cell;
pub mod geom;
pub mod maze;
pub mod parse;
pub mod render;

pub use cell::Cell;
pub use geom::Pos;
pub use maze::Maze;
pub use parse::ParseError;
