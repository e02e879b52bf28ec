//! Maze traversal for [`mazer_core`] grids.
//!
//! This crate provides the search side of the maze solver:
//!
//! - **DFS** explicit-stack depth-first search ([`Solver::solve_dfs`])
//! - **BFS** queue-based breadth-first search ([`Solver::solve_bfs`]),
//!   which returns a minimal-length path
//! - **Path reconstruction** from parent links ([`Solver::solution`])
//!
//! All searches operate through [`Solver`], which owns and reuses its
//! frontier storage so that repeated solves incur no allocations after
//! warm-up. Each call takes the maze as an explicit mutable handle, runs
//! synchronously to completion, and leaves explored/parent state behind for
//! [`Solver::solution`] to read; the caller resets the maze between
//! searches.
//!
//! Frontier cells are visited at most once: a neighbor whose explored flag
//! is already set is skipped rather than re-pushed, so parent links are
//! never overwritten within one search.

mod bfs;
mod dfs;
mod solution;
mod solver;

pub use solver::{SolveError, Solver};
