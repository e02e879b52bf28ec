//! mazer — solve a maze file with DFS and BFS and print both solutions.

use std::env;
use std::fs;

use mazer_core::Maze;
use mazer_paths::Solver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file = env::args().nth(1).ok_or("usage: mazer <maze-file>")?;
    let text = fs::read_to_string(&file)?;
    let mut maze = Maze::parse(&text)?;
    let mut solver = Solver::new();

    let dfs = solver.solve_dfs(&mut maze)?;
    println!("DFS ({} cells):", dfs.len());
    println!("{}", maze.render(&dfs));

    maze.reset();

    let bfs = solver.solve_bfs(&mut maze)?;
    println!();
    println!("BFS ({} cells):", bfs.len());
    println!("{}", maze.render(&bfs));

    Ok(())
}
