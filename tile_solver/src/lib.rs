//! # Sliding-Tile Puzzle Solver Library
//!
//! This library provides the core engine for N×N sliding-tile puzzles and
//! an A* solver that returns an optimal sequence of blank-tile moves, using
//! a composite admissible heuristic (Manhattan distance plus linear
//! conflicts).
//!
//! It is used by three binaries:
//! - `solve_board`: Reads a comma-separated board from a file and prints
//!   the optimal solution string.
//! - `generate_board`: Shuffles a solved board with random legal moves and
//!   prints the resulting (always solvable) configuration.
//! - `play`: Allows solving a shuffled board interactively via the
//!   command line.
//!
//! ## Modules
//! - `engine`: Contains the tile and board representations (`Tile`,
//!   `Direction`, `Board`), move legality and application, and the
//!   legal-move shuffler.
//! - `heuristics`: The Manhattan-distance and linear-conflict cost
//!   functions that guide the search.
//! - `solver`: The A* driver (`Solver`) with its frontier, closed set, and
//!   search-node arena, plus the `solve` entry point.
//! - `utils`: The text codec for the host boundary (CSV board in,
//!   `U`/`D`/`L`/`R` solution string out).

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
