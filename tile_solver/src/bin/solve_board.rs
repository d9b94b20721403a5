use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tile_solver::engine::Board;
use tile_solver::solver::solve;
use tile_solver::utils::{moves_to_string, parse_board};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a file holding one comma-separated board line
    /// ("n,t0,...,t(n*n-1)", blank as -1)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| "Board file is empty".to_string())?;

    parse_board(line)
}

fn main() {
    let args = Args::parse();

    let board = read_board_file(&args.board_file).expect(&format!(
        "Failed to read board from file: {}",
        args.board_file.display()
    ));
    println!("Loaded board from {}\n", args.board_file.display());
    println!("Start configuration:\n{}", board);
    println!("Searching for an optimal solution...\n");

    match solve(&board) {
        Some(moves) => {
            if moves.is_empty() {
                println!("The board is already solved.");
            } else {
                println!("Solution found ({} moves):", moves.len());
                println!("  {}", moves_to_string(&moves));
                let words: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                println!("  {}", words.join(", "));
            }
        }
        None => {
            println!("No solution exists for this board.");
        }
    }
}
