use clap::Parser;
use tile_solver::engine::{create_game_board, create_game_board_with_seed};
use tile_solver::utils::board_to_csv;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Side length of the board
    #[clap(short = 'n', long, default_value_t = 3)]
    size: usize,

    /// Number of random legal moves applied to the solved board
    #[clap(short = 'k', long, default_value_t = 25)]
    shuffles: usize,

    /// Seed for a reproducible board; omitted means a fresh random board
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let board = match args.seed {
        Some(seed) => create_game_board_with_seed(args.size, args.shuffles, seed),
        None => create_game_board(args.size, args.shuffles),
    };

    println!(
        "Generated a {}x{} board with {} shuffle moves:\n",
        args.size, args.size, args.shuffles
    );
    println!("{}", board);
    println!("CSV: {}", board_to_csv(&board));
}
