use std::io::{self, Write};
use tile_solver::engine::{create_game_board, Board, Direction};

const BOARD_SIZE: usize = 3;
const SHUFFLE_MOVES: usize = 15;

fn main() {
    let goal = Board::solved(BOARD_SIZE);
    let mut board = create_game_board(BOARD_SIZE, SHUFFLE_MOVES);
    let mut steps: u32 = 0;

    println!("Welcome to the sliding-tile puzzle!");

    loop {
        println!("---------------------");
        println!("Moves made: {}", steps);
        println!("{}", board);

        if board.is_solved(&goal) {
            println!("---------------------");
            println!("🎉 SOLVED in {} moves! 🎉", steps);
            println!("---------------------");
            break;
        }

        print!("Enter your move (u/d/l/r), or 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        let mut chars = trimmed_input.chars();
        let direction = match (chars.next().and_then(Direction::from_char), chars.next()) {
            (Some(direction), None) => direction,
            _ => {
                println!("Invalid input: Please enter one of 'u', 'd', 'l', 'r', or 'q'.");
                continue;
            }
        };

        // Humans may reverse their own moves, so only the edges of the
        // board limit what they can do.
        if !board.in_bounds(direction) {
            println!("Cannot move {} from here: the blank would leave the board.", direction);
            continue;
        }

        board.move_blank(direction);
        steps += 1;
    }
}
