use crate::engine::{Board, Direction, Tile};
use crate::solver::solve;

/// Parses the compact comma-separated board string used across the host
/// boundary.
///
/// The format is `"n,t0,t1,…,t(n²−1)"`: the side length followed by the
/// row-major tile symbols, with the blank encoded as `-1`. Whitespace
/// around fields is ignored.
///
/// # Arguments
/// * `csv`: The board string, e.g. `"3,8,4,6,3,7,1,5,2,-1"`.
///
/// # Returns
/// * `Ok(Board)` if parsing succeeds.
/// * `Err(String)` naming the offending field if:
///     - the size field or any tile field is not an integer,
///     - the size is less than 2,
///     - the number of tile fields is not n²,
///     - the tile symbols are not exactly {1, …, n²−1} plus one blank.
///
/// # Examples
/// ```
/// use tile_solver::utils::parse_board;
///
/// let board = parse_board("3,8,4,6,3,7,1,5,2,-1").unwrap();
/// assert_eq!(board.n(), 3);
/// assert_eq!(board.blank_index(), 8);
///
/// assert!(parse_board("3,8,4,6").is_err()); // wrong field count
/// assert!(parse_board("3,8,4,6,3,7,1,5,2,x").is_err()); // non-integer
/// assert!(parse_board("1,-1").is_err()); // size too small
/// ```
pub fn parse_board(csv: &str) -> Result<Board, String> {
    let fields: Vec<&str> = csv.trim().split(',').collect();

    let size_field = fields[0].trim();
    let n: usize = size_field
        .parse()
        .map_err(|_| format!("Board size '{}' is not an integer", size_field))?;
    if n < 2 {
        return Err(format!("Board size must be at least 2, got {}", n));
    }

    let tile_fields = &fields[1..];
    if tile_fields.len() != n * n {
        return Err(format!(
            "Expected {} tile fields for a {}x{} board, found {}",
            n * n,
            n,
            n,
            tile_fields.len()
        ));
    }

    let mut tiles: Vec<Tile> = Vec::with_capacity(n * n);
    for (i, field) in tile_fields.iter().enumerate() {
        let field = field.trim();
        let symbol: i32 = field
            .parse()
            .map_err(|_| format!("Tile field {} ('{}') is not an integer", i, field))?;
        tiles.push(Tile::new(symbol));
    }

    // Multiset validation happens in the engine constructor.
    Board::from_tiles(n, tiles)
}

/// Encodes a board as the comma-separated string accepted by
/// [`parse_board`].
pub fn board_to_csv(board: &Board) -> String {
    let mut fields = vec![board.n().to_string()];
    fields.extend(board.tiles().iter().map(|t| t.symbol().to_string()));
    fields.join(",")
}

/// Encodes a move sequence as the compact solution string, one `U`/`D`/
/// `L`/`R` character per move.
pub fn moves_to_string(moves: &[Direction]) -> String {
    moves.iter().map(|m| m.to_char()).collect()
}

/// Text-level solve adapter for hosts that cannot pass structured data.
///
/// Parses the CSV board described by [`parse_board`], runs the solver, and
/// returns the solution as a `U`/`D`/`L`/`R` string. Parse failures are
/// returned without invoking the solver; a board that cannot reach the
/// goal reports an error once the search space is exhausted.
///
/// # Examples
/// ```
/// use tile_solver::utils::solve_board;
///
/// // One move from solved: the blank slides right.
/// assert_eq!(solve_board("3,1,2,3,4,5,6,7,-1,8").unwrap(), "R");
/// // Already solved: the solution is empty.
/// assert_eq!(solve_board("3,1,2,3,4,5,6,7,8,-1").unwrap(), "");
/// ```
pub fn solve_board(csv: &str) -> Result<String, String> {
    let board = parse_board(csv)?;
    let moves =
        solve(&board).ok_or_else(|| "No solution exists for the given board".to_string())?;
    Ok(moves_to_string(&moves))
}
