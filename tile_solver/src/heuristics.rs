use crate::engine::{Board, Tile};

// Locates the goal position of a tile by scanning the goal board. Linear in
// the board area, which is fine at playable sizes.
fn goal_index(goal: &Board, tile: Tile) -> usize {
    goal.tiles()
        .iter()
        .position(|&t| t == tile)
        .expect("tile is present on the goal board")
}

/// Sum over all non-blank tiles of the L1 distance from the tile's current
/// position to its goal position.
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let n = board.n();
    let mut cost = 0u32;
    for (i, tile) in board.tiles().iter().enumerate() {
        if tile.is_blank() {
            continue;
        }
        let j = goal_index(goal, *tile);
        cost += (i % n).abs_diff(j % n) as u32;
        cost += (i / n).abs_diff(j / n) as u32;
    }
    cost
}

/// Number of linearly conflicting tile pairs.
///
/// Two tiles conflict in a row when both sit in their goal row, that row is
/// the one they currently occupy, and their left-to-right order is inverted
/// relative to the goal; columns are symmetric. A tile consumed by a
/// conflict is skipped for further pairs on the same axis, so each tile
/// joins at most one row conflict and at most one column conflict. The
/// blank never conflicts.
pub fn linear_conflicts(board: &Board, goal: &Board) -> u32 {
    let n = board.n();
    let mut pairs = 0u32;

    for row in 0..n {
        let mut consumed = vec![false; n];
        for i in 0..n {
            if consumed[i] {
                continue;
            }
            let a = board.at(row, i);
            if a.is_blank() {
                continue;
            }
            let goal_a = goal_index(goal, a);
            if goal_a / n != row {
                continue;
            }
            for j in (i + 1)..n {
                if consumed[j] {
                    continue;
                }
                let b = board.at(row, j);
                if b.is_blank() {
                    continue;
                }
                let goal_b = goal_index(goal, b);
                if goal_b / n != row {
                    continue;
                }
                // a sits left of b but its goal column is to the right.
                if goal_a % n > goal_b % n {
                    pairs += 1;
                    consumed[i] = true;
                    consumed[j] = true;
                    break;
                }
            }
        }
    }

    for col in 0..n {
        let mut consumed = vec![false; n];
        for i in 0..n {
            if consumed[i] {
                continue;
            }
            let a = board.at(i, col);
            if a.is_blank() {
                continue;
            }
            let goal_a = goal_index(goal, a);
            if goal_a % n != col {
                continue;
            }
            for j in (i + 1)..n {
                if consumed[j] {
                    continue;
                }
                let b = board.at(j, col);
                if b.is_blank() {
                    continue;
                }
                let goal_b = goal_index(goal, b);
                if goal_b % n != col {
                    continue;
                }
                // a sits above b but its goal row is below.
                if goal_a / n > goal_b / n {
                    pairs += 1;
                    consumed[i] = true;
                    consumed[j] = true;
                    break;
                }
            }
        }
    }

    pairs
}

/// The composite admissible heuristic driving the search:
/// Manhattan distance plus two extra moves per linear conflict pair.
pub fn heuristic(board: &Board, goal: &Board) -> u32 {
    manhattan_distance(board, goal) + 2 * linear_conflicts(board, goal)
}
