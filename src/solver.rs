//! Backtracking search over the board.
//!
//! Cells are visited in forward row-major order (`index = row * 9 + col`);
//! each level fills the next empty cell at or after its index and undoes the
//! placement on backtrack, so a failed search never leaves a board partially
//! mutated. Recursion depth is bounded by the 81 cells.

use rand::{seq::SliceRandom, Rng};

use crate::{board::Board, rules::is_safe};

/// Returns one completion of `board`, or `None` if no completion exists.
/// "No solution" is an ordinary outcome, not an error. The caller's board is
/// untouched; the search runs on an internal clone.
///
/// Digit trial order is randomized per cell, so repeated calls on a board
/// with many completions yield varied results.
pub fn solve_board(board: &Board) -> Option<Board> {
    solve_board_with_rng(board, &mut rand::thread_rng())
}

/// [`solve_board`] with an explicit randomness source, for reproducible runs.
pub fn solve_board_with_rng<R: Rng>(board: &Board, rng: &mut R) -> Option<Board> {
    let mut working = board.clone();
    if fill_from(&mut working, 0, rng) {
        Some(working)
    } else {
        None
    }
}

/// True iff exactly one completion of `board` exists. Counting stops at the
/// second solution, so the worst case stays bounded.
pub fn has_unique_solution(board: &Board) -> bool {
    count_solutions(board, 0, 2) == 1
}

/// Counts completions reachable from `start_index` onward (row-major),
/// stopping as soon as the count reaches `limit`. Pass `usize::MAX` for an
/// unbounded count; pass 2 for uniqueness checks. Cells before `start_index`
/// are not revisited; callers resuming a search guarantee that prefix is
/// already filled.
pub fn count_solutions(board: &Board, start_index: usize, limit: usize) -> usize {
    let mut working = board.clone();
    let mut found = 0;
    count_from(&mut working, start_index, limit, &mut found);
    found
}

fn fill_from<R: Rng>(board: &mut Board, index: usize, rng: &mut R) -> bool {
    let Some((row, col, idx)) = find_next_empty(board, index) else {
        return true;
    };
    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    for d in digits {
        if is_safe(board, row, col, d) {
            board.set(row, col, d);
            if fill_from(board, idx + 1, rng) {
                return true;
            }
            board.set(row, col, 0);
        }
    }
    false
}

fn count_from(board: &mut Board, index: usize, limit: usize, found: &mut usize) {
    if *found >= limit {
        return;
    }
    let Some((row, col, idx)) = find_next_empty(board, index) else {
        // Every cell filled: one complete assignment reached.
        *found += 1;
        return;
    };
    for d in 1..=9 {
        if is_safe(board, row, col, d) {
            board.set(row, col, d);
            count_from(board, idx + 1, limit, found);
            board.set(row, col, 0);
            if *found >= limit {
                return;
            }
        }
    }
}

fn find_next_empty(board: &Board, start: usize) -> Option<(usize, usize, usize)> {
    for idx in start..81 {
        let (row, col) = (idx / 9, idx % 9);
        if board.get(row, col) == 0 {
            return Some((row, col, idx));
        }
    }
    None
}
