//! 9x9 Sudoku engine: generates puzzles with a guaranteed unique solution,
//! solves boards, and validates placements.

pub mod board;
pub mod generator;
pub mod rules;
pub mod solver;

pub use board::{Board, ParseBoardError};
pub use generator::{Difficulty, GeneratedPuzzle, Generator};
pub use rules::is_placement_valid;
pub use solver::{count_solutions, has_unique_solution, solve_board, solve_board_with_rng};
