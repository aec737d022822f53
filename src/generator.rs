use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::{board::Board, solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Target number of clues retained by the carve phase. This is a ceiling
    /// on removals, not an exact count: the emitted puzzle keeps at least
    /// this many clues, more when uniqueness-preserving removals run out.
    pub fn clue_target(self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 34,
            Difficulty::Hard => 30,
            Difficulty::Expert => 26,
        }
    }

    /// Unrecognized labels fall back to medium.
    pub fn from_label(label: &str) -> Self {
        match label {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "expert" => Difficulty::Expert,
            other => {
                log::warn!("unrecognized difficulty {other:?}, using medium");
                Difficulty::Medium
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A carved puzzle together with the complete grid it was carved from.
/// Every clue in `puzzle` equals the corresponding cell of `solution`, and
/// `solution` is the puzzle's only completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub puzzle: Board,
    pub solution: Board,
}

/// Puzzle generator owning its randomness source, so runs are reproducible
/// under a fixed seed.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(rand::thread_rng()).unwrap(),
        };
        Self { rng }
    }

    /// Builds a complete random grid, then carves it down toward the
    /// difficulty's clue target while every removal keeps the solution
    /// unique.
    pub fn generate(&mut self, difficulty: Difficulty) -> GeneratedPuzzle {
        let solution = self.build_complete_board();
        let puzzle = self.carve(&solution, difficulty.clue_target());
        log::debug!(
            "generated {difficulty} puzzle with {} clues",
            puzzle.clue_count()
        );
        GeneratedPuzzle { puzzle, solution }
    }

    // Phase 1: randomized backtracking fill over the empty board.
    fn build_complete_board(&mut self) -> Board {
        solver::solve_board_with_rng(&Board::empty(), &mut self.rng)
            .expect("the empty board always has a completion")
    }

    // Phase 2: visit all cells in shuffled order, clearing each one that
    // leaves the puzzle uniquely solvable, until 81 - target removals.
    fn carve(&mut self, solution: &Board, target_clues: usize) -> Board {
        let mut puzzle = solution.clone();
        let mut positions: Vec<usize> = (0..81).collect();
        positions.shuffle(&mut self.rng);

        let max_removals = 81 - target_clues;
        let mut removed = 0;
        for idx in positions {
            if removed >= max_removals {
                break;
            }
            let (row, col) = (idx / 9, idx % 9);
            let backup = puzzle.get(row, col);
            puzzle.set(row, col, 0);
            if solver::count_solutions(&puzzle, 0, 2) == 1 {
                removed += 1;
                log::debug!("cleared r{}c{}, {} clues left", row + 1, col + 1, 81 - removed);
            } else {
                // Removal would break uniqueness; put the digit back.
                puzzle.set(row, col, backup);
            }
        }
        puzzle
    }
}
