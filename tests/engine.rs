use pretty_assertions::assert_eq;
use sudogen::{
    count_solutions, has_unique_solution, is_placement_valid, solve_board, Board, Difficulty,
    Generator,
};

const DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Expert,
];

#[test]
fn every_difficulty_yields_a_unique_puzzle() {
    let mut generator = Generator::new(Some(7));
    for difficulty in DIFFICULTIES {
        let pair = generator.generate(difficulty);
        assert!(
            has_unique_solution(&pair.puzzle),
            "{difficulty} puzzle must have exactly one solution"
        );
    }
}

#[test]
fn puzzle_clues_match_the_solution() {
    let mut generator = Generator::new(Some(11));
    let pair = generator.generate(Difficulty::Medium);
    for r in 0..9 {
        for c in 0..9 {
            let v = pair.puzzle.get(r, c);
            if v != 0 {
                assert_eq!(v, pair.solution.get(r, c), "clue at ({r},{c})");
            }
        }
    }
}

#[test]
fn solving_the_puzzle_reconstructs_the_emitted_solution() {
    let mut generator = Generator::new(Some(23));
    let pair = generator.generate(Difficulty::Hard);
    let solved = solve_board(&pair.puzzle).expect("generated puzzle is solvable");
    assert_eq!(solved, pair.solution);
}

#[test]
fn emitted_solutions_are_complete_and_valid() {
    let mut generator = Generator::new(Some(31));
    for difficulty in DIFFICULTIES {
        let pair = generator.generate(difficulty);
        assert!(pair.solution.is_complete());
        assert!(pair.solution.is_valid());
        assert!(pair.puzzle.is_valid());
    }
}

#[test]
fn clue_targets_decrease_with_difficulty() {
    assert!(Difficulty::Easy.clue_target() >= Difficulty::Medium.clue_target());
    assert!(Difficulty::Medium.clue_target() >= Difficulty::Hard.clue_target());
    assert!(Difficulty::Hard.clue_target() >= Difficulty::Expert.clue_target());
}

#[test]
fn clue_counts_respect_the_target_floor() {
    // The target is a ceiling on removals: observed counts may exceed it but
    // never drop below it.
    let mut generator = Generator::new(Some(5));
    for difficulty in DIFFICULTIES {
        let pair = generator.generate(difficulty);
        let clues = pair.puzzle.clue_count();
        assert!(clues >= difficulty.clue_target(), "{difficulty}: {clues} clues");
        assert!(clues <= 81);
    }
}

#[test]
fn placement_validity_boundaries() {
    let b = Board::empty();
    for r in 0..9 {
        for c in 0..9 {
            assert!(!is_placement_valid(&b, r, c, 0));
            assert!(!is_placement_valid(&b, r, c, 10));
            for v in 1..=9 {
                assert!(is_placement_valid(&b, r, c, v));
            }
        }
    }
}

#[test]
fn cloning_a_board_is_deep() {
    let mut generator = Generator::new(Some(3));
    let original = generator.generate(Difficulty::Easy).puzzle;
    let snapshot = original.clone();
    let mut copy = original.clone();
    assert_eq!(copy, original);
    let flipped = if original.get(4, 4) == 9 { 8 } else { 9 };
    copy.set(4, 4, flipped);
    assert_eq!(copy.get(4, 4), flipped);
    // Mutating the clone never touches the source board.
    assert_eq!(original, snapshot);
}

#[test]
fn the_empty_board_counts_exactly_to_the_limit() {
    assert_eq!(count_solutions(&Board::empty(), 0, 2), 2);
}

#[test]
fn unknown_difficulty_labels_fall_back_to_medium() {
    assert_eq!(Difficulty::from_label("nightmare"), Difficulty::Medium);
    assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
    assert_eq!(Difficulty::from_label("expert"), Difficulty::Expert);
}
