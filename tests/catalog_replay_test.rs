//! Dataset soundness checks for the embedded puzzle catalog.
//!
//! Every shipped puzzle must replay legally from its FEN, and the
//! solution must validate against itself. Catching a broken entry here
//! is far cheaper than shipping a puzzle nobody can solve.

use puzzle_core::{validate_moves, Catalog, GameBoard, Outcome};

#[test]
fn test_every_puzzle_fen_parses() {
    let catalog = Catalog::embedded().unwrap();
    for puzzle in catalog.puzzles() {
        let board = GameBoard::from_fen(&puzzle.fen);
        assert!(board.is_ok(), "puzzle {} has a bad FEN: {}", puzzle.id, puzzle.fen);
    }
}

#[test]
fn test_every_solution_replays_legally() {
    let catalog = Catalog::embedded().unwrap();
    for puzzle in catalog.puzzles() {
        let mut board = GameBoard::from_fen(&puzzle.fen).unwrap();
        for (ply, mv) in puzzle.solution.iter().enumerate() {
            let applied = board.apply(mv);
            assert!(
                applied.is_ok(),
                "puzzle {} move {} ({mv}) does not replay: {:?}",
                puzzle.id,
                ply + 1,
                applied.err()
            );
        }
    }
}

#[test]
fn test_every_solution_validates_against_itself() {
    let catalog = Catalog::embedded().unwrap();
    for puzzle in catalog.puzzles() {
        let outcome = validate_moves(&puzzle.fen, &puzzle.solution, &puzzle.solution).unwrap();
        assert_eq!(
            outcome,
            Outcome::Correct,
            "puzzle {} solution does not validate against itself",
            puzzle.id
        );
    }
}

#[test]
fn test_solutions_are_nonempty() {
    let catalog = Catalog::embedded().unwrap();
    for puzzle in catalog.puzzles() {
        assert!(!puzzle.solution.is_empty(), "puzzle {} has no solution", puzzle.id);
    }
}
