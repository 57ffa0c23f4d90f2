//! Live solving state for one puzzle.
//!
//! Owned by a single UI instance; reset whenever a new puzzle loads or the
//! user asks for a restart. Never persisted. The session advances its own
//! board move by move while the validator replays the accumulated history
//! on an independent copy.

use shakmaty::Color;

use crate::board::GameBoard;
use crate::catalog::Puzzle;
use crate::error::PuzzleError;
use crate::validate::{validate_moves, Outcome};

/// What the UI should show after a move lands on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFeedback {
    /// The full solution was entered.
    Solved,
    /// On track, more moves expected.
    KeepGoing,
    /// Off the solution; the user may reset and retry.
    Wrong,
    /// Move not applied: illegal, malformed, or the puzzle is already solved.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    board: GameBoard,
    moves: Vec<String>,
    orientation: Color,
    solved: bool,
}

impl Session {
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        let board = GameBoard::from_fen(&puzzle.fen)?;
        let orientation = board.turn();
        Ok(Self {
            puzzle,
            board,
            moves: Vec::new(),
            orientation,
            solved: false,
        })
    }

    /// Apply a user move and report progress against the solution.
    ///
    /// A wrong-but-legal move stays on the board; the user decides whether
    /// to reset.
    pub fn try_move(&mut self, input: &str) -> Result<MoveFeedback, PuzzleError> {
        if self.solved {
            return Ok(MoveFeedback::Rejected);
        }

        let applied = match self.board.apply(input) {
            Ok(applied) => applied,
            Err(PuzzleError::IllegalMove(_)) => return Ok(MoveFeedback::Rejected),
            Err(e) => return Err(e),
        };

        // History keeps canonical SAN regardless of how the move came in.
        self.moves.push(applied.san);

        match validate_moves(&self.puzzle.fen, &self.moves, &self.puzzle.solution)? {
            Outcome::Correct => {
                self.solved = true;
                Ok(MoveFeedback::Solved)
            }
            Outcome::Incomplete => Ok(MoveFeedback::KeepGoing),
            Outcome::Incorrect => Ok(MoveFeedback::Wrong),
        }
    }

    /// Back to the starting position, history cleared.
    pub fn reset(&mut self) -> Result<(), PuzzleError> {
        self.board = GameBoard::from_fen(&self.puzzle.fen)?;
        self.moves.clear();
        self.solved = false;
        Ok(())
    }

    /// Current position of the live board.
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    /// Side to move at the start of the puzzle; the board faces this player.
    pub fn orientation(&self) -> Color {
        self.orientation
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
}
