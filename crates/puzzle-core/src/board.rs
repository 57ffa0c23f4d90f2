//! Thin wrapper around the shakmaty rules engine.
//!
//! Everything the rest of the crate needs from chess rules goes through this
//! boundary: load a position from FEN, apply a move given in SAN or
//! coordinate notation, serialize the position back, and report whose turn
//! it is. Legality, notation and game state stay shakmaty's job.

use shakmaty::{
    fen::Fen,
    san::{San, SanPlus},
    uci::UciMove,
    CastlingMode, Chess, Color, EnPassantMode, Move, Position, Rank, Role, Square,
};

use crate::error::PuzzleError;

/// Canonical record of a move after the engine accepted it.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    /// SAN including a `+`/`#` suffix where applicable.
    pub san: String,
    /// UCI string, promotion piece included ("e7e8q").
    pub uci: String,
    /// Origin square ("e2").
    pub from: String,
    /// Destination square ("e4"). For castling this is the king's
    /// destination, not the rook's.
    pub to: String,
}

impl AppliedMove {
    /// Dual comparison against a solution entry: the entry may be authored
    /// in SAN or as origin+destination coordinates, and either form counts.
    pub fn matches(&self, expected: &str) -> bool {
        self.san == expected
            || self.uci == expected
            || format!("{}{}", self.from, self.to) == expected
    }
}

/// A mutable chess position.
#[derive(Debug, Clone)]
pub struct GameBoard {
    position: Chess,
}

impl GameBoard {
    /// Load a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, PuzzleError> {
        let fen: Fen = fen
            .parse()
            .map_err(|e| PuzzleError::InvalidFen(format!("{e}")))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| PuzzleError::InvalidFen(format!("{e}")))?;
        Ok(Self { position })
    }

    /// Serialize the current position back to FEN.
    pub fn to_fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Whose turn it is. The UI uses this to orient the board.
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Apply a move written in SAN ("Nf3", "Qh4#") or coordinates ("g1f3").
    ///
    /// A coordinate promotion push that omits the piece promotes to queen,
    /// matching what the drag-and-drop front end sends. Malformed input and
    /// illegal moves both come back as [`PuzzleError::IllegalMove`].
    pub fn apply(&mut self, input: &str) -> Result<AppliedMove, PuzzleError> {
        let mv = self
            .parse_move(input)
            .ok_or_else(|| PuzzleError::IllegalMove(input.to_string()))?;

        // SAN depends on the position before the move.
        let san = San::from_move(&self.position, mv.clone()).to_string();
        let uci = UciMove::from_move(mv.clone(), CastlingMode::Standard);
        let (from, to) = match &uci {
            UciMove::Normal { from, to, .. } => (from.to_string(), to.to_string()),
            _ => (String::new(), mv.to().to_string()),
        };
        let uci = uci.to_string();

        self.position = self
            .position
            .clone()
            .play(mv)
            .map_err(|_| PuzzleError::IllegalMove(input.to_string()))?;

        let san = if self.position.is_checkmate() {
            format!("{san}#")
        } else if self.position.is_check() {
            format!("{san}+")
        } else {
            san
        };

        Ok(AppliedMove { san, uci, from, to })
    }

    /// Resolve user input to a legal move, trying SAN first, then UCI.
    fn parse_move(&self, input: &str) -> Option<Move> {
        if let Ok(san) = input.parse::<SanPlus>() {
            if let Ok(mv) = san.san.to_move(&self.position) {
                return Some(mv);
            }
        }
        if let Ok(uci) = input.parse::<UciMove>() {
            let uci = self.with_default_promotion(uci);
            if let Ok(mv) = uci.to_move(&self.position) {
                return Some(mv);
            }
        }
        None
    }

    fn with_default_promotion(&self, uci: UciMove) -> UciMove {
        match uci {
            UciMove::Normal {
                from,
                to,
                promotion: None,
            } if self.is_promotion_push(from, to) => UciMove::Normal {
                from,
                to,
                promotion: Some(Role::Queen),
            },
            other => other,
        }
    }

    fn is_promotion_push(&self, from: Square, to: Square) -> bool {
        matches!(to.rank(), Rank::First | Rank::Eighth)
            && self
                .position
                .board()
                .piece_at(from)
                .is_some_and(|piece| piece.role == Role::Pawn)
    }
}
