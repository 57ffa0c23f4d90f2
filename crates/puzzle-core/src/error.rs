//! Core error types.

use thiserror::Error;

use crate::catalog::Difficulty;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("no {0} puzzle available")]
    NotFound(Difficulty),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}
