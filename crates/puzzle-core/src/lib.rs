//! Daily chess puzzle core: a static puzzle catalog, deterministic
//! date-based selection, and move-sequence validation on top of the
//! shakmaty rules engine.

pub mod board;
pub mod catalog;
pub mod daily;
pub mod error;
pub mod session;
pub mod validate;

pub use board::{AppliedMove, GameBoard};
pub use catalog::{Catalog, Difficulty, Puzzle};
pub use daily::{day_of_year, select_daily};
pub use error::PuzzleError;
pub use session::{MoveFeedback, Session};
pub use validate::{validate_moves, Outcome};
