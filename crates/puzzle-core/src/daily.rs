//! Date-based puzzle selection.
//!
//! One puzzle per tier per calendar day: the day-of-year indexes into the
//! tier's puzzles modulo their count. The date is injected by the caller
//! (its local calendar day), so selection is a pure function and immune to
//! DST/offset changes within the day.

use chrono::{Datelike, NaiveDate};

use crate::catalog::{Catalog, Difficulty, Puzzle};
use crate::error::PuzzleError;

/// 1-based ordinal of a date within its calendar year (Jan 1 = 1).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Pick the puzzle of the day for a tier.
///
/// Deterministic: the same catalog, tier and calendar date always yield the
/// same puzzle. Returns [`PuzzleError::NotFound`] when the tier is empty.
pub fn select_daily(
    catalog: &Catalog,
    difficulty: Difficulty,
    date: NaiveDate,
) -> Result<&Puzzle, PuzzleError> {
    let filtered: Vec<&Puzzle> = catalog.for_difficulty(difficulty).collect();
    if filtered.is_empty() {
        return Err(PuzzleError::NotFound(difficulty));
    }
    let index = day_of_year(date) as usize % filtered.len();
    Ok(filtered[index])
}
