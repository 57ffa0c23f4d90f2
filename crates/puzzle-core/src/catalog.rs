//! Puzzle data model and the static catalog.
//!
//! The catalog is a build-time artifact: an ordered JSON array of puzzles
//! compiled into the binary. There are no create/update/delete operations;
//! dataset correctness is an authoring-time responsibility (checked by the
//! integration tests, not at load time).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Embedded dataset. A deployment can override it with its own file via the
/// server's `PUZZLE_CATALOG_PATH`, parsed through [`Catalog::from_json`].
const EMBEDDED_PUZZLES: &str = include_str!("../data/puzzles.json");

/// Fixed difficulty tiers. Rotation happens independently per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Master,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Master => "Master",
        };
        write!(f, "{name}")
    }
}

/// A single pre-authored puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: u32,
    pub difficulty: Difficulty,
    /// Starting position.
    pub fen: String,
    /// The unique correct continuation, both sides' moves interleaved.
    /// Entries are SAN ("Nf3") or origin+destination coordinates ("g1f3").
    pub solution: Vec<String>,
    pub title: String,
}

/// Immutable, ordered collection of puzzles. Loaded once per process.
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Parse a catalog from a JSON array of puzzles.
    pub fn from_json(raw: &str) -> Result<Self, PuzzleError> {
        let puzzles: Vec<Puzzle> = serde_json::from_str(raw)?;
        Ok(Self { puzzles })
    }

    /// Load the dataset compiled into the binary.
    pub fn embedded() -> Result<Self, PuzzleError> {
        Self::from_json(EMBEDDED_PUZZLES)
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Puzzles of one tier, in catalog order.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Puzzle> {
        self.puzzles
            .iter()
            .filter(move |p| p.difficulty == difficulty)
    }
}
