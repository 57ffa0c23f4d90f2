use std::sync::Arc;

use axum::{extract::Query, Extension, Json};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use shakmaty::Color;

use puzzle_core::{select_daily, validate_moves, Catalog, Difficulty, GameBoard, Outcome};

use crate::config::Config;
use crate::error::AppError;
use crate::share;

#[derive(Deserialize)]
pub struct DailyQuery {
    pub difficulty: Difficulty,
}

/// GET /api/puzzles/daily?difficulty=Beginner
///
/// Today's puzzle for the tier, solution withheld. The day boundary is the
/// server's local calendar day.
pub async fn get_daily_puzzle(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(params): Query<DailyQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let today = Local::now().date_naive();
    let puzzle = select_daily(&catalog, params.difficulty, today)?;
    let board = GameBoard::from_fen(&puzzle.fen)?;

    let orientation = match board.turn() {
        Color::White => "white",
        Color::Black => "black",
    };

    Ok(Json(json!({
        "id": puzzle.id,
        "title": puzzle.title,
        "difficulty": puzzle.difficulty,
        "fen": puzzle.fen,
        "orientation": orientation,
        "solutionLength": puzzle.solution.len(),
    })))
}

#[derive(Deserialize)]
pub struct AttemptRequest {
    pub difficulty: Difficulty,
    pub moves: Vec<String>,
}

/// POST /api/puzzles/attempt
///
/// Validate a move sequence against today's puzzle for the tier. Share
/// links are only attached once the puzzle is solved.
pub async fn submit_attempt(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(config): Extension<Config>,
    Json(req): Json<AttemptRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let today = Local::now().date_naive();
    let puzzle = select_daily(&catalog, req.difficulty, today)?;
    let outcome = validate_moves(&puzzle.fen, &req.moves, &puzzle.solution)?;

    let share = match outcome {
        Outcome::Correct => Some(share::share_links(req.difficulty, &config.share_url)),
        _ => None,
    };

    Ok(Json(json!({
        "outcome": outcome,
        "solved": outcome == Outcome::Correct,
        "share": share,
    })))
}
