//! Full-depth negamax search.
//!
//! Every legal continuation is explored to the end of the game; there is
//! no pruning and no memoization. Scores are from the point of view of
//! the player to move: a win found `d` plies below the root is worth
//! `1000 / d`, so nearer wins score higher and nearer losses score lower.
//! Draws are worth 0.

use crate::board::CELLS;
use crate::error::SearchError;
use crate::BoardState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Magnitude of a win one ply away.
pub const WIN_SCORE: i32 = 1000;

/// A chosen cell and its score for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Evaluation {
    /// Best cell, or `None` on a finished board.
    pub cell: Option<usize>,
    /// Negamax score of `cell`.
    pub score: i32,
}

/// Root evaluation plus search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Analysis {
    /// Evaluation of the root position.
    pub evaluation: Evaluation,
    /// Number of positions visited, root included.
    pub nodes: u64,
}

/// Returns the best cell for the player to move.
///
/// Ties go to the lowest cell index.
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMove`] if `state` is not running.
#[instrument(skip(state), fields(to_move = %state.current_player()))]
pub fn best_move(state: &BoardState) -> Result<usize, SearchError> {
    analyze(state)?
        .evaluation
        .cell
        .ok_or(SearchError::NoLegalMove)
}

/// Searches `state` and reports the root evaluation and node count.
///
/// A finished board evaluates to its terminal score with no cell.
#[instrument(skip(state), fields(to_move = %state.current_player()))]
pub fn analyze(state: &BoardState) -> Result<Analysis, SearchError> {
    let mut nodes = 0;
    let evaluation = negamax(state, 0, &mut nodes)?;
    debug!(cell = ?evaluation.cell, score = evaluation.score, nodes, "Search finished");
    Ok(Analysis::new(evaluation, nodes))
}

/// Worst score reachable at `depth`: losing right here.
fn loss_score(depth: i32) -> i32 {
    -WIN_SCORE / depth.max(1)
}

fn negamax(state: &BoardState, depth: i32, nodes: &mut u64) -> Result<Evaluation, SearchError> {
    *nodes += 1;

    if !state.is_running() {
        // A won board was won by the previous mover.
        let score = if state.is_won() { loss_score(depth) } else { 0 };
        return Ok(Evaluation::new(None, score));
    }

    let mut best = Evaluation::new(None, loss_score(depth));

    for cell in 0..CELLS {
        if !state.is_free(cell) {
            continue;
        }
        let child = state.apply_move(cell)?;
        let score = -negamax(&child, depth + 1, nodes)?.score;
        // Strict: the first cell reaching the best score keeps it.
        if score > best.score {
            best = Evaluation::new(Some(cell), score);
        }
    }

    if best.cell.is_none() {
        return Err(SearchError::NoLegalMove);
    }
    Ok(best)
}
