//! Position analysis: replay a move list and report the search result.

use anyhow::{Context, Result, bail};
use negamax_tictactoe::{BoardState, Outcome, Player, analyze};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

/// Everything known about a position after replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Cells played from the opening position, in order.
    pub moves: Vec<usize>,
    /// Rendered board.
    pub board: String,
    /// Player to move (the winner, once the game is won).
    pub to_move: Player,
    /// Unoccupied cells.
    pub free_cells: Vec<usize>,
    /// Result of a finished game.
    pub outcome: Option<Outcome>,
    /// Cell the search picks, if the game is running.
    pub best_move: Option<usize>,
    /// Negamax score for the player to move.
    pub score: i32,
    /// Positions visited by the search.
    pub nodes: u64,
}

/// Replays `moves` from the opening position and searches the result.
///
/// # Errors
///
/// Fails if a move is illegal or played after the game ended.
#[instrument]
pub fn build_report(moves: &[usize]) -> Result<AnalysisReport> {
    let mut state = BoardState::new();
    for (ply, &cell) in moves.iter().enumerate() {
        if !state.is_running() {
            bail!("Move {} ({}) played after the game ended", ply + 1, cell);
        }
        state = state
            .apply_move(cell)
            .with_context(|| format!("Move {} is illegal", ply + 1))?;
    }

    let analysis = analyze(&state)?;
    Ok(AnalysisReport {
        moves: moves.to_vec(),
        board: state.render(),
        to_move: state.current_player(),
        free_cells: state.free_cells(),
        outcome: state.outcome(),
        best_move: analysis.evaluation.cell,
        score: analysis.evaluation.score,
        nodes: analysis.nodes,
    })
}

/// Writes `report` as text, or as pretty JSON when `json` is set.
pub fn write_report<W: Write>(report: &AnalysisReport, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", report.board)?;
    let free: Vec<String> = report.free_cells.iter().map(|c| c.to_string()).collect();
    writeln!(out, "Free cells: {}", free.join(" "))?;
    match (report.outcome, report.best_move) {
        (Some(outcome), _) => writeln!(out, "Game over: {}", outcome)?,
        (None, Some(cell)) => {
            writeln!(out, "To move: {}", report.to_move)?;
            writeln!(
                out,
                "Best move: {} (score {}, {} nodes)",
                cell, report.score, report.nodes
            )?;
        }
        (None, None) => bail!("Running position without a best move"),
    }
    Ok(())
}
