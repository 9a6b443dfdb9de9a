//! Non-interactive play: apply a list of moves and report each notification.

use crate::messages::describe;
use anyhow::{Context, Result, bail};
use std::io::Write;
use tictactoe::{Game, Outcome, Position, TracingObserver};
use tracing::{info, instrument};

/// Parses one move: `row,col`, a square number 1-9 as printed on the
/// board, or a position label.
///
/// Coordinates are not range-checked here; the engine rejects them.
///
/// # Errors
///
/// Fails if the text matches none of the accepted forms.
pub fn parse_move(text: &str) -> Result<(i32, i32)> {
    if let Some((row, col)) = text.split_once(',') {
        let row = row.trim().parse().with_context(|| format!("Bad row in {:?}", text))?;
        let col = col.trim().parse().with_context(|| format!("Bad column in {:?}", text))?;
        return Ok((row, col));
    }
    match Position::from_label_or_number(text) {
        Some(pos) => Ok((pos.row(), pos.col())),
        None => bail!("Unrecognised move {:?} (expected row,col, 1-9 or a label)", text),
    }
}

/// Plays `moves` in order on a fresh game, writing every notification and
/// the final board to `out`.
///
/// # Errors
///
/// Stops at the first unparsable or rejected move.
#[instrument(skip(out))]
pub fn run_script(moves: &[String], out: &mut impl Write) -> Result<Outcome> {
    let mut game = Game::new().with_observer(TracingObserver);

    for (n, text) in moves.iter().enumerate() {
        let (row, col) = parse_move(text)?;
        let placement = game
            .place(row, col)
            .with_context(|| format!("Move {} ({}) rejected", n + 1, text))?;
        for event in placement.events() {
            writeln!(out, "{}", describe(&event))?;
        }
    }

    writeln!(out, "\n{}", game.board().display())?;
    let outcome = game.outcome();
    info!(%outcome, moves = moves.len(), "Script finished");
    Ok(outcome)
}
