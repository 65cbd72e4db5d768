//! Text rendering of the board, the clock, and score tables.

use std::io::{self, Write};

use fifteen_core::{Board, BoardSize};
use fifteen_game::{Elapsed, PlayerStats, ScoreEntry};

pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{board}")?;
    writeln!(out)
}

/// Writes the prompt, prefixed with the game clock.
///
/// A session that is not playing has been solved; its clock is frozen.
pub fn write_prompt(out: &mut impl Write, playing: bool, elapsed: Option<Elapsed>) -> io::Result<()> {
    match (playing, elapsed) {
        (true, Some(elapsed)) => write!(out, "[{elapsed}] > ")?,
        (false, Some(elapsed)) => write!(out, "[solved {elapsed}] > ")?,
        (_, None) => write!(out, "> ")?,
    }
    out.flush()
}

pub fn write_level_scores(
    out: &mut impl Write,
    level: BoardSize,
    scores: &[ScoreEntry],
) -> io::Result<()> {
    writeln!(out, "fastest {level} games:")?;
    if scores.is_empty() {
        return writeln!(out, "  (none yet)");
    }
    for (rank, entry) in scores.iter().enumerate() {
        let elapsed = Elapsed::from(std::time::Duration::from_millis(entry.elapsed_ms));
        writeln!(out, "  {:>2}. {:<16} {elapsed}", rank + 1, entry.player)?;
    }
    Ok(())
}

pub fn write_leaderboard(out: &mut impl Write, players: &[PlayerStats]) -> io::Result<()> {
    writeln!(out, "leaderboard:")?;
    if players.is_empty() {
        return writeln!(out, "  (no players yet)");
    }
    writeln!(out, "      {:<16} {:>7} {:>5} {:>6}", "player", "best", "won", "played")?;
    for (rank, stats) in players.iter().enumerate() {
        let best = stats
            .highest_level_beaten
            .map_or_else(|| "-".to_owned(), |level| level.to_string());
        writeln!(
            out,
            "  {:>2}. {:<16} {best:>7} {:>5} {:>6}",
            rank + 1,
            stats.player,
            stats.games_won,
            stats.games_played
        )?;
    }
    Ok(())
}
