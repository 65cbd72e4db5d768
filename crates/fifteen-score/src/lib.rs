//! Score keeping for the sliding-tile puzzle.
//!
//! - [`ScoreBoard`]: an in-memory [`ScoreReporter`](fifteen_game::ScoreReporter) with
//!   per-level score pads and per-player statistics.
//! - [`ScoreFile`]: a [`ScoreBoard`] mirrored to a JSON file after every change.
//!
//! # Example
//!
//! ```
//! use fifteen_core::BoardSize;
//! use fifteen_game::ScoreReporter;
//! use fifteen_score::ScoreBoard;
//!
//! let mut scores = ScoreBoard::default();
//! let level = BoardSize::new(3)?;
//! scores.record_game_started("alice", level)?;
//! scores.submit_score("alice", level, 42_000)?;
//!
//! let pad = scores.level_scores(level, 10)?;
//! assert_eq!(pad[0].player, "alice");
//! assert_eq!(pad[0].elapsed_ms, 42_000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{board::*, file::*};

mod board;
mod file;
