//! Game sessions for the sliding-tile puzzle.
//!
//! This crate turns the board types of `fifteen_core` into a playable game:
//!
//! - [`PuzzleEngine`]: the board state machine (`Uninitialized → Ready → Running`),
//!   move validation, shuffling, and win detection. It never reads a clock.
//! - [`EngineEvent`]: notifications for the presentation layer, drained with
//!   [`PuzzleEngine::take_events`].
//! - [`GameSession`] and [`Elapsed`]: the wall-clock side of a game, owned by the
//!   caller.
//! - [`ScoreReporter`]: the contract for submitting completion times and reading
//!   leaderboards.
//! - [`GameController`]: wires an engine, a session, and a reporter together and
//!   reports each completed game exactly once.
//!
//! # Example
//!
//! ```
//! use fifteen_core::Tile;
//! use fifteen_game::{MoveResult, PuzzleEngine, RejectReason};
//!
//! let mut engine = PuzzleEngine::default();
//! engine.initialize(4)?;
//! assert!(engine.is_solved());
//!
//! // Moves are only accepted while a game is running.
//! assert_eq!(
//!     engine.try_move(Tile::new(15)),
//!     MoveResult::Rejected(RejectReason::NotRunning)
//! );
//!
//! engine.start_game()?;
//! assert!(!engine.is_solved());
//! # Ok::<(), fifteen_game::EngineError>(())
//! ```

pub use self::{controller::*, engine::*, error::*, event::*, score::*, session::*};

mod controller;
mod engine;
mod error;
mod event;
mod score;
mod session;
