use fifteen_core::BoardError;
use fifteen_shuffle::ShuffleError;

/// Errors that can occur when driving a [`PuzzleEngine`](crate::PuzzleEngine).
///
/// Refused moves are not errors; see [`MoveResult`](crate::MoveResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EngineError {
    /// The board could not be created or queried, e.g. an invalid size or an
    /// unknown tile.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// Shuffling kept producing the solved board.
    #[display("{_0}")]
    Shuffle(#[from] ShuffleError),
    /// The operation needs a board, but `initialize` has not been called.
    #[display("the puzzle has not been initialized")]
    NotInitialized,
}
