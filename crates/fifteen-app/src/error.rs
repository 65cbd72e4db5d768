use std::io;

use fifteen_game::EngineError;
use fifteen_score::SnapshotError;

/// Errors that end the `fifteen` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("{_0}")]
    Engine(#[from] EngineError),
    #[display("{_0}")]
    Scores(#[from] SnapshotError),
    #[display("terminal I/O failed: {_0}")]
    Io(#[from] io::Error),
}
