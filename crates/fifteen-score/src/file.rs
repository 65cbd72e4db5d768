use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fifteen_core::BoardSize;
use fifteen_game::{PlayerStats, ScoreEntry, ScoreError, ScoreReporter};

use crate::ScoreBoard;

/// Errors from reading or writing a score file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SnapshotError {
    /// The file could not be read or written.
    #[display("score file I/O failed: {_0}")]
    Io(#[from] io::Error),
    /// The file is not a valid score snapshot.
    #[display("score file is malformed: {_0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreBoard {
    /// Reads a score board from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the score board to a JSON file.
    ///
    /// The data is written to a sibling file first and renamed over `path`, so a
    /// failed write leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// A [`ScoreBoard`] backed by a JSON file.
///
/// Every recorded start or score is written through immediately. A failed write is
/// reported as [`ScoreError::Storage`]; the in-memory board keeps the change.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
    board: ScoreBoard,
}

impl ScoreFile {
    /// Opens the score file at `path`, starting empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        let board = match ScoreBoard::load(&path) {
            Ok(board) => board,
            Err(SnapshotError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no score file at {}; starting fresh", path.display());
                ScoreBoard::default()
            }
            Err(e) => return Err(e),
        };
        Ok(Self { path, board })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the in-memory board.
    #[must_use]
    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    fn persist(&self) -> Result<(), ScoreError> {
        self.board.save(&self.path).map_err(|e| ScoreError::Storage {
            message: e.to_string(),
        })
    }
}

impl ScoreReporter for ScoreFile {
    fn record_game_started(&mut self, player: &str, level: BoardSize) -> Result<(), ScoreError> {
        self.board.record_game_started(player, level)?;
        self.persist()
    }

    fn submit_score(
        &mut self,
        player: &str,
        level: BoardSize,
        elapsed_ms: u64,
    ) -> Result<(), ScoreError> {
        self.board.submit_score(player, level, elapsed_ms)?;
        self.persist()
    }

    fn level_scores(&self, level: BoardSize, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError> {
        self.board.level_scores(level, limit)
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<PlayerStats>, ScoreError> {
        self.board.leaderboard(limit)
    }
}
