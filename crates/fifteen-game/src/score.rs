use fifteen_core::BoardSize;

/// Number of rows shown on a score pad or leaderboard.
pub const DEFAULT_SCORE_LIMIT: usize = 10;

/// One completion time on a level's score pad.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreEntry {
    /// Player who solved the board.
    pub player: String,
    /// Time from start to the solving move, in milliseconds.
    pub elapsed_ms: u64,
}

/// Aggregate statistics for one player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStats {
    /// Player name.
    pub player: String,
    /// Games started.
    pub games_played: u32,
    /// Games solved.
    pub games_won: u32,
    /// Largest board size solved, if any.
    pub highest_level_beaten: Option<BoardSize>,
}

impl PlayerStats {
    /// Creates empty statistics for `player`.
    #[must_use]
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            games_played: 0,
            games_won: 0,
            highest_level_beaten: None,
        }
    }
}

/// Errors reported by a [`ScoreReporter`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScoreError {
    /// Scores need a non-empty player name.
    #[display("player name must not be empty")]
    EmptyPlayerName,
    /// The backing store failed.
    #[display("score storage failed: {message}")]
    Storage {
        /// Description of the failure.
        message: String,
    },
}

/// The score-keeping collaborator of a game.
///
/// The game reports starts and completions here and reads score pads back for
/// display. Implementations may be remote; callers treat every error as
/// non-fatal.
pub trait ScoreReporter {
    /// Records that `player` started a game of size `level`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the start could not be recorded.
    fn record_game_started(&mut self, player: &str, level: BoardSize) -> Result<(), ScoreError>;

    /// Records that `player` solved a board of size `level` in `elapsed_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the score could not be recorded.
    fn submit_score(
        &mut self,
        player: &str,
        level: BoardSize,
        elapsed_ms: u64,
    ) -> Result<(), ScoreError>;

    /// Returns up to `limit` fastest times for `level`, fastest first.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the scores could not be read.
    fn level_scores(&self, level: BoardSize, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError>;

    /// Returns up to `limit` players ordered by the largest board they solved.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the statistics could not be read.
    fn leaderboard(&self, limit: usize) -> Result<Vec<PlayerStats>, ScoreError>;
}

impl<R> ScoreReporter for &mut R
where
    R: ScoreReporter + ?Sized,
{
    fn record_game_started(&mut self, player: &str, level: BoardSize) -> Result<(), ScoreError> {
        (**self).record_game_started(player, level)
    }

    fn submit_score(
        &mut self,
        player: &str,
        level: BoardSize,
        elapsed_ms: u64,
    ) -> Result<(), ScoreError> {
        (**self).submit_score(player, level, elapsed_ms)
    }

    fn level_scores(&self, level: BoardSize, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError> {
        (**self).level_scores(level, limit)
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<PlayerStats>, ScoreError> {
        (**self).leaderboard(limit)
    }
}

/// A reporter that discards everything and has no scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ScoreReporter for NullReporter {
    fn record_game_started(&mut self, _player: &str, _level: BoardSize) -> Result<(), ScoreError> {
        Ok(())
    }

    fn submit_score(
        &mut self,
        _player: &str,
        _level: BoardSize,
        _elapsed_ms: u64,
    ) -> Result<(), ScoreError> {
        Ok(())
    }

    fn level_scores(&self, _level: BoardSize, _limit: usize) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(Vec::new())
    }

    fn leaderboard(&self, _limit: usize) -> Result<Vec<PlayerStats>, ScoreError> {
        Ok(Vec::new())
    }
}
