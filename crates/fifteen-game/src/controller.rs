use std::time::Instant;

use fifteen_core::{BoardSize, Slide, Tile};
use fifteen_shuffle::{ShuffleReport, ShuffleSeed, Shuffler};

use crate::{
    DEFAULT_SCORE_LIMIT, Elapsed, EngineError, EngineEvent, GameSession, MoveResult, PlayerStats,
    PuzzleEngine, RejectReason, ScoreEntry, ScoreReporter,
};

/// A finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Board size that was solved.
    pub level: BoardSize,
    /// Time from start to the solving move.
    pub elapsed: Elapsed,
}

/// The outcome of [`GameController::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The tile moved; the game continues.
    Moved(Slide),
    /// The tile moved and solved the board. The game is over and the score has
    /// been submitted.
    Solved {
        /// The solving move.
        slide: Slide,
        /// The result reported to the score keeper.
        completion: Completion,
    },
    /// Nothing changed.
    Rejected(RejectReason),
}

/// Runs games for one player: engine, clock, and score reporting.
///
/// The controller is the only place that connects a solved board to the wall clock
/// and to the [`ScoreReporter`]. Each completed game is submitted exactly once;
/// reporter failures are logged and never interrupt play.
///
/// # Example
///
/// ```
/// use std::time::Instant;
///
/// use fifteen_game::{GameController, NullReporter};
/// use fifteen_shuffle::Shuffler;
///
/// let mut controller = GameController::new("alice", 3, Shuffler::default(), NullReporter)?;
/// controller.start(Instant::now())?;
/// assert!(controller.is_playing());
///
/// controller.stop();
/// assert!(!controller.is_playing());
/// # Ok::<(), fifteen_game::EngineError>(())
/// ```
#[derive(Debug)]
pub struct GameController<R> {
    engine: PuzzleEngine,
    session: Option<GameSession>,
    last_completion: Option<Completion>,
    player: String,
    reporter: R,
}

impl<R> GameController<R>
where
    R: ScoreReporter,
{
    /// Creates a controller with a solved board of size `level`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Board`] if `level` is not a valid board size.
    pub fn new(
        player: impl Into<String>,
        level: usize,
        shuffler: Shuffler,
        reporter: R,
    ) -> Result<Self, EngineError> {
        let mut engine = PuzzleEngine::new(shuffler);
        engine.initialize(level)?;
        Ok(Self {
            engine,
            session: None,
            last_completion: None,
            player: player.into(),
            reporter,
        })
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    /// Returns the current session, if a game is running or just finished.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Returns the result of the most recent completed game.
    #[must_use]
    pub fn last_completion(&self) -> Option<Completion> {
        self.last_completion
    }

    /// Returns the player name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the score reporter.
    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Returns the score reporter mutably.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Returns the current board size.
    #[must_use]
    pub fn level(&self) -> BoardSize {
        self.engine.size().unwrap_or(BoardSize::FIFTEEN)
    }

    /// Returns `true` while a game is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.engine.is_running()
    }

    /// Returns the time on the clock, if a session exists.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Option<Elapsed> {
        self.session.as_ref().map(|session| session.elapsed(now))
    }

    /// Starts a new game with a random shuffle.
    ///
    /// A running game is abandoned without being scored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Shuffle`] if the board could not be shuffled.
    pub fn start(&mut self, now: Instant) -> Result<ShuffleReport, EngineError> {
        self.start_with_seed(ShuffleSeed::random(), now)
    }

    /// Starts a new game shuffled with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Shuffle`] if the board could not be shuffled.
    pub fn start_with_seed(
        &mut self,
        seed: ShuffleSeed,
        now: Instant,
    ) -> Result<ShuffleReport, EngineError> {
        self.stop();
        let report = self.engine.start_game_with_seed(seed)?;
        let level = self.level();
        self.session = Some(GameSession::start(level, now));
        log::info!("{} started a {level} game", self.player);
        if let Err(e) = self.reporter.record_game_started(&self.player, level) {
            log::warn!("failed to record game start: {e}");
        }
        Ok(report)
    }

    /// Forwards a move to the engine and handles a win.
    ///
    /// When the move solves the board, the game ends, the clock stops, and the time
    /// is submitted to the reporter.
    pub fn try_move(&mut self, tile: Tile, now: Instant) -> MoveOutcome {
        match self.engine.try_move(tile) {
            MoveResult::Rejected(reason) => MoveOutcome::Rejected(reason),
            MoveResult::Accepted {
                slide,
                solved: false,
            } => MoveOutcome::Moved(slide),
            MoveResult::Accepted {
                slide,
                solved: true,
            } => {
                let completion = self.complete(now);
                MoveOutcome::Solved { slide, completion }
            }
        }
    }

    /// Stops the running game without scoring it. The board is left as it is.
    pub fn stop(&mut self) {
        self.engine.stop_game();
        self.session = None;
    }

    /// Stops the game and puts back the solved board of the current size.
    ///
    /// # Errors
    ///
    /// Never fails for a controller built with [`GameController::new`]; the error is
    /// propagated from [`PuzzleEngine::initialize`].
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.change_level(self.level().get())
    }

    /// Stops the game and switches to a solved board of size `level`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Board`] if `level` is not a valid board size. The
    /// current game is left untouched in that case.
    pub fn change_level(&mut self, level: usize) -> Result<(), EngineError> {
        let size = BoardSize::new(level)?;
        self.stop();
        self.engine.initialize(size.get())
    }

    /// Drains the engine's pending events.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.engine.take_events()
    }

    /// Returns the fastest times for the current level.
    ///
    /// Reporter failures are logged and yield an empty list.
    #[must_use]
    pub fn level_scores(&self) -> Vec<ScoreEntry> {
        self.reporter
            .level_scores(self.level(), DEFAULT_SCORE_LIMIT)
            .unwrap_or_else(|e| {
                log::warn!("failed to fetch level scores: {e}");
                Vec::new()
            })
    }

    /// Returns the players ordered by the largest board they solved.
    ///
    /// Reporter failures are logged and yield an empty list.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<PlayerStats> {
        self.reporter
            .leaderboard(DEFAULT_SCORE_LIMIT)
            .unwrap_or_else(|e| {
                log::warn!("failed to fetch leaderboard: {e}");
                Vec::new()
            })
    }

    fn complete(&mut self, now: Instant) -> Completion {
        self.engine.end_game();
        let level = self.level();
        let elapsed = self
            .session
            .as_mut()
            .map(|session| session.finish(now))
            .unwrap_or_default();
        let completion = Completion { level, elapsed };
        self.last_completion = Some(completion);
        log::info!("{} solved the {level} board in {elapsed}", self.player);
        if let Err(e) = self
            .reporter
            .submit_score(&self.player, level, elapsed.as_millis())
        {
            log::warn!("failed to submit score: {e}");
        }
        completion
    }
}
