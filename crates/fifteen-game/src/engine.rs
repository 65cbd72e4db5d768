use fifteen_core::{Board, BoardSize, Direction, Position, Slide, SlideError, Tile};
use fifteen_shuffle::{ShuffleReport, ShuffleSeed, Shuffler};

use crate::{EngineError, EngineEvent, event::EventQueue};

/// Lifecycle of a [`PuzzleEngine`].
///
/// ```text
/// Uninitialized --initialize--> Ready --start_game--> Running --end_game--> Ready
/// ```
///
/// Only `Running` accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EngineState {
    /// No board yet.
    Uninitialized,
    /// A board exists but moves are refused.
    Ready,
    /// A game is in progress.
    Running,
}

/// Why [`PuzzleEngine::try_move`] refused a move.
///
/// These are ordinary outcomes of user input; a front end can simply ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum RejectReason {
    /// No game is running.
    #[display("no game is running")]
    NotRunning,
    /// The blank itself was selected.
    #[display("the blank cannot be moved")]
    IsBlank,
    /// The tile does not share an edge with the blank.
    #[display("that tile is not next to the blank")]
    NotAdjacent,
    /// The identifier does not name a tile on this board.
    #[display("there is no such tile")]
    UnknownTile,
}

impl From<SlideError> for RejectReason {
    fn from(error: SlideError) -> Self {
        match error {
            SlideError::UnknownTile { .. } => Self::UnknownTile,
            SlideError::IsBlank => Self::IsBlank,
            SlideError::NotAdjacent { .. } => Self::NotAdjacent,
        }
    }
}

/// The outcome of [`PuzzleEngine::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveResult {
    /// The tile slid into the blank.
    Accepted {
        /// What moved where.
        slide: Slide,
        /// Whether this move solved the board.
        solved: bool,
    },
    /// The board was left unchanged.
    Rejected(RejectReason),
}

impl MoveResult {
    /// Returns `true` if the move was accepted and solved the board.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Accepted { solved: true, .. })
    }
}

/// The sliding-tile puzzle state machine.
///
/// Owns one board, the running flag, and the shuffler. Every operation runs to
/// completion synchronously; the engine has no notion of time. Changes are reported
/// through [`EngineEvent`]s, which the caller drains with
/// [`PuzzleEngine::take_events`].
///
/// # Example
///
/// ```
/// use fifteen_core::Tile;
/// use fifteen_game::{MoveResult, PuzzleEngine};
///
/// let mut engine = PuzzleEngine::default();
/// engine.initialize(3)?;
/// engine.start_game()?;
///
/// // Slide some tile next to the blank, then slide it back.
/// let tile = engine.movable_tiles()[0];
/// let before = engine.board().unwrap().clone();
/// assert!(engine.try_move(tile).is_accepted());
/// assert!(engine.try_move(tile).is_accepted());
/// assert_eq!(engine.board(), Some(&before));
/// # Ok::<(), fifteen_game::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    board: Option<Board>,
    state: EngineState,
    shuffler: Shuffler,
    events: EventQueue,
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new(Shuffler::default())
    }
}

impl PuzzleEngine {
    /// Creates an uninitialized engine that shuffles with `shuffler`.
    #[must_use]
    pub fn new(shuffler: Shuffler) -> Self {
        Self {
            board: None,
            state: EngineState::Uninitialized,
            shuffler,
            events: EventQueue::default(),
        }
    }

    /// Resets to the solved board of size `size`.
    ///
    /// A running game is stopped. Emits [`EngineEvent::BoardReset`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Board`] with
    /// [`BoardError::InvalidSize`](fifteen_core::BoardError::InvalidSize) if `size`
    /// is below 2 or too large. The engine is unchanged in that case.
    pub fn initialize(&mut self, size: usize) -> Result<(), EngineError> {
        let size = BoardSize::new(size)?;
        self.board = Some(Board::solved(size));
        self.state = EngineState::Ready;
        log::info!("initialized {size} board");
        self.events.push(EngineEvent::BoardReset { size });
        Ok(())
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns `true` while moves are accepted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Returns the board, or `None` before [`PuzzleEngine::initialize`].
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Returns the board size, or `None` before [`PuzzleEngine::initialize`].
    #[must_use]
    pub fn size(&self) -> Option<BoardSize> {
        self.board.as_ref().map(Board::size)
    }

    /// Returns the shuffler used by [`PuzzleEngine::shuffle`].
    #[must_use]
    pub fn shuffler(&self) -> &Shuffler {
        &self.shuffler
    }

    /// Returns the position of `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before [`PuzzleEngine::initialize`], and
    /// [`EngineError::Board`] if `tile` is not on the board.
    pub fn position_of(&self, tile: Tile) -> Result<Position, EngineError> {
        Ok(self.require_board()?.position_of(tile)?)
    }

    /// Returns `true` if `tile` shares an edge with the blank.
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleEngine::position_of`].
    pub fn is_adjacent_to_blank(&self, tile: Tile) -> Result<bool, EngineError> {
        Ok(self.require_board()?.is_adjacent_to_blank(tile)?)
    }

    /// Returns the tiles that can currently slide into the blank.
    ///
    /// Empty before [`PuzzleEngine::initialize`].
    #[must_use]
    pub fn movable_tiles(&self) -> Vec<Tile> {
        self.board
            .as_ref()
            .map(|board| board.movable_tiles().collect())
            .unwrap_or_default()
    }

    /// Returns the tile that would travel in `direction` into the blank.
    #[must_use]
    pub fn tile_in_direction(&self, direction: Direction) -> Option<Tile> {
        self.board.as_ref()?.tile_in_direction(direction)
    }

    /// Returns `true` if the board is in the solved arrangement.
    ///
    /// Always `false` before [`PuzzleEngine::initialize`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_solved)
    }

    /// Attempts to slide `tile` into the blank.
    ///
    /// Checks, in order: a game is running, `tile` is not the blank, `tile` exists,
    /// and `tile` is adjacent to the blank. A refused move leaves the board untouched.
    /// An accepted move emits [`EngineEvent::TileMoved`] and, if it solved the board,
    /// [`EngineEvent::Solved`].
    ///
    /// The engine keeps running after a solving move; the caller decides when to
    /// call [`PuzzleEngine::end_game`].
    pub fn try_move(&mut self, tile: Tile) -> MoveResult {
        if !self.state.is_running() {
            return MoveResult::Rejected(RejectReason::NotRunning);
        }
        let Some(board) = self.board.as_mut() else {
            return MoveResult::Rejected(RejectReason::NotRunning);
        };

        match board.slide(tile) {
            Ok(slide) => {
                let solved = board.is_solved();
                log::debug!("tile {} moved {} -> {}", slide.tile, slide.from, slide.to);
                self.events.push(EngineEvent::TileMoved(slide));
                if solved {
                    log::info!("board solved");
                    self.events.push(EngineEvent::Solved);
                }
                MoveResult::Accepted { slide, solved }
            }
            Err(e) => MoveResult::Rejected(e.into()),
        }
    }

    /// Shuffles the board with a fresh random seed.
    ///
    /// Emits [`EngineEvent::BoardShuffled`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before [`PuzzleEngine::initialize`], and
    /// [`EngineError::Shuffle`] if the shuffler could not leave the board unsolved.
    pub fn shuffle(&mut self) -> Result<ShuffleReport, EngineError> {
        self.shuffle_with_seed(ShuffleSeed::random())
    }

    /// Shuffles the board using `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleEngine::shuffle`].
    pub fn shuffle_with_seed(&mut self, seed: ShuffleSeed) -> Result<ShuffleReport, EngineError> {
        let board = self.board.as_mut().ok_or(EngineError::NotInitialized)?;
        let report = self.shuffler.shuffle_with_seed(board, seed)?;
        self.events.push(EngineEvent::BoardShuffled(report));
        Ok(report)
    }

    /// Starts a game, shuffling first if the board is solved.
    ///
    /// Emits [`EngineEvent::GameStarted`].
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleEngine::shuffle`]. The engine does not start on error.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        if self.require_board()?.is_solved() {
            self.shuffle()?;
        }
        self.mark_running()
    }

    /// Starts a game after shuffling with `seed`, whether or not the board is solved.
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleEngine::shuffle`]. The engine does not start on error.
    pub fn start_game_with_seed(&mut self, seed: ShuffleSeed) -> Result<ShuffleReport, EngineError> {
        let report = self.shuffle_with_seed(seed)?;
        self.mark_running()?;
        Ok(report)
    }

    /// Stops the running game. The board is left as it is.
    ///
    /// Emits [`EngineEvent::GameStopped`] if a game was running.
    pub fn end_game(&mut self) {
        if self.state.is_running() {
            self.state = EngineState::Ready;
            log::info!("game stopped");
            self.events.push(EngineEvent::GameStopped);
        }
    }

    /// Alias of [`PuzzleEngine::end_game`] for a user-initiated stop.
    pub fn stop_game(&mut self) {
        self.end_game();
    }

    /// Drains the pending events, oldest first.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.take_all()
    }

    fn require_board(&self) -> Result<&Board, EngineError> {
        self.board.as_ref().ok_or(EngineError::NotInitialized)
    }

    fn mark_running(&mut self) -> Result<(), EngineError> {
        self.require_board()?;
        if !self.state.is_running() {
            self.state = EngineState::Running;
            log::info!("game started");
            self.events.push(EngineEvent::GameStarted);
        }
        Ok(())
    }

    #[cfg(test)]
    fn with_board(board: Board) -> Self {
        Self {
            board: Some(board),
            state: EngineState::Ready,
            shuffler: Shuffler::default(),
            events: EventQueue::default(),
        }
    }
}
