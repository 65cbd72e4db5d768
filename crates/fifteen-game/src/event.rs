use std::mem;

use fifteen_core::{BoardSize, Slide};
use fifteen_shuffle::ShuffleReport;

/// A notification emitted by the engine for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EngineEvent {
    /// The board was replaced by the solved arrangement.
    BoardReset {
        /// New board size.
        size: BoardSize,
    },
    /// The board was shuffled.
    BoardShuffled(ShuffleReport),
    /// A tile slid into the blank.
    TileMoved(Slide),
    /// The last move solved the board.
    Solved,
    /// A game started; moves are accepted from now on.
    GameStarted,
    /// The game stopped; moves are refused from now on.
    GameStopped,
}

impl EngineEvent {
    /// Returns `true` if the tile layout changed and needs to be redrawn.
    #[must_use]
    pub fn is_board_change(&self) -> bool {
        matches!(
            self,
            Self::BoardReset { .. } | Self::BoardShuffled(_) | Self::TileMoved(_)
        )
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct EventQueue {
    events: Vec<EngineEvent>,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    pub(crate) fn take_all(&mut self) -> Vec<EngineEvent> {
        mem::take(&mut self.events)
    }
}
