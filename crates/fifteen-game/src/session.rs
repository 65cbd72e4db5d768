use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use fifteen_core::BoardSize;

/// Time spent on a game.
///
/// Displays as `h:mm:ss`, the format of the game timer.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use fifteen_game::Elapsed;
///
/// let elapsed = Elapsed::from(Duration::from_millis(3_725_400));
/// assert_eq!(elapsed.to_string(), "1:02:05");
/// assert_eq!(elapsed.as_millis(), 3_725_400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed(Duration);

impl Elapsed {
    /// Returns the underlying duration.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }

    /// Returns whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(f, "{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
    }
}

/// The wall-clock side of one game.
///
/// Created when a game starts and finished when it is solved. The caller supplies
/// every timestamp, so nothing keeps ticking once the session is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    level: BoardSize,
    started_at: Instant,
    finished: Option<Elapsed>,
}

impl GameSession {
    /// Starts a session for a game of size `level` at `now`.
    #[must_use]
    pub fn start(level: BoardSize, now: Instant) -> Self {
        Self {
            level,
            started_at: now,
            finished: None,
        }
    }

    /// Returns the board size of this game.
    #[must_use]
    pub fn level(&self) -> BoardSize {
        self.level
    }

    /// Returns `true` until [`GameSession::finish`] is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.finished.is_none()
    }

    /// Returns the time spent so far, or the final time once finished.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Elapsed {
        self.finished
            .unwrap_or_else(|| Elapsed(now.saturating_duration_since(self.started_at)))
    }

    /// Freezes the clock at `now` and returns the final time.
    ///
    /// Later calls return the time frozen by the first call.
    pub fn finish(&mut self, now: Instant) -> Elapsed {
        *self.finished.get_or_insert(Elapsed(
            now.saturating_duration_since(self.started_at),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_format() {
        assert_eq!(Elapsed::default().to_string(), "0:00:00");
        assert_eq!(Elapsed::from(Duration::from_secs(59)).to_string(), "0:00:59");
        assert_eq!(Elapsed::from(Duration::from_secs(61)).to_string(), "0:01:01");
        assert_eq!(Elapsed::from(Duration::from_secs(36_000)).to_string(), "10:00:00");
        assert_eq!(Elapsed::from(Duration::from_millis(1_999)).as_millis(), 1_999);
    }

    #[test]
    fn test_session_clock() {
        let t0 = Instant::now();
        let mut session = GameSession::start(BoardSize::FIFTEEN, t0);
        assert!(session.is_running());
        assert_eq!(session.level(), BoardSize::FIFTEEN);
        assert_eq!(
            session.elapsed(t0 + Duration::from_secs(5)).duration(),
            Duration::from_secs(5)
        );

        let finished = session.finish(t0 + Duration::from_secs(7));
        assert_eq!(finished.duration(), Duration::from_secs(7));
        assert!(!session.is_running());

        // The clock stays frozen.
        assert_eq!(session.elapsed(t0 + Duration::from_secs(60)), finished);
        assert_eq!(session.finish(t0 + Duration::from_secs(90)), finished);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let t0 = Instant::now();
        let session = GameSession::start(BoardSize::FIFTEEN, t0 + Duration::from_secs(1));
        assert_eq!(session.elapsed(t0), Elapsed::default());
    }
}
