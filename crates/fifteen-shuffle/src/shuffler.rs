use fifteen_core::{Board, Tile};
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;

use crate::ShuffleSeed;

/// Errors raised by [`Shuffler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShuffleError {
    /// Every attempt ended on the solved board.
    ///
    /// This points at a configuration problem, such as a walk with zero steps.
    #[display("shuffle left the board solved after {attempts} attempt(s)")]
    Exhausted {
        /// Number of walks performed.
        attempts: usize,
    },
}

/// Tuning for the blank's random walk.
///
/// # Examples
///
/// ```
/// use fifteen_shuffle::ShuffleConfig;
///
/// let config = ShuffleConfig::default().steps(200).max_attempts(4);
/// assert_eq!(config.get_steps(), 200);
/// assert_eq!(config.get_max_attempts(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleConfig {
    steps: usize,
    max_attempts: usize,
}

impl ShuffleConfig {
    /// Default number of slides per walk.
    pub const DEFAULT_STEPS: usize = 1000;

    /// Default number of walks before giving up.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 32;

    /// Sets the number of slides per walk.
    #[must_use]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the number of walks tried before reporting [`ShuffleError::Exhausted`].
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the number of slides per walk.
    #[must_use]
    pub fn get_steps(&self) -> usize {
        self.steps
    }

    /// Returns the maximum number of walks.
    #[must_use]
    pub fn get_max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Summary of a successful shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleReport {
    /// Seed that reproduces this shuffle.
    pub seed: ShuffleSeed,
    /// Number of walks performed (at least 1).
    pub attempts: usize,
}

/// Shuffles boards by walking the blank through legal slides.
#[derive(Debug, Clone, Default)]
pub struct Shuffler {
    config: ShuffleConfig,
}

impl Shuffler {
    /// Creates a shuffler with the given configuration.
    #[must_use]
    pub fn new(config: ShuffleConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ShuffleConfig {
        &self.config
    }

    /// Shuffles `board` in place with a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::Exhausted`] if every walk ended on the solved board.
    pub fn shuffle(&self, board: &mut Board) -> Result<ShuffleReport, ShuffleError> {
        self.shuffle_with_seed(board, ShuffleSeed::random())
    }

    /// Shuffles `board` in place using `seed`.
    ///
    /// Performs up to `max_attempts` walks of `steps` slides each, stopping at the
    /// first walk that leaves the board unsolved. Each walk continues from where the
    /// previous one stopped, and a single generator drives all of them, so `seed`
    /// determines the result.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::Exhausted`] if every walk ended on the solved board.
    /// The board is still a legal arrangement in that case.
    pub fn shuffle_with_seed(
        &self,
        board: &mut Board,
        seed: ShuffleSeed,
    ) -> Result<ShuffleReport, ShuffleError> {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());

        for attempt in 1..=self.config.max_attempts {
            random_walk(board, self.config.steps, &mut rng);
            if !board.is_solved() {
                log::debug!(
                    "shuffled {} board in {attempt} attempt(s), seed {seed}",
                    board.size()
                );
                return Ok(ShuffleReport {
                    seed,
                    attempts: attempt,
                });
            }
            log::debug!("walk {attempt} ended solved, retrying");
        }

        Err(ShuffleError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }
}

fn random_walk(board: &mut Board, steps: usize, rng: &mut Pcg64) {
    let mut movable: Vec<Tile> = Vec::with_capacity(4);
    for _ in 0..steps {
        movable.clear();
        movable.extend(board.movable_tiles());
        let Some(&tile) = movable.choose(rng) else {
            return;
        };
        let slid = board.slide(tile);
        debug_assert!(slid.is_ok(), "tiles next to the blank are always movable");
    }
}

#[cfg(test)]
mod tests {
    use fifteen_core::BoardSize;
    use proptest::prelude::*;

    use super::*;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_shuffle_never_returns_solved_fifteen() {
        let shuffler = Shuffler::default();
        for _ in 0..1000 {
            let mut board = Board::solved(size(4));
            let report = shuffler.shuffle(&mut board).unwrap();
            assert!(!board.is_solved());
            assert!(board.is_solvable());
            assert!(report.attempts >= 1);
        }
    }

    #[test]
    fn test_shuffle_two_by_two() {
        let shuffler = Shuffler::default();
        for i in 0..200 {
            let mut board = Board::solved(size(2));
            shuffler
                .shuffle_with_seed(&mut board, ShuffleSeed::from_phrase(&i.to_string()))
                .unwrap();
            assert!(!board.is_solved());
            assert!(board.is_solvable());
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let shuffler = Shuffler::new(ShuffleConfig::default().steps(300));
        let seed = ShuffleSeed::from_phrase("reproducible");
        let mut a = Board::solved(size(5));
        let mut b = Board::solved(size(5));
        let report_a = shuffler.shuffle_with_seed(&mut a, seed).unwrap();
        let report_b = shuffler.shuffle_with_seed(&mut b, seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(report_a, report_b);
        assert_eq!(report_a.seed, seed);
    }

    #[test]
    fn test_zero_steps_exhausts() {
        let shuffler = Shuffler::new(ShuffleConfig::default().steps(0).max_attempts(3));
        let mut board = Board::solved(size(3));
        assert_eq!(
            shuffler.shuffle(&mut board),
            Err(ShuffleError::Exhausted { attempts: 3 })
        );
        assert!(board.is_solved());
    }

    #[test]
    fn test_zero_attempts_exhausts_without_touching_board() {
        let shuffler = Shuffler::new(ShuffleConfig::default().max_attempts(0));
        let mut board = Board::solved(size(4));
        assert_eq!(
            shuffler.shuffle(&mut board),
            Err(ShuffleError::Exhausted { attempts: 0 })
        );
        assert!(board.is_solved());
    }

    proptest! {
        #[test]
        fn prop_shuffled_boards_are_solvable(n in 2usize..=11, bytes in any::<[u8; 32]>()) {
            let shuffler = Shuffler::new(ShuffleConfig::default().steps(200));
            let mut board = Board::solved(BoardSize::new(n).unwrap());
            shuffler
                .shuffle_with_seed(&mut board, ShuffleSeed::from_bytes(bytes))
                .unwrap();
            prop_assert!(!board.is_solved());
            prop_assert!(board.is_solvable());
        }
    }
}
