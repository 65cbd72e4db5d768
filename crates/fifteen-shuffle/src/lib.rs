//! Reproducible shuffling for sliding-tile boards.
//!
//! A board is shuffled by a random walk of the blank: at every step one of the tiles
//! adjacent to the blank is chosen uniformly and slid into it. Because only legal
//! slides are performed, the result is always reachable from the solved board. A
//! random permutation would instead be unsolvable half of the time.
//!
//! The walk is driven by a PCG generator seeded from a [`ShuffleSeed`], so the same
//! seed and configuration always produce the same board.
//!
//! # Examples
//!
//! ```
//! use fifteen_core::{Board, BoardSize};
//! use fifteen_shuffle::{ShuffleConfig, ShuffleSeed, Shuffler};
//!
//! let shuffler = Shuffler::new(ShuffleConfig::default());
//! let seed = ShuffleSeed::from_phrase("fifteen");
//!
//! let mut a = Board::solved(BoardSize::FIFTEEN);
//! let mut b = Board::solved(BoardSize::FIFTEEN);
//! shuffler.shuffle_with_seed(&mut a, seed)?;
//! shuffler.shuffle_with_seed(&mut b, seed)?;
//!
//! assert_eq!(a, b);
//! assert!(!a.is_solved());
//! assert!(a.is_solvable());
//! # Ok::<(), fifteen_shuffle::ShuffleError>(())
//! ```

pub use self::{seed::*, shuffler::*};

mod seed;
mod shuffler;
