//! Command-line options of the `fifteen` binary.

use std::path::PathBuf;

use clap::Parser;
use fifteen_core::BoardSize;
use fifteen_shuffle::{ShuffleConfig, ShuffleSeed, Shuffler};

/// Play the sliding-tile puzzle in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Board edge length.
    #[arg(long, value_name = "N", default_value_t = BoardSize::FIFTEEN.get())]
    pub size: usize,

    /// Seed for the first shuffle: 64 hex digits, or any phrase.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<String>,

    /// Slides per shuffle walk.
    #[arg(long, value_name = "K", default_value_t = ShuffleConfig::DEFAULT_STEPS)]
    pub steps: usize,

    /// Name recorded with your scores.
    #[arg(long, value_name = "NAME", default_value = "player")]
    pub player: String,

    /// JSON file that keeps scores between runs. Scores are kept in memory if omitted.
    #[arg(long, value_name = "PATH")]
    pub scores: Option<PathBuf>,
}

impl Args {
    /// Returns the seed given on the command line.
    ///
    /// Text that parses as a hex seed is used as is; anything else is hashed.
    #[must_use]
    pub fn shuffle_seed(&self) -> Option<ShuffleSeed> {
        self.seed
            .as_deref()
            .map(|text| text.parse().unwrap_or_else(|_| ShuffleSeed::from_phrase(text)))
    }

    #[must_use]
    pub fn shuffler(&self) -> Shuffler {
        Shuffler::new(ShuffleConfig::default().steps(self.steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["fifteen"]);
        assert_eq!(args.size, 4);
        assert_eq!(args.steps, ShuffleConfig::DEFAULT_STEPS);
        assert_eq!(args.player, "player");
        assert!(args.shuffle_seed().is_none());
        assert!(args.scores.is_none());
    }

    #[test]
    fn seed_accepts_hex_or_phrase() {
        let seed = ShuffleSeed::from_phrase("x");
        let hex = Args::parse_from(["fifteen", "--seed", &seed.to_string()]);
        assert_eq!(hex.shuffle_seed(), Some(seed));

        let phrase = Args::parse_from(["fifteen", "--seed", "x"]);
        assert_eq!(phrase.shuffle_seed(), Some(seed));
    }

    #[test]
    fn steps_configure_shuffler() {
        let args = Args::parse_from(["fifteen", "--size", "3", "--steps", "50"]);
        assert_eq!(args.size, 3);
        assert_eq!(args.shuffler().config().get_steps(), 50);
    }
}
