//! Samples many shuffles and prints how scrambled they are.
//!
//! This example shows how to:
//! - Create a `Shuffler` with a custom walk length
//! - Shuffle many boards in parallel
//! - Report retry counts and the displacement of the results
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_stats
//! ```
//!
//! Choose the board size, the walk length, and the number of samples:
//!
//! ```sh
//! cargo run --example shuffle_stats -- --size 3 --steps 50 --samples 100000
//! ```
//!
//! Start from a fixed seed phrase so runs are reproducible:
//!
//! ```sh
//! cargo run --example shuffle_stats -- --phrase "benchmark run"
//! ```

use std::process;

use clap::Parser;
use fifteen_core::{Board, BoardSize};
use fifteen_shuffle::{ShuffleConfig, ShuffleSeed, Shuffler};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board edge length.
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: usize,

    /// Slides per walk.
    #[arg(long, value_name = "COUNT", default_value_t = ShuffleConfig::DEFAULT_STEPS)]
    steps: usize,

    /// Number of boards to shuffle.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    samples: usize,

    /// Seed phrase; sample `i` uses "<phrase>/<i>". Random seeds when omitted.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Stats {
    samples: usize,
    retried: usize,
    exhausted: usize,
    displacement_sum: usize,
    displacement_max: usize,
}

impl Stats {
    fn merge(self, other: Self) -> Self {
        Self {
            samples: self.samples + other.samples,
            retried: self.retried + other.retried,
            exhausted: self.exhausted + other.exhausted,
            displacement_sum: self.displacement_sum + other.displacement_sum,
            displacement_max: self.displacement_max.max(other.displacement_max),
        }
    }
}

fn main() {
    let args = Args::parse();
    let size = match BoardSize::new(args.size) {
        Ok(size) => size,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let shuffler = Shuffler::new(ShuffleConfig::default().steps(args.steps));
    let stats = (0..args.samples)
        .into_par_iter()
        .map(|i| {
            let seed = match &args.phrase {
                Some(phrase) => ShuffleSeed::from_phrase(&format!("{phrase}/{i}")),
                None => ShuffleSeed::random(),
            };
            let mut board = Board::solved(size);
            match shuffler.shuffle_with_seed(&mut board, seed) {
                Ok(report) => {
                    let displacement = board.displacement();
                    Stats {
                        samples: 1,
                        retried: usize::from(report.attempts > 1),
                        exhausted: 0,
                        displacement_sum: displacement,
                        displacement_max: displacement,
                    }
                }
                Err(_) => Stats {
                    samples: 1,
                    exhausted: 1,
                    ..Stats::default()
                },
            }
        })
        .reduce(Stats::default, Stats::merge);

    println!("Board: {size}");
    println!("Steps per walk: {}", args.steps);
    println!("Samples: {}", stats.samples);
    println!("  needed a retry: {}", stats.retried);
    println!("  exhausted: {}", stats.exhausted);
    let shuffled = stats.samples - stats.exhausted;
    if shuffled > 0 {
        #[expect(clippy::cast_precision_loss)]
        let mean = stats.displacement_sum as f64 / shuffled as f64;
        println!("Displacement:");
        println!("  mean: {mean:.2}");
        println!("  max: {}", stats.displacement_max);
    }
}
