//! Terminal sliding-tile puzzle.
//!
//! This is the entry point of the `fifteen` binary.

use std::{io, process::ExitCode, time::Instant};

use clap::Parser as _;
use fifteen_app::{app::App, cli::Args, error::AppError};
use fifteen_game::{GameController, ScoreReporter};
use fifteen_score::{ScoreBoard, ScoreFile};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let mut memory;
    let mut file;
    let reporter: &mut dyn ScoreReporter = match &args.scores {
        Some(path) => {
            file = ScoreFile::open(path.clone())?;
            log::info!("keeping scores in {}", file.path().display());
            &mut file
        }
        None => {
            memory = ScoreBoard::default();
            &mut memory
        }
    };

    let controller =
        GameController::new(args.player.clone(), args.size, args.shuffler(), reporter)?;
    let mut app = App::new(controller, args.shuffle_seed());
    app.run(io::stdin().lock(), &mut io::stdout().lock(), Instant::now)?;
    Ok(())
}
