//! The interactive play loop.

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use fifteen_core::Tile;
use fifteen_game::{GameController, MoveOutcome, RejectReason, ScoreReporter};
use fifteen_shuffle::ShuffleSeed;

use crate::{
    command::{Command, HELP},
    render,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands line by line and drives a [`GameController`].
///
/// The clock is sampled through the `now` callback on every command and every
/// prompt; nothing runs between lines.
#[derive(Debug)]
pub struct App<R> {
    controller: GameController<R>,
    pending_seed: Option<ShuffleSeed>,
}

impl<R> App<R>
where
    R: ScoreReporter,
{
    /// Creates an app. `seed`, if given, is used for the first shuffle only.
    pub fn new(controller: GameController<R>, seed: Option<ShuffleSeed>) -> Self {
        Self {
            controller,
            pending_seed: seed,
        }
    }

    pub fn controller(&self) -> &GameController<R> {
        &self.controller
    }

    /// Runs until `quit` or the end of `input`.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        mut now: impl FnMut() -> Instant,
    ) -> io::Result<()> {
        writeln!(out, "fifteen: type `start` to play, `help` for commands")?;
        self.redraw(out)?;
        self.prompt(out, now())?;

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                let flow = match line.parse::<Command>() {
                    Ok(command) => self.execute(command, out, now())?,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        Flow::Continue
                    }
                };
                if flow == Flow::Quit {
                    break;
                }
            }
            self.prompt(out, now())?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command, out: &mut impl Write, now: Instant) -> io::Result<Flow> {
        match command {
            Command::Move(tile) => self.play(tile, out, now)?,
            Command::Slide(direction) => match self.controller.engine().tile_in_direction(direction) {
                Some(tile) => self.play(tile, out, now)?,
                None => writeln!(out, "nothing can move {direction}")?,
            },
            Command::Start => {
                let seed = self.pending_seed.take().unwrap_or_else(ShuffleSeed::random);
                match self.controller.start_with_seed(seed, now) {
                    Ok(report) => {
                        self.redraw(out)?;
                        writeln!(
                            out,
                            "new {} game (seed {})",
                            self.controller.level(),
                            report.seed
                        )?;
                    }
                    Err(e) => {
                        log::warn!("failed to start a game: {e}");
                        writeln!(out, "cannot start: {e}")?;
                    }
                }
            }
            Command::Stop => {
                if self.controller.is_playing() {
                    self.controller.stop();
                    self.redraw(out)?;
                    writeln!(out, "game stopped")?;
                } else {
                    writeln!(out, "{}", RejectReason::NotRunning)?;
                }
            }
            Command::Reset => match self.controller.reset() {
                Ok(()) => self.redraw(out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Level(level) => match self.controller.change_level(level) {
                Ok(()) => self.redraw(out)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Scores => {
                let scores = self.controller.level_scores();
                render::write_level_scores(out, self.controller.level(), &scores)?;
            }
            Command::Leaderboard => {
                render::write_leaderboard(out, &self.controller.leaderboard())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self, tile: Tile, out: &mut impl Write, now: Instant) -> io::Result<()> {
        match self.controller.try_move(tile, now) {
            MoveOutcome::Moved(_) => self.redraw(out),
            MoveOutcome::Solved { completion, .. } => {
                self.redraw(out)?;
                writeln!(
                    out,
                    "solved the {} board in {}!",
                    completion.level, completion.elapsed
                )?;
                let scores = self.controller.level_scores();
                render::write_level_scores(out, completion.level, &scores)
            }
            MoveOutcome::Rejected(RejectReason::NotRunning) => {
                writeln!(out, "{}; type `start` to play", RejectReason::NotRunning)
            }
            MoveOutcome::Rejected(reason) => writeln!(out, "{reason}"),
        }
    }

    /// Drains engine events and redraws the board if it changed.
    fn redraw(&mut self, out: &mut impl Write) -> io::Result<()> {
        let events = self.controller.take_events();
        if events.iter().any(|event| event.is_board_change())
            && let Some(board) = self.controller.engine().board()
        {
            render::write_board(out, board)?;
        }
        Ok(())
    }

    fn prompt(&self, out: &mut impl Write, now: Instant) -> io::Result<()> {
        render::write_prompt(out, self.controller.is_playing(), self.controller.elapsed(now))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{HashMap, HashSet, VecDeque},
        io::Cursor,
        time::Duration,
    };

    use fifteen_core::{Board, BoardSize};
    use fifteen_score::ScoreBoard;
    use fifteen_shuffle::Shuffler;

    use super::*;

    fn app(level: usize, seed: &str) -> App<ScoreBoard> {
        let controller =
            GameController::new("tester", level, Shuffler::default(), ScoreBoard::default())
                .unwrap();
        App::new(controller, Some(ShuffleSeed::from_phrase(seed)))
    }

    fn run(app: &mut App<ScoreBoard>, input: &str) -> String {
        let t0 = Instant::now();
        let mut ticks = 0;
        let clock = move || {
            ticks += 1;
            t0 + Duration::from_secs(ticks)
        };
        let mut out = Vec::new();
        app.run(Cursor::new(input), &mut out, clock).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn solution(start: &Board) -> Vec<Tile> {
        let mut parent: HashMap<Board, (Board, Tile)> = HashMap::new();
        let mut seen = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([start.clone()]);
        while let Some(board) = queue.pop_front() {
            if board.is_solved() {
                let mut path = Vec::new();
                let mut current = board;
                while let Some((prev, tile)) = parent.get(&current) {
                    path.push(*tile);
                    current = prev.clone();
                }
                path.reverse();
                return path;
            }
            for tile in board.movable_tiles().collect::<Vec<_>>() {
                let mut next = board.clone();
                next.slide(tile).unwrap();
                if seen.insert(next.clone()) {
                    parent.insert(next.clone(), (board.clone(), tile));
                    queue.push_back(next);
                }
            }
        }
        panic!("board is not solvable");
    }

    #[test]
    fn shows_board_and_help() {
        let mut app = app(2, "help");
        let out = run(&mut app, "help\n");
        assert!(out.contains("1 2\n3 .\n"));
        assert!(out.contains("commands:"));
        assert!(out.ends_with("> "));
    }

    #[test]
    fn quit_stops_reading() {
        let mut app = app(3, "quit");
        let out = run(&mut app, "quit\nlevel 5\n");
        assert_eq!(app.controller().level(), BoardSize::new(3).unwrap());
        assert!(!out.contains("5x5"));
    }

    #[test]
    fn moves_need_a_running_game() {
        let mut app = app(3, "idle");
        let out = run(&mut app, "8\nstop\n");
        assert!(out.contains("no game is running; type `start` to play"));
        assert!(app.controller().engine().is_solved());
    }

    #[test]
    fn bad_input_is_reported() {
        let mut app = app(3, "typo");
        let out = run(&mut app, "jump\nlevel 1\nlevel\n");
        assert!(out.contains("unknown command `jump`"));
        assert!(out.contains("usage: level <size>"));
        assert_eq!(app.controller().level(), BoardSize::new(3).unwrap());
    }

    #[test]
    fn level_changes_board() {
        let mut app = app(3, "level");
        let out = run(&mut app, "level 2\n");
        assert!(out.ends_with("1 2\n3 .\n\n> "));
        assert_eq!(app.controller().level(), BoardSize::new(2).unwrap());
    }

    #[test]
    fn start_uses_the_given_seed() {
        let seed = ShuffleSeed::from_phrase("seeded");
        let mut app = app(4, "seeded");
        let out = run(&mut app, "start\n");
        assert!(out.contains(&format!("new 4x4 game (seed {seed})")));
        assert!(app.controller().is_playing());
        assert!(out.ends_with("] > "));

        let mut expected = Board::solved(BoardSize::FIFTEEN);
        Shuffler::default().shuffle_with_seed(&mut expected, seed).unwrap();
        assert_eq!(app.controller().engine().board(), Some(&expected));
    }

    #[test]
    fn solving_records_a_score() {
        let mut app = app(2, "solve me");
        run(&mut app, "start\n");
        let board = app.controller().engine().board().unwrap().clone();
        let moves = solution(&board)
            .into_iter()
            .map(|tile| format!("{}\n", tile.value()))
            .collect::<String>();

        let out = run(&mut app, &format!("{moves}scores\n"));
        assert!(out.contains("solved the 2x2 board in 0:00:"));
        assert!(out.contains("fastest 2x2 games:"));
        assert!(!app.controller().is_playing());

        let scores = app
            .controller()
            .reporter()
            .level_scores(BoardSize::new(2).unwrap(), 10)
            .unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].player, "tester");
        assert_eq!(
            app.controller().reporter().player("tester").unwrap().games_won,
            1
        );
    }

    #[test]
    fn direction_words_slide_tiles() {
        let mut app = app(3, "directions");
        run(&mut app, "start\n");
        let engine = app.controller().engine();
        let direction = fifteen_core::Direction::ALL
            .into_iter()
            .find(|&d| engine.tile_in_direction(d).is_some())
            .unwrap();
        let tile = engine.tile_in_direction(direction).unwrap();
        let before = engine.position_of(tile).unwrap();

        run(&mut app, &format!("{direction}\n"));
        let after = app.controller().engine().position_of(tile).unwrap();
        assert_eq!(before.neighbor(direction, BoardSize::new(3).unwrap()), Some(after));
    }
}
