//! Parsing of typed commands.

use std::str::FromStr;

use fifteen_core::{Direction, Tile};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    /// Slide the numbered tile into the blank.
    Move(Tile),
    /// Slide whichever tile can travel in this direction.
    Slide(Direction),
    Start,
    Stop,
    /// Put back the solved board of the current size.
    Reset,
    /// Switch to a board of this size.
    Level(usize),
    Scores,
    Leaderboard,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandParseError {
    #[display("unknown command `{input}`; type `help` for a list")]
    Unknown { input: String },
    #[display("`{input}` is not a tile number")]
    InvalidTile { input: String },
    #[display("usage: level <size>")]
    MissingLevel,
    #[display("`{input}` is not a board size")]
    InvalidLevel { input: String },
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let mut words = s.split_whitespace();
        let head = words.next().unwrap_or_default();

        let command = match head {
            "up" | "w" => Self::Slide(Direction::Up),
            "down" | "s" => Self::Slide(Direction::Down),
            "left" | "a" => Self::Slide(Direction::Left),
            "right" | "d" => Self::Slide(Direction::Right),
            "start" | "new" => Self::Start,
            "stop" => Self::Stop,
            "reset" => Self::Reset,
            "level" | "size" => {
                let arg = words.next().ok_or(CommandParseError::MissingLevel)?;
                let level = arg.parse().map_err(|_| CommandParseError::InvalidLevel {
                    input: arg.to_owned(),
                })?;
                Self::Level(level)
            }
            "scores" => Self::Scores,
            "leaderboard" | "top" => Self::Leaderboard,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ if head.starts_with(|c: char| c.is_ascii_digit()) => {
                let value = head.parse().map_err(|_| CommandParseError::InvalidTile {
                    input: head.to_owned(),
                })?;
                Self::Move(Tile::new(value))
            }
            _ => {
                return Err(CommandParseError::Unknown {
                    input: s.clone(),
                });
            }
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
commands:
  <number>              slide that tile into the blank
  up, down, left, right slide the tile that can travel that way (also w, s, a, d)
  start                 shuffle and start a new game
  stop                  stop the clock; the board stays as it is
  reset                 put back the solved board
  level <size>          switch to a <size>x<size> board
  scores                fastest times for the current size
  leaderboard           players by the largest board they solved
  help                  show this message
  quit                  leave the game";
