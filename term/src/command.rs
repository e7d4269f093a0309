use std::str::FromStr;

use sweeper_core::{Coord, Location};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Location),
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type `help` for the list")]
    Unknown(String),
    #[error("Expected `reveal <column> <row>`")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected argument {0:?}")]
    TrailingInput(String),
}

pub const HELP: &str = "\
commands:
  r, reveal <column> <row>   reveal a square
  n, restart                 deal a new board
  h, help                    show this help
  q, quit                    leave the game";

fn parse_coord(word: Option<&str>) -> Result<Coord, ParseCommandError> {
    let word = word.ok_or(ParseCommandError::MissingCoords)?;
    word.parse()
        .map_err(|_| ParseCommandError::InvalidCoord(word.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                let column = parse_coord(words.next())?;
                let row = parse_coord(words.next())?;
                Command::Reveal(Location::new(column, row))
            }
            "n" | "restart" => Command::Restart,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}
