use crate::jungle::{Animal, Board, Move, ParseSideError, ParseSpeciesError, Piece, Position, Side};
use crate::rules::{self, Rejection};
use derive_more::{Constructor, Display, Error, From};
use std::{fmt, num::ParseIntError, str::FromStr};

mod history;
mod log;

pub use history::*;
pub use log::*;

/// A request by an [`Animal`] to play a [`Move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
pub struct Command {
    animal: Animal,
    m: Move,
}

impl Command {
    /// The tag that opens every serialized command.
    pub const TAG: &'static str = "MoverPecaCommand";

    /// The [`Animal`] that moves.
    #[inline(always)]
    pub fn animal(&self) -> Animal {
        self.animal
    }

    /// The [`Side`] issuing this command.
    #[inline(always)]
    pub fn side(&self) -> Side {
        self.animal.side()
    }

    /// The [`Move`] requested.
    #[inline(always)]
    pub fn r#move(&self) -> Move {
        self.m
    }

    /// Plays this command on the board.
    ///
    /// On success, returns the captured [`Piece`], if any.
    pub fn execute(&self, board: &mut Board) -> Result<Option<Piece>, Rejection> {
        rules::play(board, self.animal, self.m)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (self.m.whence(), self.m.whither());
        write!(
            f,
            "{};{};{};{};{};{};{}",
            Self::TAG,
            self.animal.species(),
            self.animal.side(),
            a.row(),
            a.col(),
            b.row(),
            b.col()
        )
    }
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCommandError {
    #[display("expected `MoverPecaCommand` followed by six `;`-separated fields")]
    #[from(ignore)]
    Malformed,
    Species(ParseSpeciesError),
    Side(ParseSideError),
    Coordinate(ParseIntError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.trim().split(';').collect();

        let [tag, species, side, r0, c0, r1, c1] = fields[..] else {
            return Err(ParseCommandError::Malformed);
        };

        if tag != Self::TAG {
            return Err(ParseCommandError::Malformed);
        }

        let animal = Animal(species.parse()?, side.parse()?);
        let whence = Position::new(r0.parse()?, c0.parse()?);
        let whither = Position::new(r1.parse()?, c1.parse()?);

        Ok(Command::new(animal, Move(whence, whither)))
    }
}
