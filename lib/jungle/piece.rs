use crate::jungle::{Position, Side, Species};
use derive_more::{Constructor, Deref, Display};
use serde::{Deserialize, Serialize};
use test_strategy::Arbitrary;

/// A jungle [`Species`] of a certain [`Side`].
///
/// Each side fields at most one animal of each species, so an animal identifies a piece.
#[derive(
    Debug,
    Display,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Constructor,
    Arbitrary,
    Deserialize,
    Serialize,
)]
#[display("{_1} {_0}")]
pub struct Animal(pub Species, pub Side);

impl Animal {
    /// This animal's [`Species`].
    #[inline(always)]
    pub fn species(&self) -> Species {
        self.0
    }

    /// This animal's [`Side`].
    #[inline(always)]
    pub fn side(&self) -> Side {
        self.1
    }

    /// The letter used to draw this animal, upper case for White and lower case for Black.
    pub fn letter(&self) -> char {
        match self.side() {
            Side::White => self.species().letter().to_ascii_uppercase(),
            Side::Black => self.species().letter(),
        }
    }
}

/// Whether a piece answers to move requests.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum State {
    #[default]
    #[display("normal")]
    Normal,
    #[display("blocked")]
    Blocked,
}

/// An [`Animal`] standing on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deref)]
#[display("{animal} at {position}")]
pub struct Piece {
    #[deref]
    animal: Animal,
    position: Position,
    state: State,
}

impl Piece {
    /// Constructs a [`State::Normal`] piece.
    pub fn new(animal: Animal, position: Position) -> Self {
        Piece {
            animal,
            position,
            state: State::Normal,
        }
    }

    /// The [`Animal`] this piece represents.
    #[inline(always)]
    pub fn animal(&self) -> Animal {
        self.animal
    }

    /// Where this piece stands.
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// This piece's operability.
    #[inline(always)]
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether this piece refuses every move.
    #[inline(always)]
    pub fn is_blocked(&self) -> bool {
        self.state == State::Blocked
    }

    /// This piece with its operability replaced.
    #[inline(always)]
    pub fn with_state(self, state: State) -> Self {
        Piece { state, ..self }
    }

    #[inline(always)]
    pub(crate) fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    #[inline(always)]
    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }
}
