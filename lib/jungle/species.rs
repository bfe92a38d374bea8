use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The kind of a jungle [`Animal`][`crate::jungle::Animal`], ordered by rank.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, Deserialize, Serialize,
)]
#[repr(u8)]
pub enum Species {
    Rat,
    Cat,
    Dog,
    Wolf,
    Leopard,
    Tiger,
    Lion,
    Elephant,
}

impl Species {
    /// All species, from the lowest rank to the highest.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        use Species::*;
        [Rat, Cat, Dog, Wolf, Leopard, Tiger, Lion, Elephant].into_iter()
    }

    /// The rank of this species, from 1 for the [`Species::Rat`] to 8 for the [`Species::Elephant`].
    pub fn rank(&self) -> u8 {
        *self as u8 + 1
    }

    /// Other names this species is known by in command logs.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Species::Rat => &["Rato"],
            Species::Cat => &["Gato"],
            Species::Dog => &["Cão", "Cao"],
            Species::Wolf => &["Lobo"],
            Species::Leopard => &["Leopardo"],
            Species::Tiger => &["Tigre"],
            Species::Lion => &["Leão", "Leao"],
            Species::Elephant => &["Elefante"],
        }
    }

    /// The letter used to draw this species on the board.
    pub fn letter(&self) -> char {
        match self {
            Species::Rat => 'r',
            Species::Cat => 'c',
            Species::Dog => 'd',
            Species::Wolf => 'w',
            Species::Leopard => 'p',
            Species::Tiger => 't',
            Species::Lion => 'l',
            Species::Elephant => 'e',
        }
    }
}

/// The reason why parsing [`Species`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse species")]
pub struct ParseSpeciesError;

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::iter()
            .find(|species| species.to_string() == s || species.aliases().contains(&s))
            .ok_or(ParseSpeciesError)
    }
}
