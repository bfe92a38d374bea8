use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{ops::Not, str::FromStr};
use test_strategy::Arbitrary;

/// One of the two competing players.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, Deserialize, Serialize,
)]
#[repr(u8)]
pub enum Side {
    #[display("WHITE")]
    White,
    #[display("BLACK")]
    Black,
}

impl Side {
    /// Both sides, White first.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        [Side::White, Side::Black].into_iter()
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// The reason why parsing [`Side`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse side, expected `WHITE` or `BLACK`")]
pub struct ParseSideError;

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHITE" => Ok(Side::White),
            "BLACK" => Ok(Side::Black),
            _ => Err(ParseSideError),
        }
    }
}
