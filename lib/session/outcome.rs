use crate::jungle::Side;
use derive_more::Display;

/// How a jungle game ended.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display("{_0} entered the enemy den")]
    Den(Side),

    #[display("{_0} captured every enemy piece")]
    Elimination(Side),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Side {
        match *self {
            Outcome::Den(s) | Outcome::Elimination(s) => s,
        }
    }
}
