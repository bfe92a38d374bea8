use crate::jungle::Side;
use crate::rules::Rejection;
use derive_more::Display;

/// Keeps track of which [`Side`] is to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0} to move")]
pub struct Turn(Side);

impl Default for Turn {
    fn default() -> Self {
        Turn(Side::White)
    }
}

impl Turn {
    /// The side to move.
    #[inline(always)]
    pub fn side(&self) -> Side {
        self.0
    }

    /// Rejects requests by the side not to move.
    pub fn check(&self, side: Side) -> Result<(), Rejection> {
        if side == self.0 {
            Ok(())
        } else {
            Err(Rejection::NotYourTurn(side))
        }
    }

    /// Hands the turn to the opponent.
    pub fn advance(&mut self) {
        self.0 = !self.0;
    }

    /// Hands the turn to a specific side.
    pub fn set(&mut self, side: Side) {
        self.0 = side;
    }
}
