use crate::jungle::{Animal, Position, Side};
use derive_more::{Display, Error};

/// The reason why a move was refused.
///
/// A refused move never changes the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Rejection {
    #[display("{_0} is outside the board")]
    OutOfBounds(#[error(not(source))] Position),

    #[display("the {_0} may not enter its own den")]
    OwnDen(#[error(not(source))] Animal),

    #[display("{_0} is held by a friendly piece")]
    FriendlyOccupied(#[error(not(source))] Position),

    #[display("the {_0} cannot swim")]
    Water(#[error(not(source))] Animal),

    #[display("the {_0} cannot move like that")]
    Shape(#[error(not(source))] Animal),

    #[display("the jump is obstructed at {_0}")]
    Obstructed(#[error(not(source))] Position),

    #[display("the {_1} cannot be captured by the {_0}")]
    Immune(Animal, Animal),

    #[display("the {_1} outranks the {_0}")]
    Outranked(Animal, Animal),

    #[display("the {_0} is blocked")]
    Blocked(#[error(not(source))] Animal),

    #[display("it is not {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Side),

    #[display("there is no piece at {_0}")]
    Vacant(#[error(not(source))] Position),

    #[display("the {_0} is not at {_1}")]
    Misplaced(Animal, Position),

    #[display("the game is over")]
    GameOver,
}
