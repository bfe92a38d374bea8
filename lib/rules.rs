use crate::jungle::{Animal, Board, Move, Piece};

mod operability;
mod policy;
mod rejection;
mod validator;

pub use policy::*;
pub use rejection::*;
pub use validator::*;

/// Plays a [`Move`] on behalf of an [`Animal`].
///
/// The animal must stand at the move's source, its operability and movement rules decide the
/// rest. On success, returns the captured [`Piece`], if any. A rejected move leaves the board
/// untouched.
pub fn play(board: &mut Board, animal: Animal, m: Move) -> Result<Option<Piece>, Rejection> {
    let piece = match board.find(animal) {
        Some(p) if p.position() == m.whence() => *p,
        _ => return Err(Rejection::Misplaced(animal, m.whence())),
    };

    let movement = animal.species().movement();
    piece.state().play(&movement, board, &piece, m)
}
