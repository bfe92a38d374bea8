use crate::jungle::{Board, Move, Piece, State};
use crate::rules::{apply, Policy, Rejection};

impl State {
    /// Plays a [`Move`] if this state allows the piece to move at all.
    ///
    /// A [`State::Blocked`] piece is rejected without consulting the [`Policy`].
    pub fn play<P: Policy + ?Sized>(
        self,
        policy: &P,
        board: &mut Board,
        piece: &Piece,
        m: Move,
    ) -> Result<Option<Piece>, Rejection> {
        match self {
            State::Blocked => Err(Rejection::Blocked(piece.animal())),
            State::Normal => {
                let capture = policy.check(board, piece, m)?;
                Ok(apply(board, piece, m, capture))
            }
        }
    }
}
