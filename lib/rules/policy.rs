use crate::jungle::{Animal, Board, Move, Piece, Position, Species};
use crate::rules::Rejection;
use arrayvec::ArrayVec;

/// How a [`Species`] gets around the board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Movement {
    /// Whether the species may enter water.
    pub swims: bool,
    /// Whether the species may jump straight across water.
    pub leaps: bool,
    /// The species this one never captures.
    pub spares: Option<Species>,
}

impl Species {
    /// This species' [`Movement`].
    pub const fn movement(&self) -> Movement {
        const BASELINE: Movement = Movement {
            swims: false,
            leaps: false,
            spares: None,
        };

        match self {
            Species::Rat => Movement {
                swims: true,
                ..BASELINE
            },
            Species::Tiger | Species::Lion => Movement {
                leaps: true,
                ..BASELINE
            },
            Species::Elephant => Movement {
                spares: Some(Species::Rat),
                ..BASELINE
            },
            Species::Cat | Species::Dog | Species::Wolf | Species::Leopard => BASELINE,
        }
    }
}

/// Decides whether a [`Move`] is legal for a [`Piece`].
#[cfg_attr(test, mockall::automock)]
pub trait Policy {
    /// Checks a move without touching the board.
    ///
    /// On success, returns the enemy [`Animal`] that would be captured, if any.
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<Option<Animal>, Rejection>;
}

impl Policy for Movement {
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<Option<Animal>, Rejection> {
        let (whence, whither) = (m.whence(), m.whither());

        if piece.position() != whence || board.piece_at(whence) != Some(piece) {
            return Err(Rejection::Misplaced(piece.animal(), whence));
        }

        let Some(terrain) = board.terrain(whither) else {
            return Err(Rejection::OutOfBounds(whither));
        };

        let target = board.piece_at(whither);
        if target.is_some_and(|t| t.side() == piece.side()) {
            return Err(Rejection::FriendlyOccupied(whither));
        } else if !terrain.admits(piece.side()) {
            return Err(Rejection::OwnDen(piece.animal()));
        } else if terrain.is_water() && !self.swims {
            return Err(Rejection::Water(piece.animal()));
        }

        if !m.is_step() {
            let leap = self.leaps
                && m.is_straight()
                && m.between()
                    .all(|p| board.terrain(p).is_some_and(|t| t.is_water()));

            if !leap {
                return Err(Rejection::Shape(piece.animal()));
            }

            let swimmers = |p: &Position| {
                board
                    .piece_at(*p)
                    .is_some_and(|s| s.species().movement().swims)
            };

            if let Some(p) = m.between().find(swimmers) {
                return Err(Rejection::Obstructed(p));
            }
        }

        let Some(target) = target else {
            return Ok(None);
        };

        let ashore = board.terrain(whence).is_some_and(|t| t.is_water()) && !terrain.is_water();
        if self.spares == Some(target.species()) || ashore {
            return Err(Rejection::Immune(piece.animal(), target.animal()));
        }

        Ok(Some(target.animal()))
    }
}

/// Carries out a [`Move`] that a [`Policy`] has accepted.
///
/// The captured animal, if any, is taken off the board before the piece moves.
pub fn apply(board: &mut Board, piece: &Piece, m: Move, capture: Option<Animal>) -> Option<Piece> {
    let captured = capture.and_then(|a| board.remove_piece(a));
    let moved = board.move_piece(piece.animal(), m.whence(), m.whither());
    debug_assert!(moved, "expected {m} to be playable by the {}", piece.animal());
    captured
}

impl Movement {
    /// The cells a piece with this movement could possibly reach from `whence`.
    ///
    /// Candidates still need to be checked, they are merely on the board.
    pub fn reach(&self, board: &Board, whence: Position) -> ArrayVec<Position, 8> {
        let mut cells = ArrayVec::new();

        for direction in Position::DIRECTIONS {
            let step = whence.shift(direction, 1);
            let Some(terrain) = board.terrain(step) else {
                continue;
            };

            cells.push(step);

            if self.leaps && terrain.is_water() {
                let landing = (2..)
                    .map(|n| whence.shift(direction, n))
                    .find(|&p| !board.terrain(p).is_some_and(|t| t.is_water()));

                if let Some(p) = landing.filter(|&p| board.is_within_bounds(p)) {
                    cells.push(p);
                }
            }
        }

        cells
    }
}
