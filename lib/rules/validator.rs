use crate::jungle::{Board, Move, Piece, Species};
use crate::rules::Rejection;
use std::fmt::{self, Debug};

/// One link of a [`Chain`].
#[cfg_attr(test, mockall::automock)]
pub trait Validator {
    /// Checks a move without touching the board.
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<(), Rejection>;
}

/// Rejects destinations outside the board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bounds;

impl Validator for Bounds {
    fn check(&self, board: &Board, _: &Piece, m: Move) -> Result<(), Rejection> {
        if board.is_within_bounds(m.whither()) {
            Ok(())
        } else {
            Err(Rejection::OutOfBounds(m.whither()))
        }
    }
}

/// Rejects moves into the mover's own den.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DenEntry;

impl Validator for DenEntry {
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<(), Rejection> {
        match board.terrain(m.whither()) {
            Some(t) if !t.admits(piece.side()) => Err(Rejection::OwnDen(piece.animal())),
            _ => Ok(()),
        }
    }
}

/// Rejects moves onto a friendly piece.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Capture;

impl Validator for Capture {
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<(), Rejection> {
        match board.piece_at(m.whither()) {
            Some(t) if t.side() == piece.side() => Err(Rejection::FriendlyOccupied(m.whither())),
            _ => Ok(()),
        }
    }
}

/// Rejects captures of higher ranking animals.
///
/// The rat may still capture the elephant and any animal caught in one of the
/// attacker's traps may be captured regardless of its rank.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rank;

impl Validator for Rank {
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<(), Rejection> {
        let Some(target) = board.piece_at(m.whither()) else {
            return Ok(());
        };

        if target.side() == piece.side() || piece.species().rank() >= target.species().rank() {
            return Ok(());
        }

        let trapped = board
            .terrain(m.whither())
            .is_some_and(|t| t.exposes(target.side()));

        match (piece.species(), target.species()) {
            _ if trapped => Ok(()),
            (Species::Rat, Species::Elephant) => Ok(()),
            _ => Err(Rejection::Outranked(piece.animal(), target.animal())),
        }
    }
}

/// An ordered sequence of [`Validator`]s.
///
/// A move passes the chain only if it passes every link, in order.
pub struct Chain {
    links: Vec<Box<dyn Validator>>,
}

impl Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("links", &self.links.len())
            .finish()
    }
}

impl Default for Chain {
    /// [`Bounds`], then [`DenEntry`], then [`Capture`].
    fn default() -> Self {
        Chain::new().with(Bounds).with(DenEntry).with(Capture)
    }
}

impl Chain {
    /// A chain without links, which accepts every move.
    pub fn new() -> Self {
        Chain { links: Vec::new() }
    }

    /// Appends a link to this chain.
    pub fn with<V: Validator + 'static>(mut self, link: V) -> Self {
        self.links.push(Box::new(link));
        self
    }

    /// The number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether this chain has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Validator for Chain {
    fn check(&self, board: &Board, piece: &Piece, m: Move) -> Result<(), Rejection> {
        self.links.iter().try_for_each(|v| v.check(board, piece, m))
    }
}
