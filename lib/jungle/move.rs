use crate::jungle::Position;
use derive_more::{Debug, Display};

/// A request to move whatever stands on one cell to another cell.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[debug("Move({_0} -> {_1})")]
#[display("{_0} -> {_1}")]
pub struct Move(pub Position, pub Position);

impl Move {
    /// The source [`Position`].
    #[inline(always)]
    pub fn whence(&self) -> Position {
        self.0
    }

    /// The destination [`Position`].
    #[inline(always)]
    pub fn whither(&self) -> Position {
        self.1
    }

    /// The Manhattan distance between source and destination.
    #[inline(always)]
    pub fn distance(&self) -> u32 {
        self.whence().distance(self.whither())
    }

    /// Whether this is a single orthogonal step.
    #[inline(always)]
    pub fn is_step(&self) -> bool {
        self.distance() == 1
    }

    /// Whether source and destination share exactly one of row or column.
    #[inline(always)]
    pub fn is_straight(&self) -> bool {
        let (a, b) = (self.whence(), self.whither());
        (a.row() == b.row()) != (a.col() == b.col())
    }

    /// The cells strictly between source and destination.
    ///
    /// Empty unless the move [is straight](`Self::is_straight`).
    pub fn between(&self) -> impl Iterator<Item = Position> {
        let (a, b) = (self.whence(), self.whither());
        let direction = ((b.row() - a.row()).signum(), (b.col() - a.col()).signum());
        let n = if self.is_straight() { self.distance() } else { 0 };
        (1..n as i32).map(move |i| a.shift(direction, i))
    }
}
