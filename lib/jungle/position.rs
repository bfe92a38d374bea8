use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, counted from the top-left corner.
#[derive(
    Debug,
    Display,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Constructor,
    Deserialize,
    Serialize,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// The four orthogonal directions as `(row, col)` offsets.
    pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// This position's row.
    #[inline(always)]
    pub fn row(&self) -> i32 {
        self.row
    }

    /// This position's column.
    #[inline(always)]
    pub fn col(&self) -> i32 {
        self.col
    }

    /// The [Manhattan distance] to another position.
    ///
    /// [Manhattan distance]: https://en.wikipedia.org/wiki/Taxicab_geometry
    #[inline(always)]
    pub fn distance(&self, other: Position) -> u32 {
        let (dr, dc) = (self.row.abs_diff(other.row), self.col.abs_diff(other.col));
        dr.saturating_add(dc)
    }

    /// The position `n` cells away in the direction `(dr, dc)`.
    #[inline(always)]
    pub fn shift(&self, (dr, dc): (i32, i32), n: i32) -> Self {
        Position::new(self.row + dr * n, self.col + dc * n)
    }
}
