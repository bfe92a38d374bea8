use crate::jungle::{Position, Side};
use derive_more::Display;

/// The kind of ground a cell is made of.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Terrain {
    #[display("land")]
    Land,
    #[display("water")]
    Water,
    /// The home cell of a side.
    #[display("{_0} den")]
    Den(Side),
    /// One of the cells guarding the den of a side.
    #[display("{_0} trap")]
    Trap(Side),
}

impl Terrain {
    /// Whether this is a water cell.
    #[inline(always)]
    pub fn is_water(&self) -> bool {
        *self == Terrain::Water
    }

    /// Whether this is the den of the given side.
    #[inline(always)]
    pub fn is_den_of(&self, side: Side) -> bool {
        *self == Terrain::Den(side)
    }

    /// Whether this is a trap of the given side.
    #[inline(always)]
    pub fn is_trap_of(&self, side: Side) -> bool {
        *self == Terrain::Trap(side)
    }

    /// Whether a piece of the given side may ever stand on this cell.
    ///
    /// Only the side's own den is off limits.
    #[inline(always)]
    pub fn admits(&self, side: Side) -> bool {
        !self.is_den_of(side)
    }

    /// Whether a piece of the given side standing on this cell is caught in an enemy trap.
    #[inline(always)]
    pub fn exposes(&self, side: Side) -> bool {
        self.is_trap_of(!side)
    }

    /// The character used to draw this terrain on the board.
    pub fn glyph(&self) -> char {
        match self {
            Terrain::Land => '.',
            Terrain::Water => '~',
            Terrain::Den(_) => '#',
            Terrain::Trap(_) => '^',
        }
    }
}

const RIVERS: [(i32, i32); 12] = [
    (3, 1),
    (3, 2),
    (4, 1),
    (4, 2),
    (5, 1),
    (5, 2),
    (3, 4),
    (3, 5),
    (4, 4),
    (4, 5),
    (5, 4),
    (5, 5),
];

/// The den of a side on a board of the given dimensions.
///
/// Black defends the top row, White the bottom row.
pub fn den(side: Side, width: i32, height: i32) -> Position {
    match side {
        Side::Black => Position::new(0, width / 2),
        Side::White => Position::new(height - 1, width / 2),
    }
}

/// The traps guarding the den of a side on a board of the given dimensions.
pub fn traps(side: Side, width: i32, height: i32) -> [Position; 3] {
    let den = den(side, width, height);
    let inwards = match side {
        Side::Black => 1,
        Side::White => -1,
    };

    [
        den.shift((0, -1), 1),
        den.shift((0, 1), 1),
        den.shift((inwards, 0), 1),
    ]
}

/// Classifies a cell on a board of the given dimensions.
pub fn classify(pos: Position, width: i32, height: i32) -> Terrain {
    if RIVERS.contains(&(pos.row(), pos.col())) {
        return Terrain::Water;
    }

    for side in Side::iter() {
        if pos == den(side, width, height) {
            return Terrain::Den(side);
        } else if traps(side, width, height).contains(&pos) {
            return Terrain::Trap(side);
        }
    }

    Terrain::Land
}

/// The terrain of every cell on a board, fixed once the board is set up.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
}

impl Grid {
    /// Classifies every cell of a `width` by `height` board.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .map(|pos| classify(pos, width, height))
            .collect();

        Grid {
            width,
            height,
            cells,
        }
    }

    /// The number of columns.
    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The number of rows.
    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the position lies on this grid.
    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.height).contains(&pos.row()) && (0..self.width).contains(&pos.col())
    }

    /// The [`Terrain`] at the given position, if it lies on this grid.
    #[inline(always)]
    pub fn terrain(&self, pos: Position) -> Option<Terrain> {
        if self.contains(pos) {
            Some(self.cells[(pos.row() * self.width + pos.col()) as usize])
        } else {
            None
        }
    }

    /// An iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Terrain)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Position::new(i as i32 / width, i as i32 % width), t))
    }
}
