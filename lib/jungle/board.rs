use crate::jungle::{layout, Animal, Grid, Piece, Position, State, Terrain};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

/// The width of the standard board.
pub const WIDTH: i32 = 7;

/// The height of the standard board.
pub const HEIGHT: i32 = 9;

/// The reason why a piece could not be placed during setup.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalPlacement {
    #[display("{_0} is outside the board")]
    OutOfBounds(#[error(not(source))] Position),
    #[display("{_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
    #[display("the {_0} is already on the board")]
    Duplicate(#[error(not(source))] Animal),
}

/// The mutable part of a [`Board`], captured before a move.
///
/// The terrain is fixed for the lifetime of a board and is not part of the snapshot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pieces: Vec<Piece>,
    index: HashMap<Position, Animal>,
}

impl Snapshot {
    /// The pieces that were on the board.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

/// The jungle board.
///
/// Every piece in [`Board::pieces`] is indexed by its position and no two pieces share a cell.
/// The board keeps this invariant but knows nothing of the game rules.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    grid: Arc<Grid>,
    pieces: Vec<Piece>,
    index: HashMap<Position, Animal>,
}

impl Default for Board {
    fn default() -> Self {
        Board::setup(WIDTH, HEIGHT).expect("expected standard layout to fit the standard board")
    }
}

impl Board {
    /// An empty board of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Board {
            grid: Arc::new(Grid::new(width, height)),
            pieces: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// A board of the given dimensions with both sides in their starting cells.
    pub fn setup(width: i32, height: i32) -> Result<Self, IllegalPlacement> {
        let mut board = Board::new(width, height);
        for piece in layout::standard(width, height) {
            board.place(piece)?;
        }

        Ok(board)
    }

    /// Puts a new piece on the board.
    pub fn place(&mut self, piece: Piece) -> Result<(), IllegalPlacement> {
        if !self.is_within_bounds(piece.position()) {
            Err(IllegalPlacement::OutOfBounds(piece.position()))
        } else if self.index.contains_key(&piece.position()) {
            Err(IllegalPlacement::Occupied(piece.position()))
        } else if self.find(piece.animal()).is_some() {
            Err(IllegalPlacement::Duplicate(piece.animal()))
        } else {
            self.index.insert(piece.position(), piece.animal());
            self.pieces.push(piece);
            Ok(())
        }
    }

    /// The terrain shared by this board and all of its snapshots.
    #[inline(always)]
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// The number of columns.
    #[inline(always)]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// The number of rows.
    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Whether the position lies on the board.
    #[inline(always)]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    /// The [`Terrain`] at the given position, if on the board.
    #[inline(always)]
    pub fn terrain(&self, pos: Position) -> Option<Terrain> {
        self.grid.terrain(pos)
    }

    /// The pieces on the board, in placement order.
    #[inline(always)]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The [`Piece`] standing on the given position, if any.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.find(*self.index.get(&pos)?)
    }

    /// The [`Piece`] representing the given [`Animal`], if still on the board.
    pub fn find(&self, animal: Animal) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.animal() == animal)
    }

    fn find_mut(&mut self, animal: Animal) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.animal() == animal)
    }

    /// Moves a piece from `whence` to `whither`.
    ///
    /// Fails without touching the board if the piece is not at `whence`,
    /// if `whither` lies outside the board or is held by another piece.
    #[must_use]
    pub fn move_piece(&mut self, animal: Animal, whence: Position, whither: Position) -> bool {
        if self.index.get(&whence) != Some(&animal) || !self.is_within_bounds(whither) {
            return false;
        }

        if self.index.get(&whither).is_some_and(|&a| a != animal) {
            return false;
        }

        match self.find_mut(animal) {
            None => false,
            Some(piece) => {
                piece.relocate(whither);
                self.index.remove(&whence);
                self.index.insert(whither, animal);
                true
            }
        }
    }

    /// Takes a piece off the board.
    ///
    /// Fails without touching the board if the piece's position does not match the index.
    pub fn remove_piece(&mut self, animal: Animal) -> Option<Piece> {
        let i = self.pieces.iter().position(|p| p.animal() == animal)?;
        let pos = self.pieces[i].position();
        if self.index.get(&pos) != Some(&animal) {
            return None;
        }

        self.index.remove(&pos);
        Some(self.pieces.remove(i))
    }

    /// Changes the operability of a piece, returns whether the piece was found.
    pub fn set_state(&mut self, animal: Animal, state: State) -> bool {
        match self.find_mut(animal) {
            None => false,
            Some(piece) => {
                piece.set_state(state);
                true
            }
        }
    }

    /// Copies the pieces, their positions and their operability.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pieces: self.pieces.clone(),
            index: self.index.clone(),
        }
    }

    /// Replaces the pieces on the board with those of a [`Snapshot`].
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pieces = snapshot.pieces;
        self.index = snapshot.index;
    }

    /// Whether the piece list and the position index agree.
    pub fn is_consistent(&self) -> bool {
        self.index.len() == self.pieces.len()
            && self.pieces.iter().all(|p| {
                self.is_within_bounds(p.position())
                    && self.index.get(&p.position()) == Some(&p.animal())
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.width() {
                if col > 0 {
                    f.write_char(' ')?;
                }

                let pos = Position::new(row, col);
                match (self.piece_at(pos), self.terrain(pos)) {
                    (Some(p), _) => f.write_char(p.letter())?,
                    (None, Some(t)) => f.write_char(t.glyph())?,
                    (None, None) => f.write_char('?')?,
                }
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
