use crate::jungle::{Animal, Piece, Position, Side, Species};

/// Starting cells of the side defending the top of a standard board.
#[rustfmt::skip]
const TOP: [(Species, i32, i32); 8] = [
    (Species::Lion, 0, 0),
    (Species::Tiger, 0, 6),
    (Species::Dog, 1, 1),
    (Species::Cat, 1, 5),
    (Species::Rat, 2, 0),
    (Species::Leopard, 2, 2),
    (Species::Wolf, 2, 4),
    (Species::Elephant, 2, 6),
];

/// Where an [`Animal`] starts the game on a board of the given dimensions.
///
/// Black takes the top rows, White the same arrangement rotated half a turn.
pub fn origin(animal: Animal, width: i32, height: i32) -> Position {
    let (row, col) = TOP
        .iter()
        .find(|(s, _, _)| *s == animal.species())
        .map(|&(_, r, c)| (r, c))
        .unwrap_or_default();

    match animal.side() {
        Side::Black => Position::new(row, col),
        Side::White => Position::new(height - 1 - row, width - 1 - col),
    }
}

/// Every piece of both sides in its starting cell.
pub fn standard(width: i32, height: i32) -> impl Iterator<Item = Piece> {
    Side::iter()
        .flat_map(|side| Species::iter().map(move |species| Animal(species, side)))
        .map(move |animal| Piece::new(animal, origin(animal, width, height)))
}
