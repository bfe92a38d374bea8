mod board;
mod r#move;
mod piece;
mod position;
mod side;
mod species;

pub mod layout;
pub mod terrain;

pub use board::*;
pub use piece::*;
pub use position::*;
pub use r#move::*;
pub use side::*;
pub use species::*;
pub use terrain::{Grid, Terrain};
