use crate::command::Command;
use crate::jungle::{Animal, Piece};
use crate::session::Outcome;
use derive_more::{Display, From};
use tracing::info;

/// A change in the state of a [`Session`][`crate::session::Session`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, From)]
pub enum Event {
    #[display("the {} moved {}", _0.animal(), _0.r#move())]
    #[from(ignore)]
    Moved(Command),

    #[display("the {} was captured", _0.animal())]
    Captured(Piece),

    #[display("the {} took back {}", _0.animal(), _0.r#move())]
    #[from(ignore)]
    Undone(Command),

    #[display("the {} moved {} once more", _0.animal(), _0.r#move())]
    #[from(ignore)]
    Replayed(Command),

    #[display("the {_0} was blocked")]
    #[from(ignore)]
    Blocked(Animal),

    #[display("the {_0} was unblocked")]
    #[from(ignore)]
    Unblocked(Animal),

    #[display("game over, {_0}")]
    Concluded(Outcome),
}

/// Something interested in [`Event`]s.
#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    /// Called after the event took place.
    fn notify(&mut self, event: &Event);
}

/// An [`Observer`] that traces every event.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Trace;

impl Observer for Trace {
    fn notify(&mut self, event: &Event) {
        info!(%event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jungle::{Move, Position, Side, Species};

    #[test]
    fn events_describe_what_happened() {
        let rat = Animal(Species::Rat, Side::White);
        let m = Move(Position::new(6, 6), Position::new(5, 6));
        let c = Command::new(rat, m);

        assert_eq!(
            Event::Moved(c).to_string(),
            "the WHITE Rat moved (6, 6) -> (5, 6)"
        );

        assert_eq!(
            Event::Captured(Piece::new(rat, m.whither())).to_string(),
            "the WHITE Rat was captured"
        );

        assert_eq!(
            Event::from(Outcome::Den(Side::White)).to_string(),
            "game over, WHITE entered the enemy den"
        );
    }

    #[test]
    fn trace_accepts_every_event() {
        let rat = Animal(Species::Rat, Side::Black);
        Trace.notify(&Event::Blocked(rat));
        Trace.notify(&Event::Unblocked(rat));
    }
}
