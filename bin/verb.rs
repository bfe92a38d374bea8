use derive_more::{Display, Error};
use lib::jungle::{Move, Position};
use std::str::FromStr;

/// A request typed into the console.
///
/// Coordinates are given as `x y`, where `x` counts columns and `y` counts rows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Verb {
    Start,
    Move(Move),
    Undo,
    Replay,
    Block(Position),
    Unblock(Position),
    Moves,
    Help,
    End,
}

impl Verb {
    pub const USAGE: &'static str = "\
start                  start a new game
move <x0> <y0> <x1> <y1> move the piece at (x0, y0) to (x1, y1)
undo                   take back the last move
replay                 play the last move once more
block <x> <y>          stop the piece at (x, y) from moving
unblock <x> <y>        let the piece at (x, y) move again
moves                  list the moves available
help                   show this message
end                    quit";
}

/// The reason why parsing [`Verb`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseVerbError {
    #[display("unknown command `{_0}`, type `help` for a list of commands")]
    Unknown(#[error(not(source))] String),

    #[display("usage: {_0}")]
    Usage(#[error(not(source))] &'static str),
}

fn coordinates<const N: usize>(args: &[&str], usage: &'static str) -> Result<[i32; N], ParseVerbError> {
    let mut xs = [0; N];

    if args.len() != N {
        return Err(ParseVerbError::Usage(usage));
    }

    for (x, arg) in xs.iter_mut().zip(args) {
        *x = arg.parse().map_err(|_| ParseVerbError::Usage(usage))?;
    }

    Ok(xs)
}

impl FromStr for Verb {
    type Err = ParseVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Err(ParseVerbError::Unknown(String::new()));
        };

        match &*verb.to_lowercase() {
            "start" => Ok(Verb::Start),
            "undo" => Ok(Verb::Undo),
            "replay" => Ok(Verb::Replay),
            "moves" => Ok(Verb::Moves),
            "help" => Ok(Verb::Help),
            "end" => Ok(Verb::End),

            "move" => {
                let [x0, y0, x1, y1] = coordinates(args, "move <x0> <y0> <x1> <y1>")?;
                let m = Move(Position::new(y0, x0), Position::new(y1, x1));
                Ok(Verb::Move(m))
            }

            "block" => {
                let [x, y] = coordinates(args, "block <x> <y>")?;
                Ok(Verb::Block(Position::new(y, x)))
            }

            "unblock" => {
                let [x, y] = coordinates(args, "unblock <x> <y>")?;
                Ok(Verb::Unblock(Position::new(y, x)))
            }

            _ => Err(ParseVerbError::Unknown(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!("START".parse(), Ok(Verb::Start));
        assert_eq!("Undo".parse(), Ok(Verb::Undo));
        assert_eq!("  replay ".parse(), Ok(Verb::Replay));
        assert_eq!("eNd".parse(), Ok(Verb::End));
        assert_eq!("moves".parse(), Ok(Verb::Moves));
        assert_eq!("help".parse(), Ok(Verb::Help));
    }

    #[proptest]
    fn move_takes_columns_before_rows(x0: i32, y0: i32, x1: i32, y1: i32) {
        assert_eq!(
            format!("move {x0} {y0} {x1} {y1}").parse(),
            Ok(Verb::Move(Move(Position::new(y0, x0), Position::new(y1, x1))))
        );
    }

    #[proptest]
    fn block_and_unblock_take_a_single_cell(x: i32, y: i32) {
        assert_eq!(format!("block {x} {y}").parse(), Ok(Verb::Block(Position::new(y, x))));
        assert_eq!(format!("UNBLOCK {x} {y}").parse(), Ok(Verb::Unblock(Position::new(y, x))));
    }

    #[test]
    fn bad_arguments_are_a_usage_error() {
        assert_eq!(
            "move 1 2 3".parse::<Verb>(),
            Err(ParseVerbError::Usage("move <x0> <y0> <x1> <y1>"))
        );

        assert_eq!(
            "move a b c d".parse::<Verb>(),
            Err(ParseVerbError::Usage("move <x0> <y0> <x1> <y1>"))
        );

        assert_eq!(
            "block 1".parse::<Verb>(),
            Err(ParseVerbError::Usage("block <x> <y>"))
        );
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(
            "castle kingside".parse::<Verb>(),
            Err(ParseVerbError::Unknown("castle kingside".into()))
        );
    }
}
