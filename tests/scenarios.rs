use lib::command::{load, EmptyHistory, ReplayError};
use lib::jungle::{Animal, Board, IllegalPlacement, Move, Piece, Position, Side, Species, State, Terrain};
use lib::rules::{self, Rejection};
use lib::session::Session;
use std::io::{self, Cursor};

fn at(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn board(pieces: &[(Species, Side, Position)]) -> Result<Board, IllegalPlacement> {
    let mut board = Board::new(7, 9);
    for &(s, c, p) in pieces {
        board.place(Piece::new(Animal(s, c), p))?;
    }

    Ok(board)
}

#[test]
fn rat_swims_from_the_bank() {
    let mut session = Session::default();
    let rat = Animal(Species::Rat, Side::White);
    assert_eq!(session.board().find(rat).map(|p| p.position()), Some(at(6, 6)));

    assert!(session.play(Move(at(6, 6), at(5, 6))).is_ok());
    assert!(session.play(Move(at(2, 0), at(3, 0))).is_ok());

    assert_eq!(session.board().terrain(at(5, 5)), Some(Terrain::Water));
    assert!(session.play(Move(at(5, 6), at(5, 5))).is_ok());
    assert_eq!(session.board().find(rat).map(|p| p.position()), Some(at(5, 5)));
    assert!(session.board().is_consistent());
}

#[test]
fn elephant_cannot_capture_the_rat() -> Result<(), IllegalPlacement> {
    let elephant = Animal(Species::Elephant, Side::White);
    let rat = Animal(Species::Rat, Side::Black);
    let mut board = board(&[(elephant.0, elephant.1, at(6, 0)), (rat.0, rat.1, at(5, 0))])?;
    let before = board.clone();

    assert_eq!(
        rules::play(&mut board, elephant, Move(at(6, 0), at(5, 0))),
        Err(Rejection::Immune(elephant, rat))
    );

    assert_eq!(board, before);
    Ok(())
}

#[test]
fn lion_leaps_across_the_river_and_captures() -> Result<(), IllegalPlacement> {
    let lion = Animal(Species::Lion, Side::White);
    let wolf = Animal(Species::Wolf, Side::Black);
    let mut board = board(&[(lion.0, lion.1, at(3, 0)), (wolf.0, wolf.1, at(3, 3))])?;

    let captured = rules::play(&mut board, lion, Move(at(3, 0), at(3, 3)));
    assert_eq!(captured.map(|p| p.map(|p| p.animal())), Ok(Some(wolf)));
    assert_eq!(board.find(lion).map(|p| p.position()), Some(at(3, 3)));
    assert_eq!(board.find(wolf), None);
    assert!(board.is_consistent());
    Ok(())
}

#[test]
fn swimming_rat_blocks_the_leap() -> Result<(), IllegalPlacement> {
    let lion = Animal(Species::Lion, Side::White);
    let rat = Animal(Species::Rat, Side::Black);
    let mut board = board(&[(lion.0, lion.1, at(3, 0)), (rat.0, rat.1, at(3, 1))])?;
    let before = board.clone();

    assert_eq!(
        rules::play(&mut board, lion, Move(at(3, 0), at(3, 3))),
        Err(Rejection::Obstructed(at(3, 1)))
    );

    assert_eq!(board, before);
    Ok(())
}

#[test]
fn blocked_piece_cannot_move_at_all() {
    let mut board = Board::default();
    let rat = Animal(Species::Rat, Side::White);
    assert!(board.set_state(rat, State::Blocked));
    let before = board.clone();

    for whither in [at(5, 6), at(6, 5), at(7, 6), at(0, 0)] {
        assert_eq!(
            rules::play(&mut board, rat, Move(at(6, 6), whither)),
            Err(Rejection::Blocked(rat))
        );
    }

    assert_eq!(board, before);
}

#[test]
fn reloading_the_log_skips_malformed_lines() -> io::Result<()> {
    let log = "MoverPecaCommand;Rat;WHITE;6;6;5;6\nMoverPecaCommand;Rat;WHITE;6\n";
    let commands = load(Cursor::new(log))?;
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].animal(), Animal(Species::Rat, Side::White));
    assert_eq!(commands[0].r#move(), Move(at(6, 6), at(5, 6)));
    Ok(())
}

#[test]
fn undo_and_replay_on_fresh_history_are_no_ops() {
    let mut session = Session::default();
    let before = session.board().clone();

    assert_eq!(session.undo(), Err(EmptyHistory));
    assert!(matches!(session.replay(), Err(ReplayError::Empty(EmptyHistory))));
    assert_eq!(session.board(), &before);
    assert_eq!(session.history().len(), 0);
}
