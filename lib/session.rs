use crate::command::{Command, EmptyHistory, Executed, History, Journal, Log, ReplayError};
use crate::jungle::{Animal, Board, IllegalPlacement, Move, Piece, Position, Side, State};
use crate::rules::{Chain, Policy, Rank, Rejection, Validator};
use std::fmt::{self, Debug};
use tracing::{debug, instrument};

mod config;
mod event;
mod outcome;
mod turn;

pub use config::*;
pub use event::*;
pub use outcome::*;
pub use turn::*;

/// A game of jungle.
///
/// Every move request goes through the session, which owns the board, the rules in play,
/// the history of moves and the turn.
pub struct Session {
    board: Board,
    chain: Chain,
    history: History,
    turn: Turn,
    outcome: Option<Outcome>,
    log: Box<dyn Log>,
    observers: Vec<Box<dyn Observer>>,
}

impl Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("board", &self.board)
            .field("chain", &self.chain)
            .field("history", &self.history.len())
            .field("turn", &self.turn)
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::with_board(Board::default())
    }
}

impl Session {
    /// Sets up a new game.
    ///
    /// The [`Config::log`] is left to the caller, see [`Session::with_log`].
    pub fn new(config: &Config) -> Result<Self, IllegalPlacement> {
        let board = Board::setup(config.width, config.height)?;
        let chain = if config.ranked {
            Chain::default().with(Rank)
        } else {
            Chain::default()
        };

        Ok(Session::with_board(board).with_chain(chain))
    }

    /// A game on an arbitrary board, White to move.
    pub fn with_board(board: Board) -> Self {
        Session {
            board,
            chain: Chain::default(),
            history: History::default(),
            turn: Turn::default(),
            outcome: None,
            log: Box::new(Journal::discard()),
            observers: Vec::new(),
        }
    }

    /// Replaces the [`Log`] that records executed commands.
    pub fn with_log<L: Log + 'static>(mut self, log: L) -> Self {
        self.log = Box::new(log);
        self
    }

    /// Replaces the [`Chain`] of validators.
    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = chain;
        self
    }

    /// Registers an [`Observer`].
    pub fn observe<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// The current board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[inline(always)]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The moves played so far.
    #[inline(always)]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// How the game ended, if it did.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn notify(&mut self, event: Event) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    fn locate(&self, command: &Command) -> Result<Piece, Rejection> {
        let whence = command.r#move().whence();
        match self.board.find(command.animal()) {
            Some(p) if p.position() == whence => Ok(*p),
            _ => Err(Rejection::Misplaced(command.animal(), whence)),
        }
    }

    /// Whether an executed command ended the game.
    fn judge(&self, executed: &Executed) -> Option<Outcome> {
        let side = executed.command().side();
        let whither = executed.command().r#move().whither();

        if self.board.terrain(whither).is_some_and(|t| t.is_den_of(!side)) {
            Some(Outcome::Den(side))
        } else if executed.capture().is_some() && self.board.pieces().iter().all(|p| p.side() == side) {
            Some(Outcome::Elimination(side))
        } else {
            None
        }
    }

    fn settle(&mut self, executed: &Executed) {
        self.notify(Event::Moved(executed.command()));

        if let Some(captured) = executed.capture() {
            self.notify(Event::Captured(captured));
        }

        self.outcome = self.judge(executed);

        if let Some(outcome) = self.outcome {
            self.notify(Event::Concluded(outcome));
        }
    }

    /// Plays whatever piece stands at the source of the [`Move`].
    #[instrument(level = "debug", skip(self), err)]
    pub fn play(&mut self, m: Move) -> Result<Executed, Rejection> {
        let animal = match self.board.piece_at(m.whence()) {
            None => return Err(Rejection::Vacant(m.whence())),
            Some(p) => p.animal(),
        };

        self.execute(Command::new(animal, m))
    }

    /// Executes a [`Command`] on behalf of the side to move, then hands the turn over.
    #[instrument(level = "debug", skip(self), err)]
    pub fn execute(&mut self, command: Command) -> Result<Executed, Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }

        let piece = self.locate(&command)?;
        self.turn.check(command.side())?;
        self.chain.check(&self.board, &piece, command.r#move())?;

        let executed = self
            .history
            .execute(command, &mut self.board, self.log.as_mut())?;

        debug!(%command, capture = ?executed.capture(), "move accepted");

        self.settle(&executed);
        self.turn.advance();
        Ok(executed)
    }

    /// Takes back the last move and hands the turn back to the side that played it.
    #[instrument(level = "debug", skip(self), err)]
    pub fn undo(&mut self) -> Result<Command, EmptyHistory> {
        let command = self.history.undo(&mut self.board)?;
        self.turn.set(command.side());
        self.outcome = None;
        self.notify(Event::Undone(command));
        Ok(command)
    }

    /// Plays the last move once more, then hands the turn to the opponent of the side that played it.
    #[instrument(level = "debug", skip(self), err)]
    pub fn replay(&mut self) -> Result<Executed, ReplayError> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver.into());
        }

        let command = self.history.last().ok_or(EmptyHistory)?;
        let piece = self.locate(&command)?;
        self.chain.check(&self.board, &piece, command.r#move())?;

        let executed = self.history.replay(&mut self.board, self.log.as_mut())?;
        self.notify(Event::Replayed(command));
        self.settle(&executed);
        self.turn.set(!command.side());
        Ok(executed)
    }

    fn operability(&mut self, pos: Position, state: State) -> Result<Animal, Rejection> {
        let animal = match self.board.piece_at(pos) {
            None => return Err(Rejection::Vacant(pos)),
            Some(p) => p.animal(),
        };

        self.board.set_state(animal, state);
        Ok(animal)
    }

    /// Stops the piece at the given position from moving.
    #[instrument(level = "debug", skip(self), err)]
    pub fn block(&mut self, pos: Position) -> Result<Animal, Rejection> {
        let animal = self.operability(pos, State::Blocked)?;
        self.notify(Event::Blocked(animal));
        Ok(animal)
    }

    /// Lets the piece at the given position move again.
    #[instrument(level = "debug", skip(self), err)]
    pub fn unblock(&mut self, pos: Position) -> Result<Animal, Rejection> {
        let animal = self.operability(pos, State::Normal)?;
        self.notify(Event::Unblocked(animal));
        Ok(animal)
    }

    /// The commands the side to move may currently issue.
    pub fn moves(&self) -> Vec<Command> {
        self.moves_of(self.turn.side())
    }

    fn moves_of(&self, side: Side) -> Vec<Command> {
        if self.outcome.is_some() {
            return Vec::new();
        }

        let mut commands = Vec::new();

        for piece in self.board.pieces() {
            if piece.side() != side || piece.is_blocked() {
                continue;
            }

            let movement = piece.species().movement();
            for whither in movement.reach(&self.board, piece.position()) {
                let m = Move(piece.position(), whither);
                let legal = self.chain.check(&self.board, piece, m).is_ok()
                    && movement.check(&self.board, piece, m).is_ok();

                if legal {
                    commands.push(Command::new(piece.animal(), m));
                }
            }
        }

        commands
    }
}
