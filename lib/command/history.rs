use crate::command::{Command, Log};
use crate::jungle::{Board, Piece, Snapshot};
use crate::rules::Rejection;
use derive_more::{Display, Error, From};
use tracing::{instrument, warn};

/// The reason why there was nothing to undo or replay.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display("no move has been played yet")]
pub struct EmptyHistory;

/// The reason why a [`Command`] could not be replayed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ReplayError {
    Empty(EmptyHistory),
    Rejected(Rejection),
}

/// The result of a successfully executed [`Command`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Executed {
    command: Command,
    capture: Option<Piece>,
    logged: bool,
}

impl Executed {
    /// The command executed.
    #[inline(always)]
    pub fn command(&self) -> Command {
        self.command
    }

    /// The piece taken off the board, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Piece> {
        self.capture
    }

    /// Whether the command made it into the [`Log`].
    #[inline(always)]
    pub fn is_logged(&self) -> bool {
        self.logged
    }
}

/// The [`Command`]s played so far, each with the board as it was right before.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct History {
    entries: Vec<(Command, Snapshot)>,
}

impl History {
    /// The number of commands recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently recorded command.
    pub fn last(&self) -> Option<Command> {
        self.entries.last().map(|(c, _)| *c)
    }

    /// An iterator over the recorded commands, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Command> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Executes a command and records it.
    ///
    /// A rejected command is neither logged nor recorded. Failing to log a command that was
    /// played does not undo it.
    #[instrument(level = "debug", skip(self, board, log), err)]
    pub fn execute(
        &mut self,
        command: Command,
        board: &mut Board,
        log: &mut dyn Log,
    ) -> Result<Executed, Rejection> {
        let snapshot = board.snapshot();
        let capture = command.execute(board)?;

        let logged = match log.append(&command) {
            Ok(()) => true,
            Err(e) => {
                warn!(%command, "failed to log command, {e}");
                false
            }
        };

        self.entries.push((command, snapshot));

        Ok(Executed {
            command,
            capture,
            logged,
        })
    }

    /// Forgets the most recent command and puts the board back as it was before it.
    #[instrument(level = "debug", skip(self, board), err)]
    pub fn undo(&mut self, board: &mut Board) -> Result<Command, EmptyHistory> {
        let (command, snapshot) = self.entries.pop().ok_or(EmptyHistory)?;
        board.restore(snapshot);
        Ok(command)
    }

    /// Executes the most recent command once more.
    #[instrument(level = "debug", skip(self, board, log), err)]
    pub fn replay(&mut self, board: &mut Board, log: &mut dyn Log) -> Result<Executed, ReplayError> {
        let command = self.last().ok_or(EmptyHistory)?;
        Ok(self.execute(command, board, log)?)
    }
}
