use crate::io::Io;
use crate::verb::Verb;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::command::Journal;
use lib::jungle::Move;
use lib::session::{Config, Session, Trace};
use std::io::{stdin, stdout, Read, Write};
use std::ops::ControlFlow;
use tracing::{info, instrument, warn};

/// Play a game of jungle on the console.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Game configuration in RON.
    #[clap(short, long, default_value_t)]
    config: Config,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let io = Io::new(stdout(), stdin());
        Console::new(io, self.config).run()
    }
}

/// The interactive verb loop.
pub struct Console<W: Write, R: Read> {
    io: Io<W, R>,
    config: Config,
    session: Option<Session>,
}

impl<W: Write, R: Read> Console<W, R> {
    pub fn new(io: Io<W, R>, config: Config) -> Self {
        Console {
            io,
            config,
            session: None,
        }
    }

    /// Reads verbs until the game ends, `end` is typed or the input is exhausted.
    pub fn run(&mut self) -> Result<(), Anyhow> {
        self.io.send("type `start` to begin a new game or `help` for a list of commands")?;
        self.io.flush()?;

        while let Some(line) = self.io.recv()? {
            if line.trim().is_empty() {
                continue;
            }

            let flow = match line.parse() {
                Ok(verb) => self.dispatch(verb)?,
                Err(e) => {
                    self.io.send(e)?;
                    ControlFlow::Continue(())
                }
            };

            self.io.flush()?;

            if flow.is_break() {
                break;
            }
        }

        Ok(())
    }

    fn start(&mut self) -> Result<&mut Session, Anyhow> {
        let session = Session::new(&self.config)?.observe(Trace);

        let session = match &self.config.log {
            None => session,
            Some(path) => match Journal::open(path) {
                Ok(journal) => session.with_log(journal),
                Err(e) => {
                    warn!(path = %path.display(), "failed to open the command log, {e}");
                    let msg = format!("failed to open `{}`, moves will not be recorded: {e}", path.display());
                    self.io.send(msg)?;
                    session
                }
            },
        };

        info!(config = %self.config, "starting a new game");
        Ok(self.session.insert(session))
    }

    fn dispatch(&mut self, verb: Verb) -> Result<ControlFlow<()>, Anyhow> {
        match verb {
            Verb::Help => {
                self.io.send(Verb::USAGE)?;
                return Ok(ControlFlow::Continue(()));
            }

            Verb::End => {
                self.io.send("bye")?;
                return Ok(ControlFlow::Break(()));
            }

            Verb::Start if self.session.is_some() => {
                self.io.send("a game is already in progress, type `end` to quit")?;
                return Ok(ControlFlow::Continue(()));
            }

            Verb::Start => {
                match self.start().map(|s| s.board().to_string()) {
                    Ok(board) => self.io.send(board)?,
                    Err(e) => self.io.send(e)?,
                }

                return Ok(ControlFlow::Continue(()));
            }

            _ => {}
        }

        let Some(session) = self.session.as_mut() else {
            self.io.send("no game in progress, type `start` to begin")?;
            return Ok(ControlFlow::Continue(()));
        };

        let report = match verb {
            Verb::Move(m) => session.play(m).map(|_| ()).map_err(Anyhow::from),
            Verb::Undo => session.undo().map(|_| ()).map_err(Anyhow::from),
            Verb::Replay => session.replay().map(|_| ()).map_err(Anyhow::from),
            Verb::Block(pos) => session.block(pos).map(|_| ()).map_err(Anyhow::from),
            Verb::Unblock(pos) => session.unblock(pos).map(|_| ()).map_err(Anyhow::from),

            Verb::Moves => {
                let listing: Vec<_> = session
                    .moves()
                    .into_iter()
                    .map(|c| format!("{:<14} {}", c.animal().to_string(), notation(c.r#move())))
                    .collect();

                self.io.send(listing.join("\n"))?;
                return Ok(ControlFlow::Continue(()));
            }

            Verb::Start | Verb::Help | Verb::End => return Ok(ControlFlow::Continue(())),
        };

        if let Err(e) = report {
            self.io.send(e)?;
            return Ok(ControlFlow::Continue(()));
        }

        self.io.send(session.board())?;

        match session.outcome() {
            None => {
                self.io.send(session.turn())?;
                Ok(ControlFlow::Continue(()))
            }

            Some(o) => {
                self.io.send(o)?;
                Ok(ControlFlow::Break(()))
            }
        }
    }
}

/// A [`Move`] as typed into the console.
fn notation(m: Move) -> String {
    let (a, b) = (m.whence(), m.whither());
    format!("move {} {} {} {}", a.col(), a.row(), b.col(), b.row())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str;

    fn run(input: &str) -> Result<String, Anyhow> {
        let mut output = Vec::new();
        Console::new(Io::new(&mut output, input.as_bytes()), Config::default()).run()?;
        Ok(str::from_utf8(&output)?.to_string())
    }

    #[test]
    fn moves_need_a_game_in_progress() -> Result<(), Anyhow> {
        let output = run("move 6 6 6 5\n")?;
        assert!(output.contains("no game in progress"));
        Ok(())
    }

    #[test]
    fn start_prints_the_board() -> Result<(), Anyhow> {
        let output = run("start\n")?;
        assert!(output.contains("l . ^ # ^ . t"));
        assert!(output.contains("T . ^ # ^ . L"));
        Ok(())
    }

    #[test]
    fn legal_moves_print_the_board_and_the_turn() -> Result<(), Anyhow> {
        let output = run("start\nmove 6 6 6 5\n")?;
        assert!(output.contains(". ~ ~ . ~ ~ R"));
        assert!(output.contains("BLACK to move"));
        Ok(())
    }

    #[test]
    fn rejections_are_reported_and_the_loop_goes_on() -> Result<(), Anyhow> {
        let output = run("start\nmove 0 2 0 3\nmove 6 6 6 5\n")?;
        assert!(output.contains("it is not BLACK's turn"));
        assert!(output.contains("BLACK to move"));
        Ok(())
    }

    #[test]
    fn unknown_input_and_usage_errors_are_reported() -> Result<(), Anyhow> {
        let output = run("start\nfly away\nmove 1 two 3 4\n")?;
        assert!(output.contains("unknown command `fly away`"));
        assert!(output.contains("usage: move <x0> <y0> <x1> <y1>"));
        Ok(())
    }

    #[test]
    fn undo_of_nothing_is_reported() -> Result<(), Anyhow> {
        let output = run("start\nundo\nreplay\n")?;
        assert_eq!(output.matches("no move has been played yet").count(), 2);
        Ok(())
    }

    #[test]
    fn end_stops_the_loop() -> Result<(), Anyhow> {
        let output = run("start\nend\nmove 6 6 6 5\n")?;
        assert!(output.contains("bye"));
        assert!(!output.contains("BLACK to move"));
        Ok(())
    }

    #[test]
    fn unopenable_log_is_reported_and_the_game_goes_on() -> Result<(), Anyhow> {
        let config = Config {
            log: Some("/nonexistent/dir/game.log".into()),
            ..Config::default()
        };

        let mut output = Vec::new();
        let input = "start\nmove 6 6 6 5\nend\n";
        Console::new(Io::new(&mut output, input.as_bytes()), config).run()?;
        let output = str::from_utf8(&output)?;

        assert!(output.contains("failed to open `/nonexistent/dir/game.log`"));
        assert!(output.contains("BLACK to move"));
        assert!(output.contains("bye"));
        Ok(())
    }

    #[test]
    fn impossible_boards_are_reported_and_the_loop_goes_on() -> Result<(), Anyhow> {
        let config = Config {
            width: 3,
            height: 3,
            ..Config::default()
        };

        let mut output = Vec::new();
        let input = "start\nmove 6 6 6 5\n";
        Console::new(Io::new(&mut output, input.as_bytes()), config).run()?;
        let output = str::from_utf8(&output)?;

        assert!(output.contains("is outside the board"));
        assert!(output.contains("no game in progress"));
        Ok(())
    }

    #[test]
    fn start_does_not_discard_a_game_in_progress() -> Result<(), Anyhow> {
        let output = run("start\nmove 6 6 6 5\nstart\nmove 0 2 0 3\n")?;
        assert!(output.contains("a game is already in progress"));
        assert!(output.contains("WHITE to move"));
        assert!(!output.contains("it is not BLACK's turn"));
        Ok(())
    }

    #[test]
    fn moves_are_listed_in_console_notation() -> Result<(), Anyhow> {
        let output = run("start\nmoves\n")?;
        assert!(output.contains("move 6 6 6 5"));
        Ok(())
    }

    #[test]
    fn blocked_pieces_are_reported() -> Result<(), Anyhow> {
        let output = run("start\nblock 6 6\nmove 6 6 6 5\n")?;
        assert!(output.contains("the WHITE Rat is blocked"));
        Ok(())
    }
}
