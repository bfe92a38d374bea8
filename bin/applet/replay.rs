use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::command::{load, Command};
use lib::jungle::IllegalPlacement;
use lib::session::{Config, Session, Trace};
use std::{fs::File, io::BufReader, path::PathBuf};
use tracing::{info, instrument, warn};

/// Reconstruct a game from a command log and print the final board.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// Game configuration in RON.
    #[clap(short, long, default_value_t)]
    config: Config,

    /// The command log to read.
    log: PathBuf,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let file = File::open(&self.log)
            .with_context(|| format!("failed to open `{}`", self.log.display()))?;

        let commands = load(BufReader::new(file))
            .with_context(|| format!("failed to read `{}`", self.log.display()))?;

        let session = reconstruct(&self.config, commands)?;

        println!("{}", session.board());
        match session.outcome() {
            Some(o) => println!("{o}"),
            None => println!("{}", session.turn()),
        }

        Ok(())
    }
}

/// Plays every command that is still legal when its turn comes.
fn reconstruct<I>(config: &Config, commands: I) -> Result<Session, IllegalPlacement>
where
    I: IntoIterator<Item = Command>,
{
    let mut session = Session::new(config)?.observe(Trace);

    for (n, command) in commands.into_iter().enumerate() {
        if let Err(e) = session.execute(command) {
            warn!(command = n + 1, %command, "skipping command, {e}");
        }
    }

    info!(moves = session.history().len(), "game reconstructed");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::jungle::{Animal, Move, Position, Side, Species};
    use lib::session::Outcome;

    fn command(s: Species, c: Side, r0: i32, c0: i32, r1: i32, c1: i32) -> Command {
        Command::new(
            Animal(s, c),
            Move(Position::new(r0, c0), Position::new(r1, c1)),
        )
    }

    #[test]
    fn reconstruct_plays_commands_in_order() -> Result<(), IllegalPlacement> {
        let commands = [
            command(Species::Rat, Side::White, 6, 6, 5, 6),
            command(Species::Rat, Side::Black, 2, 0, 3, 0),
            command(Species::Rat, Side::White, 5, 6, 5, 5),
        ];

        let session = reconstruct(&Config::default(), commands)?;
        let rat = session.board().find(Animal(Species::Rat, Side::White));
        assert_eq!(rat.map(|p| p.position()), Some(Position::new(5, 5)));
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.turn().side(), Side::Black);
        Ok(())
    }

    #[test]
    fn reconstruct_skips_illegal_commands() -> Result<(), IllegalPlacement> {
        let commands = [
            command(Species::Rat, Side::Black, 2, 0, 3, 0),
            command(Species::Dog, Side::White, 7, 5, 6, 5),
        ];

        let session = reconstruct(&Config::default(), commands)?;
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.turn().side(), Side::Black);
        assert_eq!(session.outcome(), None::<Outcome>);
        Ok(())
    }

    #[test]
    fn replay_fails_for_missing_log() {
        let replay = Replay {
            config: Config::default(),
            log: PathBuf::from("/nonexistent/jungle.log"),
        };

        assert!(replay.execute().is_err());
    }
}
