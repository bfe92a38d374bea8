use crate::command::Command;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Sink, Write};
use std::{path::Path, str};
use tracing::{instrument, warn};

/// Somewhere to persist executed [`Command`]s.
#[cfg_attr(test, mockall::automock)]
pub trait Log {
    /// Records a command.
    fn append(&mut self, command: &Command) -> io::Result<()>;
}

/// An append-only [`Log`] that writes one command per line.
#[derive(Debug)]
pub struct Journal<W: Write> {
    writer: W,
}

impl<W: Write> Journal<W> {
    /// A journal that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Journal { writer }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Journal<File> {
    /// Opens a journal that appends to the file at `path`, creating it if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Journal::new(file))
    }
}

impl Journal<Sink> {
    /// A journal that forgets everything.
    pub fn discard() -> Self {
        Journal::new(io::sink())
    }
}

impl<W: Write> Log for Journal<W> {
    #[instrument(level = "trace", skip(self), err)]
    fn append(&mut self, command: &Command) -> io::Result<()> {
        writeln!(self.writer, "{command}")?;
        self.writer.flush()
    }
}

/// Reads back the [`Command`]s recorded by a [`Journal`].
///
/// Lines that do not parse, including those that are not valid UTF-8, are skipped.
#[instrument(level = "trace", skip(reader), err)]
pub fn load<R: BufRead>(reader: R) -> io::Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (n, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = match str::from_utf8(&bytes) {
            Ok(line) => line.trim_end_matches('\r'),
            Err(e) => {
                warn!(line = n + 1, "skipping malformed command, {e}");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse() {
            Ok(command) => commands.push(command),
            Err(e) => warn!(line = n + 1, content = %line, "skipping malformed command, {e}"),
        }
    }

    Ok(commands)
}
