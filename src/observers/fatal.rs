//! Console and log-file observer for fatal errors.

use super::absorb;
use crate::core::{Observer, Severity};
use crate::sinks::{ConsoleSink, FileSink};
use std::cell::Cell;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

/// Prints `"Fatal: <message>"` and appends the same line to a log file.
///
/// Console and file are written independently: a failure on one side does
/// not stop the other. Each dropped line increments
/// [`dropped_writes`](Self::dropped_writes).
#[derive(Debug)]
pub struct FatalErrorObserver<W: Write = Stdout> {
    console: ConsoleSink<W>,
    log: FileSink,
    dropped: Cell<usize>,
}

impl FatalErrorObserver {
    /// Observer printing to standard output and appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_writer(path, std::io::stdout())
    }
}

impl<W: Write> FatalErrorObserver<W> {
    /// Observer printing to `writer` and appending to `path`.
    pub fn with_writer(path: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            console: ConsoleSink::new(writer),
            log: FileSink::new(path),
            dropped: Cell::new(0),
        }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        self.log.path()
    }

    /// Number of lines that could not be printed or appended.
    pub fn dropped_writes(&self) -> usize {
        self.dropped.get()
    }

    /// Consume the observer and return its console writer.
    pub fn into_writer(self) -> W {
        self.console.into_inner()
    }
}

impl<W: Write> Observer for FatalErrorObserver<W> {
    fn on_fatal_error(&self, message: &str) {
        let line = Severity::Fatal.format_line(message);
        absorb(self.console.write_line(&line), &self.dropped);
        absorb(self.log.append_line(&line), &self.dropped);
    }
}
