//! Log-file observer for errors.

use super::absorb;
use crate::core::{Observer, Severity};
use crate::sinks::FileSink;
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Appends `"Error: <message>"` to a log file for every error.
///
/// The file is opened, written and closed on each notification. When it
/// cannot be opened the line is dropped silently and counted in
/// [`dropped_writes`](Self::dropped_writes).
#[derive(Debug)]
pub struct ErrorObserver {
    log: FileSink,
    dropped: Cell<usize>,
}

impl ErrorObserver {
    /// Observer appending to the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            log: FileSink::new(path),
            dropped: Cell::new(0),
        }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        self.log.path()
    }

    /// Number of lines that could not be appended.
    pub fn dropped_writes(&self) -> usize {
        self.dropped.get()
    }
}

impl Observer for ErrorObserver {
    fn on_error(&self, message: &str) {
        let line = Severity::Error.format_line(message);
        absorb(self.log.append_line(&line), &self.dropped);
    }
}
