//! Console observer for warnings.

use super::absorb;
use crate::core::{Observer, Severity};
use crate::sinks::ConsoleSink;
use std::cell::Cell;
use std::io::{Stdout, Write};

/// Prints `"Warning: <message>"` for every warning.
///
/// Errors and fatal errors are ignored.
///
/// # Examples
///
/// ```rust
/// use severity_notify::prelude::*;
///
/// let observer = WarningObserver::with_writer(Vec::new());
/// {
///     let mut observable = Observable::new();
///     observable.add_observer(&observer);
///     observable.warning("low disk space");
///     observable.error("not printed");
/// }
///
/// let printed = String::from_utf8(observer.into_writer()).unwrap();
/// assert_eq!(printed, "Warning: low disk space\n");
/// ```
#[derive(Debug)]
pub struct WarningObserver<W: Write = Stdout> {
    console: ConsoleSink<W>,
    dropped: Cell<usize>,
}

impl WarningObserver {
    /// Observer printing to standard output.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for WarningObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> WarningObserver<W> {
    /// Observer printing to `writer` instead of standard output.
    pub fn with_writer(writer: W) -> Self {
        Self {
            console: ConsoleSink::new(writer),
            dropped: Cell::new(0),
        }
    }

    /// Number of lines that could not be printed.
    pub fn dropped_writes(&self) -> usize {
        self.dropped.get()
    }

    /// Consume the observer and return its console writer.
    pub fn into_writer(self) -> W {
        self.console.into_inner()
    }
}

impl<W: Write> Observer for WarningObserver<W> {
    fn on_warning(&self, message: &str) {
        let line = Severity::Warning.format_line(message);
        absorb(self.console.write_line(&line), &self.dropped);
    }
}
