//! Console sink.

use crate::error::Result;
use std::cell::RefCell;
use std::io::{self, Stdout, Write};

/// Line-oriented console output.
///
/// Defaults to standard output. Any [`Write`] implementation can stand in for
/// the console, which is how tests capture what would have been printed.
pub struct ConsoleSink<W: Write = Stdout> {
    writer: RefCell<W>,
}

impl ConsoleSink {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Write `line` followed by a newline and flush.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Console`](crate::error::SinkError::Console) if the
    /// underlying writer fails.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> std::fmt::Debug for ConsoleSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let sink = ConsoleSink::new(Vec::new());
        sink.write_line("Warning: a").unwrap();
        sink.write_line("Warning: b").unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "Warning: a\nWarning: b\n");
    }

    #[test]
    fn test_writer_failure_is_reported() {
        let sink = ConsoleSink::new(BrokenPipe);
        let err = sink.write_line("Warning: lost").unwrap_err();
        assert!(matches!(err, SinkError::Console(_)));
    }
}
