//! Append-only log file sink.

use crate::error::{Result, SinkError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only text log file.
///
/// No handle is kept between writes: every [`append_line`](Self::append_line)
/// opens the file in append mode (creating it if absent), writes one line,
/// flushes and closes it again.
///
/// # Examples
///
/// ```rust,no_run
/// use severity_notify::sinks::FileSink;
///
/// let sink = FileSink::new("errors.log");
/// sink.append_line("Error: disk full")?;
/// # Ok::<(), severity_notify::error::SinkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink for the file at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] if the file cannot be opened for appending
    /// (missing parent directory, permissions) and [`SinkError::Write`] if the
    /// write or flush fails.
    pub fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", line)
            .and_then(|()| file.flush())
            .map_err(|source| SinkError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
