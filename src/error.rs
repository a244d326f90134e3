//! Error types for severity-notify.

use std::path::PathBuf;

/// Result type alias for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;

/// Failures of a notification sink.
///
/// Observers absorb these; they are never returned from
/// [`Observable`](crate::core::Observable) dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The log file could not be opened for appending.
    #[error("Failed to open log file {}: {source}", .path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be written or flushed to the log file.
    #[error("Failed to write log file {}: {source}", .path.display())]
    Write {
        /// Path that was being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be written to the console.
    #[error("Console write failed: {0}")]
    Console(#[from] std::io::Error),
}

impl SinkError {
    /// The file path involved, if this failure came from a file sink.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Open { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Console(_) => None,
        }
    }
}

/// Errors from loading [`LogPaths`](crate::settings::LogPaths).
#[cfg(feature = "settings")]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file could not be read or parsed.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The settings file parsed but did not match the expected shape.
    #[error("Failed to deserialize settings: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_mentions_path() {
        let err = SinkError::Open {
            path: PathBuf::from("/nope/errors.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let text = err.to_string();
        assert!(text.contains("/nope/errors.log"));
        assert!(text.contains("missing"));
        assert_eq!(err.path(), Some(std::path::Path::new("/nope/errors.log")));
    }

    #[test]
    fn test_console_error_has_no_path() {
        let err: SinkError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.path().is_none());
    }
}
