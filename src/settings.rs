//! Log file locations for the built-in file observers.

use crate::error::SettingsError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default error log file name.
pub const DEFAULT_ERROR_LOG: &str = "errors.log";

/// Default fatal error log file name.
pub const DEFAULT_FATAL_LOG: &str = "fatal_errors.log";

/// Where [`ErrorObserver`](crate::observers::ErrorObserver) and
/// [`FatalErrorObserver`](crate::observers::FatalErrorObserver) write.
///
/// Fields missing from a settings file keep their defaults.
///
/// # Examples
///
/// ```rust
/// use severity_notify::settings::LogPaths;
/// use std::path::Path;
///
/// let paths = LogPaths::default();
/// assert_eq!(paths.error_log, Path::new("errors.log"));
/// assert_eq!(paths.fatal_log, Path::new("fatal_errors.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogPaths {
    /// File receiving `"Error: ..."` lines.
    pub error_log: PathBuf,
    /// File receiving `"Fatal: ..."` lines.
    pub fatal_log: PathBuf,
}

impl Default for LogPaths {
    fn default() -> Self {
        Self {
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
            fatal_log: PathBuf::from(DEFAULT_FATAL_LOG),
        }
    }
}

impl LogPaths {
    /// Load log paths from a YAML, TOML or JSON file.
    ///
    /// The format is detected from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or has
    /// fields of the wrong type.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        settings
            .try_deserialize()
            .map_err(|e| SettingsError::DeserializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("logs.toml");
        fs::write(
            &settings_path,
            r#"
error_log = "/var/log/app/errors.log"
fatal_log = "/var/log/app/fatal.log"
"#,
        )
        .unwrap();

        let paths = LogPaths::from_file(&settings_path).unwrap();
        assert_eq!(paths.error_log, Path::new("/var/log/app/errors.log"));
        assert_eq!(paths.fatal_log, Path::new("/var/log/app/fatal.log"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("logs.yaml");
        fs::write(&settings_path, "error_log: custom.log\n").unwrap();

        let paths = LogPaths::from_file(&settings_path).unwrap();
        assert_eq!(paths.error_log, Path::new("custom.log"));
        assert_eq!(paths.fatal_log, Path::new(DEFAULT_FATAL_LOG));
    }

    #[test]
    fn test_load_json() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("logs.json");
        fs::write(&settings_path, r#"{"fatal_log": "f.log"}"#).unwrap();

        let paths = LogPaths::from_file(&settings_path).unwrap();
        assert_eq!(paths.error_log, Path::new(DEFAULT_ERROR_LOG));
        assert_eq!(paths.fatal_log, Path::new("f.log"));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = LogPaths::from_file("/nonexistent/logs.toml");
        assert!(matches!(result, Err(SettingsError::NotFound(_))));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("logs.toml");
        fs::write(&settings_path, "error_log = [unterminated").unwrap();

        assert!(LogPaths::from_file(&settings_path).is_err());
    }
}
