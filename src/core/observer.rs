//! Observer trait and notification severities.

use std::fmt;

/// Severity of a notification.
///
/// Each severity is delivered through its own handler on [`Observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Recoverable condition worth reporting.
    Warning,
    /// Operation failed.
    Error,
    /// Unrecoverable failure.
    Fatal,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Warning, Severity::Error, Severity::Fatal];

    /// Label used as the line prefix in sink output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    /// Format a sink line: `"<Label>: <message>"`, without trailing newline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use severity_notify::core::Severity;
    ///
    /// assert_eq!(Severity::Error.format_line("disk full"), "Error: disk full");
    /// ```
    pub fn format_line(self, message: &str) -> String {
        format!("{}: {}", self.label(), message)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listener for severity-tagged notifications.
///
/// Every handler defaults to a no-op, so implementors override only the
/// severities they care about. Handlers have no way to report failure back to
/// the [`Observable`](crate::core::Observable); any IO problem is the
/// observer's own business.
///
/// # Examples
///
/// ```rust
/// use severity_notify::core::{Observable, Observer};
/// use std::cell::Cell;
///
/// #[derive(Default)]
/// struct ErrorCounter {
///     seen: Cell<usize>,
/// }
///
/// impl Observer for ErrorCounter {
///     fn on_error(&self, _message: &str) {
///         self.seen.set(self.seen.get() + 1);
///     }
/// }
///
/// let counter = ErrorCounter::default();
/// let mut observable = Observable::new();
/// observable.add_observer(&counter);
///
/// observable.warning("ignored");
/// observable.error("counted");
/// assert_eq!(counter.seen.get(), 1);
/// ```
pub trait Observer {
    /// Called for every [`Severity::Warning`] notification.
    fn on_warning(&self, _message: &str) {}

    /// Called for every [`Severity::Error`] notification.
    fn on_error(&self, _message: &str) {}

    /// Called for every [`Severity::Fatal`] notification.
    fn on_fatal_error(&self, _message: &str) {}

    /// Route a notification to the handler matching `severity`.
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => self.on_warning(message),
            Severity::Error => self.on_error(message),
            Severity::Fatal => self.on_fatal_error(message),
        }
    }
}
