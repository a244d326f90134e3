//! Demo driver: registers the three built-in observers, raises one
//! notification of each severity, then deregisters the error observer and
//! raises an error nobody records.
//!
//! Notification lines go to stdout and the default log files in the working
//! directory. Absorbed sink failures are reported on stderr.

use severity_notify::prelude::*;

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();

    let paths = LogPaths::default();

    let warning_observer = WarningObserver::new();
    let error_observer = ErrorObserver::new(&paths.error_log);
    let fatal_observer = FatalErrorObserver::new(&paths.fatal_log);

    let mut observable = Observable::new();
    observable.add_observer(&warning_observer);
    observable.add_observer(&error_observer);
    observable.add_observer(&fatal_observer);

    observable.warning("This is a warning");
    observable.error("This is an error");
    observable.fatal_error("This is a fatal error");

    observable.remove_observer(&error_observer);

    observable.error("This error is not recorded");
}
